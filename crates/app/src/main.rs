use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use scene_arcade_core::{
    AppConfig, AssetStore, CoordinatorError, FrameClock, GameModeCoordinator, Recorder,
    RecordingRenderer, RecordingSettings, SceneKind, Scoreboard, ScriptedArtboard,
    ScriptedStateMachine,
};
use tracing_subscriber::EnvFilter;

type Coordinator = GameModeCoordinator<ScriptedStateMachine, ScriptedArtboard>;

fn main() -> scene_arcade_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            scenes,
            frames,
            fps,
            record,
        } => run_play(&scenes, frames, fps, record.as_deref()),
        Commands::Check { scenes } => run_check(&scenes),
    }
}

fn run_play(
    scenes: &SceneArgs,
    frames: u64,
    fps: f64,
    record: Option<&Path>,
) -> scene_arcade_core::Result<()> {
    tracing::info!(menu = ?scenes.menu, game = ?scenes.game, frames, fps, "starting headless session");

    if !(fps.is_finite() && fps > 0.0) {
        return Err(CoordinatorError::msg(format!("frame rate must be positive, got {fps}")));
    }

    let mut coordinator = build_coordinator(scenes)?;
    let mut renderer = RecordingRenderer::new();
    let mut board = Scoreboard::new();
    let mut clock = FrameClock::new();
    let mut recorder = record.map(|path| {
        Recorder::new(RecordingSettings {
            output_path: path.display().to_string(),
            max_frames: None,
        })
    });
    if let Some(recorder) = recorder.as_mut() {
        recorder.start()?;
    }

    let frame_ms = 1000.0 / fps;
    let mut last_score = board.score().to_string();
    let mut last_high_score = board.high_score().to_string();

    for index in 0..frames {
        let delta = clock.tick(index as f64 * frame_ms);
        let report = coordinator.frame(delta, &mut renderer, &mut board)?;

        for change in &report.transitions {
            tracing::debug!(frame = report.frame, from = %change.from, to = %change.to, "transition");
        }
        if board.score() != last_score || board.high_score() != last_high_score {
            last_score = board.score().to_string();
            last_high_score = board.high_score().to_string();
            tracing::info!(frame = report.frame, score = %last_score, high_score = %last_high_score, "scoreboard");
        }
        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&report);
        }
    }

    if let Some(recorder) = recorder.as_mut() {
        recorder.stop()?;
        recorder.flush()?;
        tracing::info!(frames = recorder.frames().len(), "wrote frame transcript");
    }

    println!("{}", board.score());
    println!("{}", board.high_score());
    tracing::info!(
        phase = %coordinator.phase(),
        rounds = coordinator.round(),
        frames_drawn = renderer.frames(),
        "session finished"
    );
    Ok(())
}

fn run_check(scenes: &SceneArgs) -> scene_arcade_core::Result<()> {
    build_coordinator(scenes)?;
    tracing::info!(menu = ?scenes.menu, game = ?scenes.game, "scenes provide every required input");
    Ok(())
}

fn build_coordinator(scenes: &SceneArgs) -> scene_arcade_core::Result<Coordinator> {
    let config = match &scenes.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let mut store = AssetStore::new();
    store.load_path(SceneKind::Menu, &scenes.menu)?;
    store.load_path(SceneKind::Game, &scenes.game)?;

    let mut coordinator = GameModeCoordinator::new(
        config.coordinator,
        config.viewport,
        store.instantiate(SceneKind::Menu)?,
        store.instantiate(SceneKind::Game)?,
    );
    coordinator.validate()?;
    Ok(coordinator)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Menu and game scene coordinator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct SceneArgs {
    /// Scene bundle for the menu artboard.
    #[arg(long)]
    menu: PathBuf,
    /// Scene bundle for the game artboard.
    #[arg(long)]
    game: PathBuf,
    /// Optional JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the coordinator headlessly for a fixed number of frames.
    Play {
        #[command(flatten)]
        scenes: SceneArgs,
        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: u64,
        /// Simulated frame rate.
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
        /// Write a JSON transcript of every frame to this path.
        #[arg(short, long)]
        record: Option<PathBuf>,
    },
    /// Load both scenes and verify the inputs the coordinator relies on.
    Check {
        #[command(flatten)]
        scenes: SceneArgs,
    },
}
