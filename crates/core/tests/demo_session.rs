//! Runs the bundled demo scenes through two rounds at 60 frames per second.

use scene_arcade_core::{
    AppConfig, AssetStore, Character, GameModeCoordinator, Mode, RecordingRenderer, SceneKind,
    Scoreboard, ScriptedArtboard, ScriptedStateMachine, SessionPhase,
};

const DT: f32 = 1.0 / 60.0;

fn demo() -> GameModeCoordinator<ScriptedStateMachine, ScriptedArtboard> {
    let config =
        AppConfig::from_json_str(include_str!("../../../demos/config.json")).expect("config");
    let mut store = AssetStore::new();
    store
        .load_str(SceneKind::Menu, "menu.json", include_str!("../../../demos/menu.json"))
        .expect("menu bundle");
    store
        .load_str(SceneKind::Game, "game.json", include_str!("../../../demos/game.json"))
        .expect("game bundle");

    let mut coordinator = GameModeCoordinator::new(
        config.coordinator,
        config.viewport,
        store.instantiate(SceneKind::Menu).expect("menu scene"),
        store.instantiate(SceneKind::Game).expect("game scene"),
    );
    coordinator.validate().expect("demo scenes are complete");
    coordinator
}

#[test]
fn demo_plays_two_rounds() {
    let mut coordinator = demo();
    let mut renderer = RecordingRenderer::new();
    let mut board = Scoreboard::new();

    let mut run = |coordinator: &mut GameModeCoordinator<_, _>, frames: usize| {
        for _ in 0..frames {
            coordinator
                .frame(DT, &mut renderer, &mut board)
                .expect("frame");
        }
    };

    run(&mut coordinator, 60);
    assert_eq!(coordinator.mode(), Mode::Menu);
    assert_eq!(coordinator.phase(), SessionPhase::AwaitingChoice);

    run(&mut coordinator, 60);
    assert_eq!(coordinator.mode(), Mode::Game);
    assert_eq!(coordinator.chosen(), Some(Character::Duck));

    run(&mut coordinator, 210);
    assert_eq!(coordinator.phase(), SessionPhase::EndingRound);
    assert_eq!(coordinator.scores().high_score(), 3);

    run(&mut coordinator, 270);
    assert_eq!(coordinator.round(), 1);
    assert_eq!(coordinator.phase(), SessionPhase::Playing);
    assert_eq!(coordinator.chosen(), Some(Character::Chicken));
    assert_eq!(coordinator.scores().score(), 2);

    let menu = coordinator.scene(SceneKind::Menu).machine();
    assert_eq!(menu.fire_count("reset"), 1);
    let game = coordinator.scene(SceneKind::Game).machine();
    assert_eq!(game.fire_count("play"), 2);
    assert_eq!(game.input_value("duck"), Some(false));
    assert_eq!(game.input_value("chicken"), Some(true));

    assert_eq!(board.score(), "Score: 2");
    assert_eq!(board.high_score(), "High Score: 3");
    assert_eq!(renderer.drawn(), vec!["Alt Game"]);
}
