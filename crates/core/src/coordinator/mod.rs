use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::render::{high_score_text, score_text};
use crate::{
    Aabb, AdvancePolicy, Artboard, Character, CharacterSelector, CoordinatorConfig, CoordinatorError,
    FiredTrigger, FrameReport, Mode, PhaseChange, Renderer, Result, SceneInstance, SceneKind,
    ScoreDisplay, ScoreTracker, StartPolicy, StateChanges, StateMachine, ViewportConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    AwaitingChoice,
    Starting,
    Playing,
    EndingRound,
    Resetting,
}

impl SessionPhase {
    pub fn can_transition_to(&self, next: SessionPhase) -> bool {
        matches!(
            (self, next),
            (Self::AwaitingChoice, Self::Starting)
                | (Self::Starting, Self::Playing)
                | (Self::Playing, Self::EndingRound)
                | (Self::EndingRound, Self::Resetting)
                | (Self::Resetting, Self::AwaitingChoice)
        )
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingChoice => "awaiting-choice",
            Self::Starting => "starting",
            Self::Playing => "playing",
            Self::EndingRound => "ending-round",
            Self::Resetting => "resetting",
        };
        f.write_str(name)
    }
}

/// Once-per-round latches for the two cross-machine triggers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RoundGuards {
    play_fired: bool,
    reset_fired: bool,
}

pub struct GameModeCoordinator<M, A> {
    config: CoordinatorConfig,
    viewport: ViewportConfig,
    menu: SceneInstance<M, A>,
    game: SceneInstance<M, A>,
    selector: CharacterSelector,
    scores: ScoreTracker,
    phase: SessionPhase,
    mode: Mode,
    chosen: Option<Character>,
    guards: RoundGuards,
    round: u64,
    frame: u64,
    halted: Option<String>,
}

impl<M: StateMachine, A: Artboard> GameModeCoordinator<M, A> {
    pub fn new(
        config: CoordinatorConfig,
        viewport: ViewportConfig,
        menu: SceneInstance<M, A>,
        game: SceneInstance<M, A>,
    ) -> Self {
        let selector = CharacterSelector::new(config.markers.idle_ready.clone());
        Self {
            config,
            viewport,
            menu,
            game,
            selector,
            scores: ScoreTracker::new(),
            phase: SessionPhase::AwaitingChoice,
            mode: Mode::Menu,
            chosen: None,
            guards: RoundGuards::default(),
            round: 0,
            frame: 0,
            halted: None,
        }
    }

    /// Resolves every input the session will touch so a misconfigured scene
    /// fails at startup instead of mid-round.
    pub fn validate(&mut self) -> Result<()> {
        self.game.require_trigger(&self.config.inputs.play)?;
        self.menu.require_trigger(&self.config.inputs.reset)?;
        for character in Character::ALL {
            self.game.require_bool(character.input_name())?;
        }
        Ok(())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn chosen(&self) -> Option<Character> {
        self.chosen
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    pub fn scene(&self, kind: SceneKind) -> &SceneInstance<M, A> {
        match kind {
            SceneKind::Menu => &self.menu,
            SceneKind::Game => &self.game,
        }
    }

    pub fn scene_mut(&mut self, kind: SceneKind) -> &mut SceneInstance<M, A> {
        match kind {
            SceneKind::Menu => &mut self.menu,
            SceneKind::Game => &mut self.game,
        }
    }

    /// Runs one frame. A zero delta only redraws: nothing is advanced and no
    /// state change is consumed. Any fatal error halts the coordinator; every
    /// later frame fails with [`CoordinatorError::Halted`] and draws nothing.
    pub fn frame(
        &mut self,
        delta_seconds: f32,
        renderer: &mut dyn Renderer,
        display: &mut dyn ScoreDisplay,
    ) -> Result<FrameReport> {
        if let Some(reason) = &self.halted {
            return Err(CoordinatorError::Halted(reason.clone()));
        }

        let delta = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };
        let mut report = FrameReport {
            frame: self.frame,
            delta_seconds: delta,
            phase: self.phase,
            mode: self.mode,
            score: self.scores.score(),
            high_score: self.scores.high_score(),
            chosen: self.chosen,
            transitions: Vec::new(),
            fired: Vec::new(),
        };
        self.frame += 1;

        if delta > 0.0 {
            if let Err(err) = self.step(delta, display, &mut report) {
                error!(%err, phase = %self.phase, "halting coordinator");
                self.halted = Some(err.to_string());
                return Err(err);
            }
        }

        self.present(renderer);

        report.phase = self.phase;
        report.mode = self.mode;
        report.score = self.scores.score();
        report.high_score = self.scores.high_score();
        report.chosen = self.chosen;
        Ok(report)
    }

    fn step(
        &mut self,
        delta: f32,
        display: &mut dyn ScoreDisplay,
        report: &mut FrameReport,
    ) -> Result<()> {
        let mut menu_advanced = false;
        let mut game_advanced = false;

        if self.mode == Mode::Menu {
            self.menu.advance(delta);
            menu_advanced = true;
            self.apply_menu_changes(report)?;
        }

        if self.mode == Mode::Game {
            self.game.advance(delta);
            game_advanced = true;

            let changes = self.game.state_changes();
            self.apply_game_changes(&changes, display, report)?;
        }

        if self.config.advance == AdvancePolicy::Both {
            if !game_advanced {
                self.game.advance(delta);
            }
            if !menu_advanced {
                self.menu.advance(delta);
                // A ready marker earlier in this frame handed the screen back
                // to the menu, so its changes are no longer hidden.
                if self.mode == Mode::Menu {
                    self.apply_menu_changes(report)?;
                }
            }
        }

        Ok(())
    }

    fn apply_menu_changes(&mut self, report: &mut FrameReport) -> Result<()> {
        let changes = self.menu.state_changes();

        if self.phase == SessionPhase::AwaitingChoice {
            if let Some(character) = self.selector.select(&changes, self.menu.machine()) {
                self.begin_round(character, report)?;
            }
        }

        if self.phase == SessionPhase::Starting
            && changes.contains(&self.config.markers.outro_complete)
        {
            self.start_play(report)?;
        }

        Ok(())
    }

    fn begin_round(&mut self, character: Character, report: &mut FrameReport) -> Result<()> {
        if !self.transition(SessionPhase::Starting, report) {
            return Ok(());
        }
        info!(%character, round = self.round, "character chosen");
        self.chosen = Some(character);

        match self.config.start {
            StartPolicy::Immediate => self.start_play(report),
            StartPolicy::AfterOutro => {
                debug!(marker = %self.config.markers.outro_complete, "play waits for menu outro");
                Ok(())
            }
        }
    }

    /// Switches to the game, fires play and selects the chosen character on
    /// the game machine. Guards are checked here, at fire time.
    fn start_play(&mut self, report: &mut FrameReport) -> Result<()> {
        if self.guards.play_fired || self.phase != SessionPhase::Starting {
            return Ok(());
        }
        let Some(character) = self.chosen else {
            return Ok(());
        };

        self.mode = Mode::Game;
        let play = self.config.inputs.play.clone();
        self.game.fire(&play)?;
        self.guards.play_fired = true;
        report.fired.push(FiredTrigger {
            scene: SceneKind::Game,
            name: play,
        });

        self.game.set_bool(character.input_name(), true)?;
        self.transition(SessionPhase::Playing, report);
        Ok(())
    }

    /// Score markers are applied before the round-end and ready markers so
    /// the round-end publication sees the final score.
    fn apply_game_changes(
        &mut self,
        changes: &StateChanges,
        display: &mut dyn ScoreDisplay,
        report: &mut FrameReport,
    ) -> Result<()> {
        let markers = &self.config.markers;
        let hits = changes.count(&markers.hit);
        let round_over = changes.contains(&markers.round_over);
        let round_end = changes.contains(&markers.round_end);
        let ready = changes.contains(&markers.ready);

        for _ in 0..hits {
            let shown = self.scores.record_hit();
            debug!(score = self.scores.score(), "hit");
            display.set_score_text(&score_text(shown));
        }

        if round_over {
            let best = self.scores.finish_round();
            info!(high_score = best, "round over");
            display.set_high_score_text(&high_score_text(best));
        }

        if round_end {
            self.end_round(display, report)?;
        }

        if ready {
            if self.guards.reset_fired && self.phase == SessionPhase::EndingRound {
                self.reset_round(report)?;
            } else {
                warn!(phase = %self.phase, "ready marker before round end, ignoring");
            }
        }

        Ok(())
    }

    fn end_round(&mut self, display: &mut dyn ScoreDisplay, report: &mut FrameReport) -> Result<()> {
        if self.guards.reset_fired {
            return Ok(());
        }
        if !self.transition(SessionPhase::EndingRound, report) {
            return Ok(());
        }

        display.set_high_score_text(&high_score_text(self.scores.high_score()));
        display.set_score_text(&score_text(self.scores.displayed_score()));

        let reset = self.config.inputs.reset.clone();
        self.menu.fire(&reset)?;
        self.guards.reset_fired = true;
        report.fired.push(FiredTrigger {
            scene: SceneKind::Menu,
            name: reset,
        });
        Ok(())
    }

    fn reset_round(&mut self, report: &mut FrameReport) -> Result<()> {
        if !self.transition(SessionPhase::Resetting, report) {
            return Ok(());
        }

        if let Some(character) = self.chosen.take() {
            self.game.set_bool(character.input_name(), false)?;
        }
        self.guards = RoundGuards::default();
        self.round += 1;
        self.mode = Mode::Menu;

        self.transition(SessionPhase::AwaitingChoice, report);
        Ok(())
    }

    /// Moves to `next` if the transition table allows it. Out of order
    /// requests are logged and dropped.
    fn transition(&mut self, next: SessionPhase, report: &mut FrameReport) -> bool {
        if !self.phase.can_transition_to(next) {
            warn!(from = %self.phase, to = %next, "ignoring out of order transition");
            return false;
        }
        info!(from = %self.phase, to = %next, mode = %self.mode, "session phase");
        report.transitions.push(PhaseChange {
            from: self.phase,
            to: next,
        });
        self.phase = next;
        true
    }

    fn present(&self, renderer: &mut dyn Renderer) {
        let active = match self.mode {
            Mode::Menu => self.menu.artboard(),
            Mode::Game => self.game.artboard(),
        };
        let layout = self.config.layout;

        renderer.clear();
        renderer.save();
        renderer.align(
            layout.fit,
            layout.alignment,
            Aabb::from_size(self.viewport.width, self.viewport.height),
            active.bounds(),
        );
        renderer.draw(active);
        renderer.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DrawCommand, RecordingRenderer, Scoreboard, ScriptedArtboard, ScriptedInput,
        ScriptedStateMachine,
    };

    const DT: f32 = 0.25;

    type Coordinator = GameModeCoordinator<ScriptedStateMachine, ScriptedArtboard>;

    fn characters(value_for: Option<&str>) -> Vec<ScriptedInput> {
        Character::ALL
            .iter()
            .map(|character| {
                let name = character.input_name();
                ScriptedInput::boolean(name, value_for == Some(name))
            })
            .collect()
    }

    fn coordinator_with(config: CoordinatorConfig) -> Coordinator {
        let mut menu_inputs = vec![ScriptedInput::trigger("reset")];
        menu_inputs.extend(characters(None));
        let mut game_inputs = vec![ScriptedInput::trigger("play")];
        game_inputs.extend(characters(None));

        let menu = SceneInstance::new(
            SceneKind::Menu,
            ScriptedStateMachine::new(menu_inputs),
            ScriptedArtboard::new("Menu", 500.0, 500.0),
        );
        let game = SceneInstance::new(
            SceneKind::Game,
            ScriptedStateMachine::new(game_inputs),
            ScriptedArtboard::new("Alt Game", 500.0, 700.0),
        );
        GameModeCoordinator::new(config, ViewportConfig::default(), menu, game)
    }

    fn coordinator() -> Coordinator {
        coordinator_with(CoordinatorConfig::default())
    }

    struct Harness {
        coordinator: Coordinator,
        renderer: RecordingRenderer,
        board: Scoreboard,
    }

    impl Harness {
        fn new(coordinator: Coordinator) -> Self {
            Self {
                coordinator,
                renderer: RecordingRenderer::new(),
                board: Scoreboard::new(),
            }
        }

        fn frame(&mut self, delta: f32) -> FrameReport {
            self.coordinator
                .frame(delta, &mut self.renderer, &mut self.board)
                .unwrap()
        }

        fn menu(&mut self) -> &mut ScriptedStateMachine {
            self.coordinator.scene_mut(SceneKind::Menu).machine_mut()
        }

        fn game(&mut self) -> &mut ScriptedStateMachine {
            self.coordinator.scene_mut(SceneKind::Game).machine_mut()
        }

        fn game_states<const N: usize>(&mut self, states: [&str; N]) -> FrameReport {
            self.game().queue_states(states);
            self.frame(DT)
        }

        fn choose(&mut self, character: &str) -> FrameReport {
            self.menu().set_input(character, true);
            self.menu().queue_states(["game_idle"]);
            self.frame(DT)
        }
    }

    #[test]
    fn choosing_a_character_starts_play() {
        let mut h = Harness::new(coordinator());
        let report = h.choose("turkey");

        assert!(report.entered(SessionPhase::Starting));
        assert!(report.entered(SessionPhase::Playing));
        assert!(report.fired(SceneKind::Game, "play"));
        assert_eq!(h.coordinator.chosen(), Some(Character::Turkey));
        assert_eq!(h.coordinator.mode(), Mode::Game);
        assert_eq!(h.game().fire_count("play"), 1);
        assert_eq!(h.game().input_value("turkey"), Some(true));
        assert_eq!(h.renderer.drawn(), vec!["Alt Game"]);
    }

    #[test]
    fn menu_without_idle_marker_keeps_waiting() {
        let mut h = Harness::new(coordinator());
        h.menu().set_input("duck", true);
        h.menu().queue_states(["hover"]);
        h.frame(DT);

        assert_eq!(h.coordinator.phase(), SessionPhase::AwaitingChoice);
        assert_eq!(h.renderer.drawn(), vec!["Menu"]);
        assert_eq!(h.game().advances(), 0);
    }

    #[test]
    fn hits_publish_non_negative_scores_in_order() {
        let mut h = Harness::new(coordinator());
        h.choose("duck");

        let mut shown = Vec::new();
        for _ in 0..3 {
            h.game_states(["Hit"]);
            shown.push(h.board.score().to_string());
        }

        assert_eq!(shown, vec!["Score: 0", "Score: 1", "Score: 2"]);
        assert_eq!(h.coordinator.scores().score(), 2);
    }

    #[test]
    fn round_over_records_high_score() {
        let mut h = Harness::new(coordinator());
        h.choose("chicken");
        for _ in 0..5 {
            h.game_states(["Hit"]);
        }
        h.game_states(["End"]);

        assert_eq!(h.coordinator.scores().high_score(), 4);
        assert_eq!(h.coordinator.scores().score(), -1);
        assert_eq!(h.board.high_score(), "High Score: 4");
    }

    #[test]
    fn round_end_fires_menu_reset_once() {
        let mut h = Harness::new(coordinator());
        h.choose("duck");
        h.game_states(["End"]);

        let report = h.game_states(["Back_Gone"]);
        assert!(report.entered(SessionPhase::EndingRound));
        assert!(report.fired(SceneKind::Menu, "reset"));

        let again = h.game_states(["Back_Gone"]);
        assert!(again.fired.is_empty());
        assert_eq!(h.menu().fire_count("reset"), 1);
        assert_eq!(h.coordinator.mode(), Mode::Game);
    }

    #[test]
    fn ready_marker_returns_to_menu() {
        let mut h = Harness::new(coordinator());
        h.choose("balloon");
        h.game_states(["End"]);
        h.game_states(["Back_Gone"]);

        let report = h.game_states(["Wait"]);
        assert!(report.entered(SessionPhase::Resetting));
        assert!(report.entered(SessionPhase::AwaitingChoice));
        assert_eq!(h.coordinator.chosen(), None);
        assert_eq!(h.coordinator.mode(), Mode::Menu);
        assert_eq!(h.game().input_value("balloon"), Some(false));
        assert_eq!(h.coordinator.round(), 1);
        assert_eq!(h.renderer.drawn(), vec!["Menu"]);
    }

    #[test]
    fn ready_marker_before_round_end_is_ignored() {
        let mut h = Harness::new(coordinator());
        h.choose("turkey");
        h.game_states(["Wait"]);

        assert_eq!(h.coordinator.phase(), SessionPhase::Playing);
        assert_eq!(h.coordinator.chosen(), Some(Character::Turkey));
    }

    #[test]
    fn markers_in_one_frame_apply_scores_first() {
        let mut h = Harness::new(coordinator());
        h.choose("duck");
        h.game_states(["Hit", "Hit"]);

        let report = h.game_states(["Back_Gone", "Wait", "End", "Hit"]);
        assert_eq!(h.coordinator.scores().high_score(), 2);
        assert_eq!(h.board.high_score(), "High Score: 2");
        assert!(report.fired(SceneKind::Menu, "reset"));
        assert_eq!(h.coordinator.phase(), SessionPhase::AwaitingChoice);
    }

    #[test]
    fn second_round_fires_play_again() {
        let mut h = Harness::new(coordinator());
        h.choose("duck");
        h.game_states(["Back_Gone"]);
        h.game_states(["Wait"]);
        h.menu().set_input("duck", false);

        let report = h.choose("chicken");
        assert!(report.fired(SceneKind::Game, "play"));
        assert_eq!(h.game().fire_count("play"), 2);
        assert_eq!(h.game().input_value("chicken"), Some(true));
        assert_eq!(h.game().input_value("duck"), Some(false));
    }

    #[test]
    fn zero_delta_frames_change_nothing() {
        let mut h = Harness::new(coordinator());
        h.menu().set_input("turkey", true);
        h.menu().queue_states(["game_idle"]);

        let report = h.frame(0.0);
        assert!(report.transitions.is_empty());
        assert_eq!(h.coordinator.mode(), Mode::Menu);
        assert_eq!(h.menu().advances(), 0);
        assert_eq!(h.renderer.frames(), 1);

        h.frame(DT);
        assert_eq!(h.coordinator.mode(), Mode::Game);
    }

    fn after_outro() -> Coordinator {
        coordinator_with(CoordinatorConfig {
            start: StartPolicy::AfterOutro,
            ..CoordinatorConfig::default()
        })
    }

    #[test]
    fn outro_start_keeps_menu_visible_until_marker() {
        let mut h = Harness::new(after_outro());

        h.choose("turkey");
        assert_eq!(h.coordinator.phase(), SessionPhase::Starting);
        assert_eq!(h.coordinator.mode(), Mode::Menu);
        assert_eq!(h.game().fire_count("play"), 0);

        let report = h.frame(0.6);
        assert!(report.fired.is_empty());
        assert_eq!(h.coordinator.mode(), Mode::Menu);
        assert_eq!(h.renderer.drawn(), vec!["Menu"]);

        h.menu().queue_states(["outro_done"]);
        let report = h.frame(DT);
        assert!(report.fired(SceneKind::Game, "play"));
        assert_eq!(h.coordinator.mode(), Mode::Game);
        assert_eq!(h.coordinator.phase(), SessionPhase::Playing);
        assert_eq!(h.game().input_value("turkey"), Some(true));
        assert_eq!(h.game().advances(), 1);
    }

    #[test]
    fn outro_marker_before_a_choice_is_not_remembered() {
        let mut h = Harness::new(after_outro());
        h.menu().queue_states(["outro_done"]);
        h.frame(DT);
        assert_eq!(h.coordinator.phase(), SessionPhase::AwaitingChoice);

        h.choose("duck");
        h.frame(DT);
        assert_eq!(h.coordinator.phase(), SessionPhase::Starting);
        assert_eq!(h.game().fire_count("play"), 0);
    }

    #[test]
    fn outro_marker_in_the_choice_frame_starts_at_once() {
        let mut h = Harness::new(after_outro());
        h.menu().set_input("chicken", true);
        h.menu().queue_states(["game_idle", "outro_done"]);
        let report = h.frame(DT);

        assert!(report.entered(SessionPhase::Starting));
        assert!(report.entered(SessionPhase::Playing));
        assert_eq!(h.game().fire_count("play"), 1);
    }

    #[test]
    fn missing_input_halts_the_coordinator() {
        let menu = SceneInstance::new(
            SceneKind::Menu,
            ScriptedStateMachine::new(characters(Some("duck"))),
            ScriptedArtboard::new("Menu", 500.0, 500.0),
        );
        let game = SceneInstance::new(
            SceneKind::Game,
            ScriptedStateMachine::new(characters(None)),
            ScriptedArtboard::new("Alt Game", 500.0, 500.0),
        );
        let mut coordinator = GameModeCoordinator::new(
            CoordinatorConfig::default(),
            ViewportConfig::default(),
            menu,
            game,
        );
        let mut renderer = RecordingRenderer::new();
        let mut board = Scoreboard::new();

        assert!(coordinator.validate().is_err());

        coordinator
            .scene_mut(SceneKind::Menu)
            .machine_mut()
            .queue_states(["game_idle"]);
        let err = coordinator.frame(DT, &mut renderer, &mut board).unwrap_err();
        assert!(matches!(err, CoordinatorError::MissingInput { scene: SceneKind::Game, .. }));
        assert!(coordinator.is_halted());

        let err = coordinator.frame(DT, &mut renderer, &mut board).unwrap_err();
        assert!(matches!(err, CoordinatorError::Halted(_)));
        assert_eq!(renderer.frames(), 0);
    }

    #[test]
    fn validate_accepts_complete_scenes() {
        let mut coordinator = coordinator();
        assert!(coordinator.validate().is_ok());
    }

    #[test]
    fn both_policy_advances_hidden_scene_without_reacting() {
        let config = CoordinatorConfig {
            advance: AdvancePolicy::Both,
            ..CoordinatorConfig::default()
        };
        let mut h = Harness::new(coordinator_with(config));
        h.game().queue_states(["Hit"]);
        h.frame(DT);

        assert_eq!(h.game().advances(), 1);
        assert_eq!(h.coordinator.scores().score(), -1);
        assert_eq!(h.board.updates(), 0);
    }

    #[test]
    fn both_policy_reads_menu_choice_on_the_frame_it_returns() {
        let config = CoordinatorConfig {
            advance: AdvancePolicy::Both,
            ..CoordinatorConfig::default()
        };
        let mut h = Harness::new(coordinator_with(config));
        h.choose("duck");
        h.game_states(["Back_Gone"]);

        h.menu().set_input("duck", false);
        h.menu().set_input("chicken", true);
        h.menu().queue_states(["game_idle"]);
        let report = h.game_states(["Wait"]);

        assert!(report.entered(SessionPhase::AwaitingChoice));
        assert!(report.fired(SceneKind::Game, "play"));
        assert_eq!(h.coordinator.phase(), SessionPhase::Playing);
        assert_eq!(h.coordinator.chosen(), Some(Character::Chicken));
        assert_eq!(h.game().fire_count("play"), 2);
        assert_eq!(h.game().input_value("duck"), Some(false));
        assert_eq!(h.game().input_value("chicken"), Some(true));
    }

    #[test]
    fn presents_active_artboard_aligned_to_viewport() {
        let mut h = Harness::new(coordinator());
        h.frame(DT);

        let commands = h.renderer.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(
            commands.get(2),
            Some(&DrawCommand::Align {
                fit: crate::Fit::Contain,
                alignment: crate::Alignment::Center,
                frame: Aabb::from_size(500.0, 500.0),
                content: Aabb::from_size(500.0, 500.0),
            })
        );
        assert_eq!(commands.last(), Some(&DrawCommand::Restore));
    }

    #[test]
    fn transition_table_follows_the_cycle() {
        use SessionPhase::*;
        assert!(AwaitingChoice.can_transition_to(Starting));
        assert!(Resetting.can_transition_to(AwaitingChoice));
        assert!(!Playing.can_transition_to(Resetting));
        assert!(!AwaitingChoice.can_transition_to(Playing));
    }
}
