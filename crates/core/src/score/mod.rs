use serde::{Deserialize, Serialize};

/// Current and best score for the lifetime of the process.
///
/// The round score starts at -1: the game enters its hit state once as the
/// character lands, so the first real hit shows 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: i32,
    high_score: i32,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self {
            score: Self::ROUND_START,
            high_score: 0,
        }
    }
}

impl ScoreTracker {
    pub const ROUND_START: i32 = -1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    /// Score as shown to the player, never negative.
    pub fn displayed_score(&self) -> i32 {
        self.score.max(0)
    }

    /// Counts one hit and returns the score to display.
    pub fn record_hit(&mut self) -> i32 {
        self.score += 1;
        self.displayed_score()
    }

    /// Closes the round: keeps the best score, restarts the round score and
    /// returns the high score to display.
    pub fn finish_round(&mut self) -> i32 {
        let final_score = self.score;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
        self.score = Self::ROUND_START;
        self.high_score.max(final_score)
    }
}
