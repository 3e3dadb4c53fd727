//! Two-state mood tracker

use std::fmt;

/// Mood of a tracked subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Calm,
    Upset,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Calm => write!(f, "calm"),
            Mood::Upset => write!(f, "upset"),
        }
    }
}

/// Folds good and bad days into a mood.
///
/// Both transitions are idempotent: a bad day on an upset tracker keeps it
/// upset, a good day on a calm tracker keeps it calm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodTracker {
    mood: Mood,
}

impl MoodTracker {
    /// New trackers start calm.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_upset(&self) -> bool {
        self.mood == Mood::Upset
    }

    pub fn record_bad_day(&mut self) {
        self.mood = Mood::Upset;
    }

    pub fn record_good_day(&mut self) {
        self.mood = Mood::Calm;
    }
}
