//! Training choices
//!
//! The three settings a player walks through before a session. Each is a
//! small closed enumeration addressed by ordinal, so the selector can map
//! straight onto it and stepped boards can cycle through it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed, ordered set of options shown on one selection screen
pub trait Choice: Copy + Eq + Sized + 'static {
    /// Every option, in ordinal order
    const ALL: &'static [Self];

    /// Text shown on the second display line
    fn label(self) -> &'static str;

    /// Number of options
    fn count() -> u8 {
        Self::ALL.len() as u8
    }

    /// Position of this option in [`Choice::ALL`]
    fn ordinal(self) -> u8 {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0) as u8
    }

    /// Option at `ordinal`, clamped to the last one
    fn from_ordinal(ordinal: u8) -> Self {
        let last = Self::ALL.len() - 1;
        Self::ALL[(ordinal as usize).min(last)]
    }

    /// Step `delta` options forward (negative: backward), wrapping around
    ///
    /// Modulus is the option count, so stepping past the last option lands
    /// on the first and vice versa.
    fn cycle(self, delta: i8) -> Self {
        let n = Self::ALL.len() as i16;
        let next = (self.ordinal() as i16 + delta as i16).rem_euclid(n);
        Self::ALL[next as usize]
    }
}

/// Which hand holds the racket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Choice for Handedness {
    const ALL: &'static [Self] = &[Handedness::Right, Handedness::Left];

    fn label(self) -> &'static str {
        match self {
            Handedness::Right => "Right",
            Handedness::Left => "Left",
        }
    }
}

/// Stroke being drilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrainingType {
    #[default]
    Backhand,
    Forehand,
    Smash,
    /// Mixed strokes
    General,
}

impl Choice for TrainingType {
    const ALL: &'static [Self] = &[
        TrainingType::Backhand,
        TrainingType::Forehand,
        TrainingType::Smash,
        TrainingType::General,
    ];

    fn label(self) -> &'static str {
        match self {
            TrainingType::Backhand => "Backhand",
            TrainingType::Forehand => "Forehand",
            TrainingType::Smash => "Smash",
            TrainingType::General => "General",
        }
    }
}

/// Session difficulty, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Beginner,
    Easy,
    #[default]
    Normal,
    Hard,
    Extreme,
}

impl Choice for Difficulty {
    const ALL: &'static [Self] = &[
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }
}

/// The three choices as one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selections {
    pub handedness: Handedness,
    pub training: TrainingType,
    pub difficulty: Difficulty,
}

impl Selections {
    /// Factory defaults: right-handed, backhand, normal
    pub const DEFAULT: Self = Self {
        handedness: Handedness::Right,
        training: TrainingType::Backhand,
        difficulty: Difficulty::Normal,
    };
}
