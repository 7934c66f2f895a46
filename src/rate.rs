//! Frame rates supported by the timecode codec.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Frame rates supported by the codec.
///
/// A closed set: the two PAL-family integer rates and the two NTSC-family
/// fractional rates that use drop-frame timecode. Each rate carries a fixed
/// nominal (rounded integer) rate used for all timecode arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps (30000/1001, NTSC), drop-frame
    Fps29_97,
    /// 50 fps (PAL progressive)
    Fps50,
    /// 59.94 fps (60000/1001, NTSC progressive), drop-frame
    Fps59_94,
}

impl FrameRate {
    /// Get the nominal frame rate (integer frames per second for timecode
    /// arithmetic and display).
    #[must_use]
    pub fn nominal_fps(&self) -> i64 {
        match self {
            Self::Fps25 => 25,
            Self::Fps29_97 => 30,
            Self::Fps50 => 50,
            Self::Fps59_94 => 60,
        }
    }

    /// Check if this frame rate uses drop-frame timecode.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        matches!(self, Self::Fps29_97 | Self::Fps59_94)
    }

    /// Number of frame labels skipped at the start of each minute (except
    /// every 10th minute). Zero for non-drop rates.
    #[must_use]
    pub fn dropped_per_minute(&self) -> i64 {
        match self {
            Self::Fps29_97 => 2,
            Self::Fps59_94 => 4,
            Self::Fps25 | Self::Fps50 => 0,
        }
    }

    /// Number of labelable frames in a 24-hour day, after drop-frame skips
    /// are removed. This is the modulus for day rollover.
    ///
    /// Per hour, 54 minutes carry skipped labels (all but the six multiples
    /// of ten), so a drop-frame day holds `24 * 3600 * fps - 24 * 54 * drop`
    /// labels.
    #[must_use]
    pub fn frames_per_day(&self) -> i64 {
        match self {
            Self::Fps25 => 2_160_000,
            Self::Fps29_97 => 2_589_408,
            Self::Fps50 => 4_320_000,
            Self::Fps59_94 => 5_178_816,
        }
    }

    /// The canonical string label for this rate.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fps25 => "25",
            Self::Fps29_97 => "29.97",
            Self::Fps50 => "50",
            Self::Fps59_94 => "59.94",
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FrameRate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "25" => Ok(Self::Fps25),
            "29.97" => Ok(Self::Fps29_97),
            "50" => Ok(Self::Fps50),
            // "59.97" is the label some broadcast gear uses for 60000/1001
            "59.94" | "59.97" => Ok(Self::Fps59_94),
            other => Err(TimecodeError::unknown_frame_rate(other)),
        }
    }
}
