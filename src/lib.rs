//! Day-aware SMPTE timecode with drop-frame support.
//!
//! This crate converts between linear frame counts and SMPTE-style timecode
//! strings (`HH:MM:SS:FF`, or `HH:MM:SS;FF` for drop-frame rates), and
//! layers a calendar-date-aware timecode value on top:
//!
//! - **Codec**: stateless [`parse`] / [`format`] between timecode strings
//!   and signed frame counts, with a forgiving contract: malformed input is
//!   clamped or zero-filled, never rejected
//! - **Drop-frame**: accurate label skipping for the NTSC rates
//!   (29.97/59.94 fps) so timecode tracks wall-clock time
//! - **[`DateTimecode`]**: a date plus a position within the day, with
//!   add/subtract arithmetic that rolls the date over at midnight
//!
//! # Quick Start
//!
//! ```rust
//! use datecode::{format, parse, DateTimecode, FrameRate};
//!
//! // Codec: string <-> frame count
//! let frames = parse("00:01:00;00", FrameRate::Fps29_97);
//! assert_eq!(frames, 1800);
//! assert_eq!(format(frames, FrameRate::Fps29_97, false), "00:01:00;02");
//!
//! // Day-aware value: crossing midnight moves the date
//! let mut tc = DateTimecode::new("2014-01-01 23:59:59;29", FrameRate::Fps29_97).unwrap();
//! tc.add(1);
//! assert_eq!(tc.format(), "2014-01-02 00:00:00;00");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! At 29.97 fps, labels `;00` and `;01` are skipped at the start of every
//! minute that is not a multiple of ten (four labels at 59.94 fps). The
//! codec hides this: counts map to the labels that actually exist, and
//! parsing a skipped label collapses it onto the first valid one, so
//! `parse(format(f, rate), rate) == f` holds for every count within a day.
//!
//! ```rust
//! use datecode::{format, parse, FrameRate};
//!
//! assert_eq!(format(1800, FrameRate::Fps29_97, false), "00:01:00;02");
//! assert_eq!(parse("00:01:00;00", FrameRate::Fps29_97), 1800);
//! assert_eq!(parse("00:01:00;01", FrameRate::Fps29_97), 1800);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod codec;
pub mod dropframe;
pub mod dtc;
pub mod error;
pub mod rate;

// Re-export main types
pub use codec::{format, parse, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
pub use dtc::{DateTimecode, IntoFrames};
pub use error::{Result, TimecodeError};
pub use rate::FrameRate;

// Re-export drop-frame utilities
pub use dropframe::{dropped_frames, is_dropped_label, reinserted_frames};

/// Check whether a frame-rate label names a drop-frame rate.
///
/// Unknown labels are not drop-frame.
///
/// # Example
/// ```rust
/// assert!(datecode::is_drop_frame("29.97"));
/// assert!(!datecode::is_drop_frame("25"));
/// assert!(!datecode::is_drop_frame("24"));
/// ```
#[must_use]
pub fn is_drop_frame(label: &str) -> bool {
    label
        .parse::<FrameRate>()
        .is_ok_and(|rate| rate.is_drop_frame())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_drop_frame() {
        assert!(is_drop_frame("29.97"));
        assert!(is_drop_frame("59.94"));
        assert!(is_drop_frame("59.97"));
        assert!(!is_drop_frame("25"));
        assert!(!is_drop_frame("50"));
        assert!(!is_drop_frame("bogus"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_HOURS, 23);
        assert_eq!(MAX_MINUTES, 59);
        assert_eq!(MAX_SECONDS, 59);
    }

    #[test]
    fn test_skipped_labels_collapse() {
        assert_eq!(format(1800, FrameRate::Fps29_97, false), "00:01:00;02");
        assert_eq!(parse("00:01:00;00", FrameRate::Fps29_97), 1800);
        assert_eq!(parse("00:01:00;01", FrameRate::Fps29_97), 1800);
    }

    #[test]
    fn test_signed_offsets() {
        assert_eq!(parse("-00:00:01;00", FrameRate::Fps25), -25);
        assert_eq!(format(-25, FrameRate::Fps25, false), "-00:00:01:00");
        assert_eq!(format(30, FrameRate::Fps29_97, true), "+00:00:01;00");
    }

    #[test]
    fn test_leap_day_rollover() {
        let mut tc = DateTimecode::new("2020-02-28 23:59:59;29", FrameRate::Fps29_97).unwrap();
        tc.add(1);
        assert_eq!(tc.format(), "2020-02-29 00:00:00;00");
        tc.subtract(1);
        assert_eq!(tc.format(), "2020-02-28 23:59:59;29");
    }
}
