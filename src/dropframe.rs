//! Drop-frame label arithmetic for 29.97 and 59.94 fps.
//!
//! Drop-frame timecode compensates for the difference between the nominal
//! rate (30 or 60 fps) and the actual NTSC rate (30000/1001 or 60000/1001)
//! by skipping frame labels at specific points:
//!
//! - Labels 0..N (2 for 29.97, 4 for 59.94) are skipped at the start of
//!   each minute
//! - Except for minutes 0, 10, 20, 30, 40, 50
//!
//! This keeps timecode labels aligned with wall-clock time. The functions
//! here convert between raw label positions and linear frame counts; the
//! codec in [`crate::codec`] applies them in each direction.

use crate::rate::FrameRate;

/// Number of skipped labels that precede a raw linear position.
///
/// `raw_frames` is the label position reduced as if no labels were skipped
/// (the direct HH/MM/SS/FF weighting). Subtracting the result yields the
/// true linear frame count.
#[must_use]
pub fn dropped_frames(raw_frames: i64, rate: FrameRate) -> i64 {
    let drop = rate.dropped_per_minute();
    if drop == 0 {
        return 0;
    }
    let minutes = raw_frames / rate.nominal_fps() / 60;
    drop * (minutes - minutes / 10)
}

/// Number of skipped labels to re-insert when formatting a linear frame
/// count.
///
/// Inverse of [`dropped_frames`]: given a true linear count, returns how
/// many skipped labels lie before it so the count can be lifted back to a
/// raw label position. Computed as a fixed point bounded at exactly two
/// passes; the first pass can land the adjusted position in a later minute,
/// the second always settles it.
#[must_use]
pub fn reinserted_frames(frames: i64, rate: FrameRate) -> i64 {
    let drop = rate.dropped_per_minute();
    if drop == 0 {
        return 0;
    }
    let fps = rate.nominal_fps();

    let mut extra = 0;
    for _ in 0..2 {
        let minutes = frames.saturating_add(extra) / fps / 60;
        extra = if minutes > 0 {
            drop * (minutes - minutes / 10)
        } else {
            0
        };
    }
    extra
}

/// Whether an (M, S, F) label is skipped under drop-frame encoding.
///
/// Skipped labels never occur in formatted output; parse collapses them to
/// the first valid label of the minute.
#[must_use]
pub fn is_dropped_label(minutes: i64, seconds: i64, frames: i64, rate: FrameRate) -> bool {
    seconds == 0 && minutes % 10 != 0 && frames < rate.dropped_per_minute()
}
