//! The forgiving timecode codec: string to frame count and back.
//!
//! Both directions always produce an answer. Timecode strings frequently
//! arrive operator-typed or truncated, so [`parse`] clamps out-of-range
//! components to their field maximum, zero-fills anything unreadable, and
//! maps absent input to 0. [`format`] maps absent input to an empty string.
//! Neither function has an error path.

use crate::dropframe;
use crate::rate::FrameRate;

/// Highest legal hours component.
pub const MAX_HOURS: i64 = 23;

/// Highest legal minutes component.
pub const MAX_MINUTES: i64 = 59;

/// Highest legal seconds component.
pub const MAX_SECONDS: i64 = 59;

/// Split a timecode string into four components, most significant first.
///
/// Accepts `HH:MM:SS:FF` with `:` or `;` separators in any position, or the
/// 8-digit unseparated form `HHMMSSFF`. Missing leading components are
/// zero-filled, as is any component that fails to read as an integer.
fn split_components(timecode: &str) -> [i64; 4] {
    let unsigned = timecode
        .strip_prefix(['-', '+'])
        .unwrap_or(timecode);

    let tokens: Vec<&str> = unsigned.split([':', ';']).collect();

    let mut parts = [0i64; 4];
    if tokens.len() == 1 && tokens[0].len() == 8 {
        // Unseparated HHMMSSFF
        for (i, chunk) in tokens[0].as_bytes().chunks(2).enumerate().take(4) {
            parts[i] = std::str::from_utf8(chunk)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
        }
    } else {
        // Right-align: a short input like "00:05" reads as seconds:frames
        let offset = 4usize.saturating_sub(tokens.len());
        for (i, token) in tokens.iter().enumerate().take(4 - offset) {
            parts[offset + i] = token.trim().parse().unwrap_or(0);
        }
    }
    parts
}

/// Ceiling-clamp components to their field maxima, then bump any label that
/// drop-frame encoding skips up to the first valid label of its minute.
fn clamp_components(parts: [i64; 4], rate: FrameRate) -> [i64; 4] {
    let [h, m, s, f] = parts;
    let h = h.min(MAX_HOURS);
    let m = m.min(MAX_MINUTES);
    let s = s.min(MAX_SECONDS);
    let mut f = f.min(rate.nominal_fps() - 1);

    if rate.is_drop_frame() && dropframe::is_dropped_label(m, s, f, rate) {
        f = rate.dropped_per_minute();
    }
    [h, m, s, f]
}

/// Parse a timecode string into a signed linear frame count.
///
/// Accepts `[sign]HH:MM:SS:FF` (either separator, regardless of rate) or
/// the 8-digit `HHMMSSFF` form. Inputs with fewer than four components are
/// zero-filled on the left; `None` and the empty string parse to 0. Values
/// beyond a field's maximum are pinned to that maximum, never wrapped or
/// rejected.
///
/// For drop-frame rates, labels that the encoding skips collapse to the
/// first valid label of their minute, so every parseable string round-trips
/// through [`format`].
///
/// # Example
/// ```rust
/// use datecode::{parse, FrameRate};
///
/// assert_eq!(parse("00:00:01:00", FrameRate::Fps25), 25);
/// assert_eq!(parse("-00:00:01:00", FrameRate::Fps25), -25);
/// assert_eq!(parse("00:01:00;00", FrameRate::Fps29_97), 1800);
/// assert_eq!(parse(None, FrameRate::Fps25), 0);
/// ```
pub fn parse<'a>(timecode: impl Into<Option<&'a str>>, rate: FrameRate) -> i64 {
    let timecode = match timecode.into() {
        Some(s) if !s.is_empty() => s,
        _ => return 0,
    };

    let negative = timecode.starts_with('-');
    let [h, m, s, f] = clamp_components(split_components(timecode), rate);

    let fps = rate.nominal_fps();
    let mut frames = f + s * fps + m * 60 * fps + h * 3600 * fps;
    frames -= dropframe::dropped_frames(frames, rate);

    if negative {
        -frames
    } else {
        frames
    }
}

/// Format a signed linear frame count as a timecode string.
///
/// `None` yields an empty string, the sentinel for "no value". A negative
/// count formats with a leading `-`; `show_sign` adds a leading `+` to
/// non-negative results. Drop-frame rates join seconds and frames with `;`
/// instead of `:`.
///
/// Counts whose magnitude reaches 24 hours wrap the hours field to 0
/// rather than producing an hour label of 24 or more.
///
/// # Example
/// ```rust
/// use datecode::{format, FrameRate};
///
/// assert_eq!(format(25, FrameRate::Fps25, false), "00:00:01:00");
/// assert_eq!(format(1800, FrameRate::Fps29_97, false), "00:01:00;02");
/// assert_eq!(format(30, FrameRate::Fps29_97, true), "+00:00:01;00");
/// assert_eq!(format(None, FrameRate::Fps25, false), "");
/// ```
pub fn format(frames: impl Into<Option<i64>>, rate: FrameRate, show_sign: bool) -> String {
    let frames = match frames.into() {
        Some(f) => f,
        None => return String::new(),
    };

    let negative = frames < 0;
    let mut f = frames.saturating_abs();

    f = f.saturating_add(dropframe::reinserted_frames(f, rate));

    let fps = rate.nominal_fps();
    let total_seconds = f / fps;
    let total_minutes = total_seconds / 60;
    let h = total_minutes / 60;

    let mut f = f - total_seconds * fps;
    let s = total_seconds - total_minutes * 60;
    let m = total_minutes - h * 60;

    // Re-inserted positions land on skipped labels at minute starts; lift
    // them to the labels that actually exist there.
    if rate.is_drop_frame() && dropframe::is_dropped_label(m, s, f, rate) {
        f += rate.dropped_per_minute();
    }

    // Day-overflowed magnitudes wrap the hour field instead of showing 24+
    let h = if h > MAX_HOURS { 0 } else { h };

    let sign = if negative {
        "-"
    } else if show_sign {
        "+"
    } else {
        ""
    };
    let sep = if rate.is_drop_frame() { ';' } else { ':' };

    format!("{sign}{h:02}:{m:02}:{s:02}{sep}{f:02}")
}
