//! Day-aware timecode: a calendar date plus a position within the day.

use crate::codec;
use crate::error::Result;
use crate::rate::FrameRate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Argument seam for operations that accept either a frame count or a
/// timecode string, mirroring both call styles of the library surface.
///
/// Strings resolve through the forgiving codec at the object's frame rate,
/// so a signed timecode like `"-00:00:00;10"` is a valid delta.
pub trait IntoFrames {
    /// Resolve to a signed frame count at the given rate.
    fn into_frames(self, rate: FrameRate) -> i64;
}

impl IntoFrames for i64 {
    fn into_frames(self, _rate: FrameRate) -> i64 {
        self
    }
}

impl IntoFrames for &str {
    fn into_frames(self, rate: FrameRate) -> i64 {
        codec::parse(self, rate)
    }
}

/// A timecode bound to a calendar date.
///
/// Holds a day-precision date and a frame count in
/// `[0, frames_per_day)` for a frame rate fixed at construction. Arithmetic
/// that crosses midnight moves the date by one day and wraps the frame
/// count; a single operation never moves more than one day, so deltas must
/// stay below a full day's frames.
///
/// # Example
/// ```rust
/// use datecode::DateTimecode;
///
/// let mut tc: DateTimecode = "2014-01-01 23:59:59;29".parse().unwrap();
/// tc.add(1);
/// assert_eq!(tc.format(), "2014-01-02 00:00:00;00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimecode {
    date: NaiveDate,
    frames: i64,
    frame_rate: FrameRate,
}

impl DateTimecode {
    /// Create from a `"YYYY-MM-DD HH:MM:SS:FF"` string at an explicit rate.
    ///
    /// The parts split on the first space. A missing timecode part reads as
    /// frame 0 of the day; a malformed date is an error.
    pub fn new(dtc: &str, frame_rate: FrameRate) -> Result<Self> {
        let (date_part, tc_part) = match dtc.split_once(' ') {
            Some((date, tc)) => (date, tc),
            None => (dtc, ""),
        };
        let date = NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d")?;

        let mut dtc = Self {
            date,
            frames: 0,
            frame_rate,
        };
        dtc.set_timecode(tc_part);
        Ok(dtc)
    }

    /// Create from a `"YYYY-MM-DD HH:MM:SS:FF"` string, detecting the rate
    /// from the separator before the frames field: `;` means NTSC (29.97),
    /// anything else PAL (25).
    pub fn detect(dtc: &str) -> Result<Self> {
        let tc_part = dtc.split_once(' ').map_or("", |(_, tc)| tc);
        Self::new(dtc, detect_frame_rate(tc_part))
    }

    /// The calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Position within the day, in frames.
    #[must_use]
    pub fn frames(&self) -> i64 {
        self.frames
    }

    /// The fixed frame rate.
    #[must_use]
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    /// Set the calendar date, keeping the frame position.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the calendar date from a `YYYY-MM-DD` string.
    pub fn set_date_str(&mut self, date: &str) -> Result<()> {
        self.date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
        Ok(())
    }

    /// Set both date and timecode from a `"YYYY-MM-DD HH:MM:SS:FF"` string.
    pub fn set_dtc(&mut self, dtc: &str) -> Result<()> {
        let (date_part, tc_part) = match dtc.split_once(' ') {
            Some((date, tc)) => (date, tc),
            None => (dtc, ""),
        };
        self.set_date_str(date_part)?;
        self.set_timecode(tc_part);
        Ok(())
    }

    /// Set the position within the day from a frame count or timecode
    /// string, rolling the date over if the value falls outside the day.
    pub fn set_timecode(&mut self, timecode: impl IntoFrames) {
        let frames = timecode.into_frames(self.frame_rate);
        self.apply_frames(frames);
    }

    /// Alias for [`set_timecode`](Self::set_timecode).
    pub fn set_frames(&mut self, frames: impl IntoFrames) {
        self.set_timecode(frames);
    }

    /// Add a delta, given as a frame count or a (possibly signed) timecode
    /// string. Crossing midnight adjusts the date by one day.
    ///
    /// Returns `&mut self` so calls chain; the object mutates in place.
    pub fn add(&mut self, delta: impl IntoFrames) -> &mut Self {
        let delta = delta.into_frames(self.frame_rate);
        self.apply_frames(self.frames + delta);
        self
    }

    /// Subtract a delta; negates and delegates to [`add`](Self::add).
    pub fn subtract(&mut self, delta: impl IntoFrames) -> &mut Self {
        let delta = delta.into_frames(self.frame_rate);
        self.add(-delta)
    }

    /// Format the timecode part, no sign.
    #[must_use]
    pub fn format_timecode(&self) -> String {
        codec::format(self.frames, self.frame_rate, false)
    }

    /// Format the date part as `YYYY-MM-DD`.
    #[must_use]
    pub fn format_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Format as `"YYYY-MM-DD HH:MM:SS:FF"`.
    #[must_use]
    pub fn format(&self) -> String {
        format!("{} {}", self.format_date(), self.format_timecode())
    }

    /// Store a raw frame count, rolling the date over once if it falls
    /// outside `[0, frames_per_day)`. Callers keep deltas below one day,
    /// so a single adjustment always suffices.
    fn apply_frames(&mut self, frames: i64) {
        let max = self.frame_rate.frames_per_day();
        let mut frames = frames;

        if frames < 0 {
            self.shift_day(-1);
            frames += max;
        } else if frames >= max {
            self.shift_day(1);
            frames -= max;
        }
        self.frames = frames;
    }

    /// Move the date by one day, saturating at the calendar bounds.
    fn shift_day(&mut self, days: i64) {
        let shifted = if days < 0 {
            self.date.pred_opt()
        } else {
            self.date.succ_opt()
        };
        if let Some(date) = shifted {
            self.date = date;
        }
    }
}

impl FromStr for DateTimecode {
    type Err = crate::error::TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::detect(s)
    }
}

impl fmt::Display for DateTimecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_date(), self.format_timecode())
    }
}

/// Detect the frame rate of a timecode string from the separator before
/// the frames field (byte 8 of `HH:MM:SS<sep>FF`).
fn detect_frame_rate(timecode: &str) -> FrameRate {
    if timecode.as_bytes().get(8) == Some(&b';') {
        FrameRate::Fps29_97
    } else {
        FrameRate::Fps25
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NTSC: FrameRate = FrameRate::Fps29_97;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fixture() -> DateTimecode {
        DateTimecode::new("2014-01-01 00:00:00;00", NTSC).unwrap()
    }

    #[test]
    fn test_constructor() {
        let t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        assert_eq!(t.date(), date("2014-01-01"));
        assert_eq!(t.frames(), 30);
        assert_eq!(t.frame_rate(), NTSC);
    }

    #[test]
    fn test_constructor_bad_date() {
        assert!(DateTimecode::new("not-a-date 00:00:00;00", NTSC).is_err());
    }

    #[test]
    fn test_constructor_missing_timecode() {
        let t = DateTimecode::new("2014-01-01", NTSC).unwrap();
        assert_eq!(t.frames(), 0);
    }

    #[test]
    fn test_detect_pal() {
        let t: DateTimecode = "2014-01-01 00:00:00:00".parse().unwrap();
        assert_eq!(t.frame_rate(), FrameRate::Fps25);
    }

    #[test]
    fn test_detect_ntsc() {
        let t: DateTimecode = "2014-01-01 00:00:00;00".parse().unwrap();
        assert_eq!(t.frame_rate(), NTSC);
    }

    #[test]
    fn test_set_date() {
        let mut t = fixture();
        t.set_date(date("2015-01-01"));
        assert_eq!(t.date(), date("2015-01-01"));

        t.set_date_str("2016-06-15").unwrap();
        assert_eq!(t.date(), date("2016-06-15"));
        assert!(t.set_date_str("junk").is_err());
    }

    #[test]
    fn test_set_timecode() {
        let mut t = fixture();
        t.set_timecode("00:00:01;00");
        assert_eq!(t.frames(), 30);
    }

    #[test]
    fn test_set_frames() {
        let mut t = fixture();
        t.set_frames(10);
        assert_eq!(t.frames(), 10);
    }

    #[test]
    fn test_set_dtc() {
        let mut t = fixture();
        t.set_dtc("2014-01-01 00:00:00;00").unwrap();
        assert_eq!(t.date(), date("2014-01-01"));
        assert_eq!(t.frames(), 0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(fixture().format_date(), "2014-01-01");
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(fixture().format_timecode(), "00:00:00;00");
    }

    #[test]
    fn test_format() {
        assert_eq!(fixture().format(), "2014-01-01 00:00:00;00");
        assert_eq!(fixture().to_string(), "2014-01-01 00:00:00;00");
    }

    #[test]
    fn test_add() {
        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.add(30);
        assert_eq!(t.frames(), 60);

        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.add(-10);
        assert_eq!(t.frames(), 20);

        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.add("00:00:01;00");
        assert_eq!(t.frames(), 60);

        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.add("-00:00:00;10");
        assert_eq!(t.frames(), 20);
    }

    #[test]
    fn test_add_rolls_back_a_day() {
        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.add(-31);
        assert_eq!(t.format(), "2013-12-31 23:59:59;29");
    }

    #[test]
    fn test_add_rolls_forward_a_day() {
        let mut t = DateTimecode::new("2014-01-01 23:59:59;29", NTSC).unwrap();
        t.add("00:00:00:01");
        assert_eq!(t.format(), "2014-01-02 00:00:00;00");
    }

    #[test]
    fn test_add_chains() {
        let mut t = fixture();
        t.add(10).add(20).subtract(5);
        assert_eq!(t.frames(), 25);
    }

    #[test]
    fn test_subtract() {
        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.subtract(30);
        assert_eq!(t.frames(), 0);

        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.subtract(-10);
        assert_eq!(t.frames(), 40);

        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.subtract("00:00:01;00");
        assert_eq!(t.frames(), 0);

        let mut t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        t.subtract("-00:00:00;10");
        assert_eq!(t.frames(), 40);
    }

    #[test]
    fn test_subtract_rolls_back_a_day() {
        let mut t = fixture();
        t.subtract(1);
        assert_eq!(t.format(), "2013-12-31 23:59:59;29");
    }

    #[test]
    fn test_rollover_pal_day() {
        let mut t = DateTimecode::new("2014-01-01 23:59:59:24", FrameRate::Fps25).unwrap();
        assert_eq!(t.frames(), FrameRate::Fps25.frames_per_day() - 1);
        t.add(1);
        assert_eq!(t.format(), "2014-01-02 00:00:00:00");
    }

    #[test]
    fn test_serialization() {
        let t = DateTimecode::new("2014-01-01 00:00:01;00", NTSC).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let decoded: DateTimecode = serde_json::from_str(&json).unwrap();
        assert_eq!(t, decoded);
    }
}
