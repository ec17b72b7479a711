use crate::foundation::error::{CinegridError, CinegridResult};

pub use kurbo::Vec2;

/// Absolute frame number on the output timeline (frame 0 is the first frame).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate, e.g. `30/1` or `30000/1001`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero numerators or denominators.
    pub fn new(num: u32, den: u32) -> CinegridResult<Self> {
        if den == 0 {
            return Err(CinegridError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CinegridError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Seconds covered by `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Largest whole frame count fitting in `secs` (negative inputs clamp to 0).
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }

    /// Nearest whole frame count for `secs` (negative inputs clamp to 0).
    ///
    /// Used when placing scene boundaries so that accumulated float error
    /// never shifts a boundary by a full frame.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

impl Default for Fps {
    /// 30 fps, the delivery rate for short-form marketing output.
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Output canvas orientation. The rendering surface owns pixel dimensions;
/// the timeline only records which orientation was requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// Landscape 16:9.
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// Portrait 9:16.
    #[serde(rename = "9:16")]
    Vertical,
}

impl AspectRatio {
    /// Width over height.
    pub fn ratio(self) -> f64 {
        match self {
            Self::Widescreen => 16.0 / 9.0,
            Self::Vertical => 9.0 / 16.0,
        }
    }

    /// Canonical string form, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Vertical => "9:16",
        }
    }
}
