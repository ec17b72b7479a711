use crate::{
    effects::image::ImageEffect,
    effects::text::TextAnimation,
    effects::transition::SceneTransition,
    foundation::error::{CinegridError, CinegridResult},
};

/// Lower bound on the cut count. A valid brief always yields at least one cut.
pub const MIN_CUT_COUNT: usize = 1;

/// Upper bound on the cut count, so an absurd brief (an hour of footage at
/// one-second scenes) cannot explode downstream stages.
pub const MAX_CUT_COUNT: usize = 60;

/// One visual segment of the output video.
///
/// Created by [`generate_cut_windows`] with default styles; style fields are
/// written once by [`crate::apply_styles`] and `images` is filled by the
/// external image collaborator. Nothing else mutates a cut.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cut {
    /// 1-based position in the grid.
    pub id: u32,
    /// Start offset in seconds, inclusive.
    pub start_sec: f64,
    /// End offset in seconds, exclusive.
    pub end_sec: f64,
    /// Motion applied to the cut's image.
    pub image_effect: ImageEffect,
    /// Boundary treatment into this cut.
    pub transition: SceneTransition,
    /// Caption entrance for this cut.
    pub text_animation: TextAnimation,
    /// Image URLs for this cut, populated by the image collaborator.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Cut {
    /// Seconds this cut spans.
    pub fn duration_secs(&self) -> f64 {
        self.end_sec - self.start_sec
    }
}

fn validate_durations(total_secs: f64, scene_secs: f64) -> CinegridResult<()> {
    if !total_secs.is_finite() || total_secs <= 0.0 {
        return Err(CinegridError::invalid_duration(format!(
            "total duration must be positive and finite, got {total_secs}"
        )));
    }
    if !scene_secs.is_finite() || scene_secs <= 0.0 {
        return Err(CinegridError::invalid_duration(format!(
            "scene duration must be positive and finite, got {scene_secs}"
        )));
    }
    Ok(())
}

/// Number of cuts needed to tile `total_secs` at `scene_secs` per cut:
/// `ceil(total / scene)` clamped to `[MIN_CUT_COUNT, MAX_CUT_COUNT]`.
///
/// Fails fast on non-positive or non-finite durations. Bad input here means
/// the brief upstream is broken, and clamping it to something plausible
/// would hide that from the caller.
pub fn calculate_cut_count(total_secs: f64, scene_secs: f64) -> CinegridResult<usize> {
    validate_durations(total_secs, scene_secs)?;
    let raw = (total_secs / scene_secs).ceil() as usize;
    Ok(raw.clamp(MIN_CUT_COUNT, MAX_CUT_COUNT))
}

/// Tile `[0, total_secs)` into cut windows of `scene_secs` each.
///
/// Window `i` spans `[i * scene, min((i + 1) * scene, total))`; the last
/// window absorbs the remainder and ends at exactly `total_secs`. When
/// [`MAX_CUT_COUNT`] clamps the count, the effective scene length stretches
/// to `total / count` so the tiling stays exact. Adjacent windows share the
/// same float boundary expression, so `cuts[i + 1].start_sec` equals
/// `cuts[i].end_sec` bit for bit.
pub fn generate_cut_windows(total_secs: f64, scene_secs: f64) -> CinegridResult<Vec<Cut>> {
    let count = calculate_cut_count(total_secs, scene_secs)?;

    let requested = (total_secs / scene_secs).ceil();
    let effective_scene = if requested > count as f64 {
        tracing::debug!(
            requested,
            clamped = count,
            "cut count clamped, stretching scene length"
        );
        total_secs / count as f64
    } else {
        scene_secs
    };

    let mut cuts = Vec::with_capacity(count);
    for i in 0..count {
        let start_sec = i as f64 * effective_scene;
        let end_sec = if i + 1 == count {
            total_secs
        } else {
            ((i + 1) as f64 * effective_scene).min(total_secs)
        };
        cuts.push(Cut {
            id: (i + 1) as u32,
            start_sec,
            end_sec,
            image_effect: ImageEffect::default(),
            transition: SceneTransition::default(),
            text_animation: TextAnimation::default(),
            images: Vec::new(),
        });
    }
    Ok(cuts)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/cuts.rs"]
mod tests;
