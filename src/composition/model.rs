use crate::{
    animation::config::SceneAnimationConfig,
    eval::frame::SceneCtx,
    foundation::core::{AspectRatio, Fps, FrameIndex},
    foundation::error::{CinegridError, CinegridResult},
    foundation::math::stable_hash64,
    timeline::cuts::Cut,
    timeline::timesheet::TimesheetEntry,
};

/// Opening or ending segment rendered around the scene grid (logo card,
/// call-to-action card). The timeline only tracks its duration; the
/// rendering surface owns its content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bumper {
    /// Seconds the segment occupies on the output timeline.
    pub duration_secs: f64,
}

impl Bumper {
    /// Bumper of the given length.
    pub fn new(duration_secs: f64) -> Self {
        Self { duration_secs }
    }
}

impl Default for Bumper {
    /// Two seconds, enough for a logo sting.
    fn default() -> Self {
        Self { duration_secs: 2.0 }
    }
}

/// One scene, fully planned: its cut window, its resolved animation and the
/// narration clip attached to it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRenderConfig {
    /// Timed window, visual style and images for this scene.
    pub cut: Cut,
    /// Concrete animation config after all override tiers merged.
    pub animation: SceneAnimationConfig,
    /// Narration clip for this scene, if a line carried its id.
    #[serde(default)]
    pub narration: Option<TimesheetEntry>,
}

impl SceneRenderConfig {
    /// Caption length in characters, which paces character-driven text
    /// animations. Zero when the scene has no narration.
    pub fn caption_chars(&self) -> usize {
        self.narration
            .as_ref()
            .map_or(0, |entry| entry.text.chars().count())
    }
}

/// The fully assembled plan for one video: every scene timed, styled and
/// narrated, plus the global framing parameters a rendering surface needs.
///
/// Scene cut windows tile `[0, total)` without the bumpers and overlaps; on
/// the output timeline each scene after the first starts
/// `transition_overlap_sec` early so its entrance window plays on top of the
/// previous scene's exit window. [`Self::scene_start_secs`] and
/// [`Self::total_duration_secs`] do that placement math.
///
/// Serializes to the JSON contract consumed by rendering surfaces; field
/// names are stable.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCompositionTimeline {
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas orientation.
    pub aspect_ratio: AspectRatio,
    /// Scenes in playback order.
    pub scenes: Vec<SceneRenderConfig>,
    /// Opening segment before the first scene.
    #[serde(default)]
    pub opening: Option<Bumper>,
    /// Ending segment after the last scene.
    #[serde(default)]
    pub ending: Option<Bumper>,
    /// Seconds adjacent scenes overlap while their boundary transitions play.
    pub transition_overlap_sec: f64,
    /// Seed all per-scene noise derives from.
    #[serde(default)]
    pub seed: u64,
}

impl VideoCompositionTimeline {
    fn opening_secs(&self) -> f64 {
        self.opening.map_or(0.0, |b| b.duration_secs)
    }

    fn ending_secs(&self) -> f64 {
        self.ending.map_or(0.0, |b| b.duration_secs)
    }

    /// Total output length in seconds: bumpers plus scene durations, minus
    /// one overlap per interior boundary.
    pub fn total_duration_secs(&self) -> f64 {
        let scene_secs: f64 = self.scenes.iter().map(|s| s.cut.duration_secs()).sum();
        let overlaps = self.scenes.len().saturating_sub(1) as f64 * self.transition_overlap_sec;
        self.opening_secs() + scene_secs - overlaps + self.ending_secs()
    }

    /// Total output length in frames.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_round(self.total_duration_secs())
    }

    /// Start of scene `index` on the output timeline, in seconds.
    ///
    /// Scenes keep their full cut duration; each scene after the first is
    /// pulled back by one overlap per boundary crossed, so adjacent exit and
    /// entrance windows play simultaneously.
    pub fn scene_start_secs(&self, index: usize) -> f64 {
        let prior: f64 = self.scenes[..index.min(self.scenes.len())]
            .iter()
            .map(|s| s.cut.duration_secs())
            .sum();
        self.opening_secs() + prior - index as f64 * self.transition_overlap_sec
    }

    /// Evaluation context for `scenes[index]` at an absolute output frame.
    ///
    /// `None` when the index is out of range. The frame may lie outside the
    /// scene's window; the evaluators clamp, so callers can probe any frame.
    pub fn scene_ctx(&self, index: usize, frame: FrameIndex) -> Option<SceneCtx> {
        let scene = self.scenes.get(index)?;
        let start = self.fps.secs_to_frames_round(self.scene_start_secs(index));
        Some(SceneCtx {
            frame,
            fps: self.fps,
            scene_start: FrameIndex(start),
            scene_frames: self.fps.secs_to_frames_round(scene.cut.duration_secs()),
            seed: stable_hash64(self.seed, &scene.cut.id.to_string()),
        })
    }

    /// Indexes of every scene whose window contains `frame`, in playback
    /// order. During an overlap two scenes report; otherwise at most one.
    pub fn scenes_at(&self, frame: FrameIndex) -> Vec<usize> {
        (0..self.scenes.len())
            .filter(|&i| {
                let Some(ctx) = self.scene_ctx(i, frame) else {
                    return false;
                };
                frame.0 >= ctx.scene_start.0 && frame.0 < ctx.scene_start.0 + ctx.scene_frames
            })
            .collect()
    }

    /// Check the structural invariants on a timeline that did not come from
    /// [`crate::assemble`] (hand-written or deserialized data).
    ///
    /// Verifies the cut grid tiles `[0, total)` contiguously with 1-based
    /// ids, and that the overlap fits inside every scene.
    pub fn validate(&self) -> CinegridResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.scenes.is_empty() {
            return Err(CinegridError::validation("timeline has no scenes"));
        }
        if !self.transition_overlap_sec.is_finite() || self.transition_overlap_sec < 0.0 {
            return Err(CinegridError::validation(format!(
                "transition overlap must be finite and >= 0, got {}",
                self.transition_overlap_sec
            )));
        }
        for bumper in [self.opening, self.ending].into_iter().flatten() {
            if !bumper.duration_secs.is_finite() || bumper.duration_secs <= 0.0 {
                return Err(CinegridError::validation(format!(
                    "bumper duration must be positive and finite, got {}",
                    bumper.duration_secs
                )));
            }
        }

        for (i, scene) in self.scenes.iter().enumerate() {
            let cut = &scene.cut;
            if cut.id as usize != i + 1 {
                return Err(CinegridError::validation(format!(
                    "cut ids must be contiguous from 1, found {} at position {i}",
                    cut.id
                )));
            }
            if !cut.start_sec.is_finite() || !cut.end_sec.is_finite() {
                return Err(CinegridError::validation(format!(
                    "cut {} has a non-finite boundary",
                    cut.id
                )));
            }
            if cut.duration_secs() <= 0.0 {
                return Err(CinegridError::validation(format!(
                    "cut {} has non-positive duration",
                    cut.id
                )));
            }
            if i == 0 {
                if cut.start_sec != 0.0 {
                    return Err(CinegridError::validation(
                        "cut grid must start at second zero",
                    ));
                }
            } else if (cut.start_sec - self.scenes[i - 1].cut.end_sec).abs() > 1e-9 {
                return Err(CinegridError::validation(format!(
                    "cut grid has a gap before cut {}",
                    cut.id
                )));
            }
            if self.transition_overlap_sec > cut.duration_secs() + 1e-9 {
                return Err(CinegridError::validation(format!(
                    "transition overlap {} exceeds cut {} duration {}",
                    self.transition_overlap_sec,
                    cut.id,
                    cut.duration_secs()
                )));
            }
            let anim = &scene.animation;
            if !anim.transition_duration_sec.is_finite() || anim.transition_duration_sec < 0.0 {
                return Err(CinegridError::validation(format!(
                    "cut {} has invalid transition duration {}",
                    cut.id, anim.transition_duration_sec
                )));
            }
            if !anim.text_delay_sec.is_finite() || anim.text_delay_sec < 0.0 {
                return Err(CinegridError::validation(format!(
                    "cut {} has invalid text delay {}",
                    cut.id, anim.text_delay_sec
                )));
            }
            if let Some(entry) = &scene.narration {
                if !entry.duration_sec.is_finite() || entry.duration_sec < 0.0 {
                    return Err(CinegridError::validation(format!(
                        "cut {} narration has invalid duration {}",
                        cut.id, entry.duration_sec
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
