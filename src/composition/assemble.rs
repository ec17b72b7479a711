use crate::{
    animation::config::{SceneAnimationOverrides, resolve_animation},
    composition::model::{Bumper, SceneRenderConfig, VideoCompositionTimeline},
    foundation::core::{AspectRatio, Fps},
    foundation::error::{CinegridError, CinegridResult},
    style::assign::{apply_styles, assign_styles},
    style::intent::StyleIntent,
    timeline::cuts::{calculate_cut_count, generate_cut_windows},
    timeline::timesheet::{NarrationLine, Timesheet, TimesheetConfig},
};

/// Default seconds adjacent scenes overlap while boundary transitions play.
pub const TRANSITION_OVERLAP_SECS: f64 = 0.5;

/// Everything a caller specifies to plan one video.
///
/// Deserializes from the generation request JSON; unset fields take the
/// defaults below. Fields are public, so one-off adjustments read naturally
/// with struct update syntax:
///
/// ```
/// use cinegrid::{AspectRatio, VideoBrief};
///
/// let brief = VideoBrief {
///     aspect_ratio: AspectRatio::Vertical,
///     ..VideoBrief::new(30.0, 5.0)
/// };
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoBrief {
    /// Requested video length in seconds, bumpers excluded.
    pub total_duration_secs: f64,
    /// Requested length of each scene in seconds.
    pub scene_duration_secs: f64,
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas orientation.
    pub aspect_ratio: AspectRatio,
    /// Where per-cut styles come from.
    pub style: StyleIntent,
    /// Script lines, one per scene id.
    pub narration: Vec<NarrationLine>,
    /// Opening segment before the first scene.
    pub opening: Option<Bumper>,
    /// Ending segment after the last scene.
    pub ending: Option<Bumper>,
    /// Seconds adjacent scenes overlap while boundary transitions play.
    pub transition_overlap_sec: f64,
    /// Caller-level animation overrides, applied under per-scene styles.
    pub animation: Option<SceneAnimationOverrides>,
    /// Fallback timing for narration estimates.
    pub timesheet: TimesheetConfig,
    /// Seed all per-scene noise derives from.
    pub seed: u64,
}

impl Default for VideoBrief {
    /// A thirty-second video of five-second scenes at the default rate.
    fn default() -> Self {
        Self {
            total_duration_secs: 30.0,
            scene_duration_secs: 5.0,
            fps: Fps::default(),
            aspect_ratio: AspectRatio::default(),
            style: StyleIntent::default(),
            narration: Vec::new(),
            opening: None,
            ending: None,
            transition_overlap_sec: TRANSITION_OVERLAP_SECS,
            animation: None,
            timesheet: TimesheetConfig::default(),
            seed: 0,
        }
    }
}

impl VideoBrief {
    /// Brief for a video of `total_duration_secs` cut into scenes of
    /// `scene_duration_secs`, with defaults everywhere else.
    pub fn new(total_duration_secs: f64, scene_duration_secs: f64) -> Self {
        Self {
            total_duration_secs,
            scene_duration_secs,
            ..Self::default()
        }
    }

    /// Same brief with this style intent.
    pub fn with_style(mut self, style: StyleIntent) -> Self {
        self.style = style;
        self
    }

    /// Same brief with these narration lines.
    pub fn with_narration(mut self, narration: Vec<NarrationLine>) -> Self {
        self.narration = narration;
        self
    }

    /// Same brief with this seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check this brief before planning. [`assemble`] calls it first;
    /// orchestrators call it directly to reject a request before spending
    /// synthesis quota on its narration.
    pub fn validate(&self) -> CinegridResult<()> {
        calculate_cut_count(self.total_duration_secs, self.scene_duration_secs)?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.transition_overlap_sec.is_finite() || self.transition_overlap_sec < 0.0 {
            return Err(CinegridError::validation(format!(
                "transition overlap must be finite and >= 0, got {}",
                self.transition_overlap_sec
            )));
        }
        if self.transition_overlap_sec > self.scene_duration_secs {
            return Err(CinegridError::validation(format!(
                "transition overlap {} exceeds scene duration {}",
                self.transition_overlap_sec, self.scene_duration_secs
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
        if !self.timesheet.fallback_chars_per_sec.is_finite()
            || self.timesheet.fallback_chars_per_sec <= 0.0
        {
            return Err(CinegridError::validation(format!(
                "fallback chars per second must be positive, got {}",
                self.timesheet.fallback_chars_per_sec
            )));
        }
        Ok(())
    }
}

/// Plan the full composition timeline for a brief.
///
/// Runs the pipeline stages in order: tile the cut grid, assign a style per
/// cut, resolve each scene's animation config, then attach narration entries
/// to their scenes by id. The `timesheet` usually comes from
/// [`crate::build_timesheet`]; pass [`Timesheet::estimate`] output to plan
/// offline before any audio exists.
///
/// Pure apart from logging. Only broken briefs fail; everything downstream
/// of validation degrades per stage instead of erroring.
#[tracing::instrument(skip_all, fields(
    total_secs = brief.total_duration_secs,
    scene_secs = brief.scene_duration_secs,
))]
pub fn assemble(
    brief: &VideoBrief,
    timesheet: &Timesheet,
) -> CinegridResult<VideoCompositionTimeline> {
    brief.validate()?;

    let mut cuts = generate_cut_windows(brief.total_duration_secs, brief.scene_duration_secs)?;
    let styles = assign_styles(cuts.len(), &brief.style);
    apply_styles(&mut cuts, &styles);
    tracing::info!(cuts = cuts.len(), "planned cut grid");

    let mut global = brief.animation.clone().unwrap_or_default();
    if global.transition_duration_sec.is_none() {
        // Boundary windows track the overlap unless the caller pins them.
        global.transition_duration_sec = Some(brief.transition_overlap_sec);
    }

    // Narration normally attaches by scene id. When no id matches at all the
    // script was numbered independently of the grid, so fall back to input
    // order rather than dropping every line.
    let positional = !timesheet.entries.is_empty()
        && cuts.iter().all(|cut| timesheet.entry_for(cut.id).is_none());
    if positional {
        tracing::warn!("no narration entry matches a cut id, attaching by position");
    }

    let mut scenes = Vec::with_capacity(cuts.len());
    for (i, cut) in cuts.into_iter().enumerate() {
        let style = styles[i];
        let scene_tier = SceneAnimationOverrides {
            image_effect: Some(style.image_effect),
            text_entrance: Some(style.text_animation),
            scene_entrance: Some(style.transition),
            // The exit pairs with the next scene's entrance so both halves
            // of the overlapped boundary play the same transition kind.
            scene_exit: styles.get(i + 1).map(|s| s.transition),
            ..SceneAnimationOverrides::default()
        };
        let animation = resolve_animation(Some(&scene_tier), Some(&global));
        let narration = if positional {
            timesheet.entries.get(i).cloned()
        } else {
            timesheet.entry_for(cut.id).cloned()
        };
        scenes.push(SceneRenderConfig {
            cut,
            animation,
            narration,
        });
    }

    let attached = scenes.iter().filter(|s| s.narration.is_some()).count();
    if attached < timesheet.entries.len() {
        tracing::warn!(
            unattached = timesheet.entries.len() - attached,
            "narration entries without a matching cut"
        );
    }

    let timeline = VideoCompositionTimeline {
        fps: brief.fps,
        aspect_ratio: brief.aspect_ratio,
        scenes,
        opening: brief.opening,
        ending: brief.ending,
        transition_overlap_sec: brief.transition_overlap_sec,
        seed: brief.seed,
    };
    timeline.validate()?;
    tracing::info!(
        scenes = timeline.scenes.len(),
        total_secs = timeline.total_duration_secs(),
        frames = timeline.frame_count(),
        "assembled composition timeline"
    );
    Ok(timeline)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/assemble.rs"]
mod tests;
