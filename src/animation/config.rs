use crate::{
    animation::ease::Ease,
    effects::image::ImageEffect,
    effects::text::TextAnimation,
    effects::transition::SceneTransition,
};

/// Length of the text entrance and exit sub-windows, in seconds.
///
/// Text enters over this window starting `text_delay_sec` after scene start
/// and exits over the same length ending at scene end. Typewriter and reveal
/// ignore it; their window is derived from the character count.
pub const TEXT_WINDOW_SECS: f64 = 0.5;

/// Character reveal rate for typewriter and reveal text animations.
pub const TYPEWRITER_CHARS_PER_SEC: f64 = 15.0;

/// Two framings for a Ken Burns move, interpolated over the scene.
///
/// Offsets are canvas fractions relative to the centered framing, so `0.1`
/// means a tenth of the canvas width (or height) away from center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KenBurnsConfig {
    /// Scale at scene start.
    pub start_scale: f64,
    /// Scale at scene end.
    pub end_scale: f64,
    /// Horizontal offset at scene start.
    pub start_x: f64,
    /// Vertical offset at scene start.
    pub start_y: f64,
    /// Horizontal offset at scene end.
    pub end_x: f64,
    /// Vertical offset at scene end.
    pub end_y: f64,
}

impl Default for KenBurnsConfig {
    /// A gentle push-in from the centered framing.
    fn default() -> Self {
        Self {
            start_scale: 1.0,
            end_scale: 1.15,
            start_x: 0.0,
            start_y: 0.0,
            end_x: 0.0,
            end_y: 0.0,
        }
    }
}

/// Global strength knob scaling every amplitude the evaluator produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    /// Half-strength motion for understated footage.
    Subtle,
    /// Reference strength.
    #[default]
    Normal,
    /// Amplified motion for energetic footage.
    Strong,
}

impl Intensity {
    /// Amplitude multiplier applied to zoom amounts, drift distances and
    /// jitter magnitudes.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Subtle => 0.5,
            Self::Normal => 1.0,
            Self::Strong => 1.6,
        }
    }
}

/// Fully resolved animation intent for one scene.
///
/// Every field is concrete: after [`resolve_animation`] merges the tiers
/// there is nothing left for the evaluator or the rendering surface to
/// default. Declarative only; evaluation happens in [`crate::eval_image_effect`]
/// and friends.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneAnimationConfig {
    /// Motion applied to the scene image for its whole duration.
    pub image_effect: ImageEffect,
    /// Framing pair for [`ImageEffect::KenBurns`]. `None` uses
    /// [`KenBurnsConfig::default`] when the effect is Ken Burns.
    pub ken_burns: Option<KenBurnsConfig>,
    /// How caption text enters.
    pub text_entrance: TextAnimation,
    /// How caption text exits. [`TextAnimation::None`] keeps it on screen.
    pub text_exit: TextAnimation,
    /// Seconds after scene start before the text entrance begins.
    pub text_delay_sec: f64,
    /// Boundary treatment when the scene appears.
    pub scene_entrance: SceneTransition,
    /// Boundary treatment when the scene leaves.
    pub scene_exit: SceneTransition,
    /// Length of the entrance and exit windows, in seconds.
    pub transition_duration_sec: f64,
    /// Global amplitude knob.
    pub intensity: Intensity,
    /// Easing applied to progress-driven interpolation.
    pub easing: Ease,
}

impl Default for SceneAnimationConfig {
    /// The hard defaults under every override tier.
    fn default() -> Self {
        Self {
            image_effect: ImageEffect::ZoomIn,
            ken_burns: None,
            text_entrance: TextAnimation::FadeIn,
            text_exit: TextAnimation::None,
            text_delay_sec: 0.5,
            scene_entrance: SceneTransition::Fade,
            scene_exit: SceneTransition::Fade,
            transition_duration_sec: 0.5,
            intensity: Intensity::Normal,
            easing: Ease::EaseInOut,
        }
    }
}

/// Partial animation intent: one override tier.
///
/// Unset fields defer to the tier below. Callers hand these to
/// [`resolve_animation`]; nothing else in the crate reads an override
/// directly.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneAnimationOverrides {
    /// Overrides [`SceneAnimationConfig::image_effect`].
    pub image_effect: Option<ImageEffect>,
    /// Overrides [`SceneAnimationConfig::ken_burns`].
    pub ken_burns: Option<KenBurnsConfig>,
    /// Overrides [`SceneAnimationConfig::text_entrance`].
    pub text_entrance: Option<TextAnimation>,
    /// Overrides [`SceneAnimationConfig::text_exit`].
    pub text_exit: Option<TextAnimation>,
    /// Overrides [`SceneAnimationConfig::text_delay_sec`].
    pub text_delay_sec: Option<f64>,
    /// Overrides [`SceneAnimationConfig::scene_entrance`].
    pub scene_entrance: Option<SceneTransition>,
    /// Overrides [`SceneAnimationConfig::scene_exit`].
    pub scene_exit: Option<SceneTransition>,
    /// Overrides [`SceneAnimationConfig::transition_duration_sec`].
    pub transition_duration_sec: Option<f64>,
    /// Overrides [`SceneAnimationConfig::intensity`].
    pub intensity: Option<Intensity>,
    /// Overrides [`SceneAnimationConfig::easing`].
    pub easing: Option<Ease>,
}

impl SceneAnimationOverrides {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to(&self, cfg: &mut SceneAnimationConfig) {
        if let Some(v) = self.image_effect {
            cfg.image_effect = v;
        }
        if let Some(v) = self.ken_burns {
            cfg.ken_burns = Some(v);
        }
        if let Some(v) = self.text_entrance {
            cfg.text_entrance = v;
        }
        if let Some(v) = self.text_exit {
            cfg.text_exit = v;
        }
        if let Some(v) = self.text_delay_sec {
            cfg.text_delay_sec = v;
        }
        if let Some(v) = self.scene_entrance {
            cfg.scene_entrance = v;
        }
        if let Some(v) = self.scene_exit {
            cfg.scene_exit = v;
        }
        if let Some(v) = self.transition_duration_sec {
            cfg.transition_duration_sec = v;
        }
        if let Some(v) = self.intensity {
            cfg.intensity = v;
        }
        if let Some(v) = self.easing {
            cfg.easing = v;
        }
    }
}

/// Merge the three config tiers into a concrete per-scene config.
///
/// Precedence, lowest to highest: hard defaults, then `global`, then
/// `scene`. The merge is field-by-field, so a scene that only overrides the
/// text entrance still inherits the global image effect.
pub fn resolve_animation(
    scene: Option<&SceneAnimationOverrides>,
    global: Option<&SceneAnimationOverrides>,
) -> SceneAnimationConfig {
    let mut cfg = SceneAnimationConfig::default();
    if let Some(overrides) = global {
        overrides.apply_to(&mut cfg);
    }
    if let Some(overrides) = scene {
        overrides.apply_to(&mut cfg);
    }
    cfg
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
