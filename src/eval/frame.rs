use kurbo::Vec2;

use crate::{
    animation::config::{
        KenBurnsConfig, SceneAnimationConfig, TEXT_WINDOW_SECS, TYPEWRITER_CHARS_PER_SEC,
    },
    animation::ease::Ease,
    effects::image::ImageEffect,
    effects::text::TextAnimation,
    effects::transition::SceneTransition,
    foundation::core::{Fps, FrameIndex},
    foundation::math::{clamp01, lerp, noise01},
};

// Amplitudes at Intensity::Normal, in canvas fractions unless noted.
const ZOOM_AMOUNT: f64 = 0.15;
const PAN_DISTANCE: f64 = 0.04;
const PAN_OVERSCAN: f64 = 0.08;
const PARALLAX_DRIFT: f64 = 0.03;
const PARALLAX_OVERSCAN: f64 = 0.1;
const PULSE_AMPLITUDE: f64 = 0.03;
const PULSE_HZ: f64 = 1.2;
const FLOAT_AMPLITUDE: f64 = 0.012;
const FLOAT_HZ: f64 = 0.25;
const SHAKE_AMPLITUDE: f64 = 0.008;
const SHAKE_MAX_ROT_DEG: f64 = 0.8;

const ZOOM_TRANSITION_FROM: f64 = 0.85;
const BLUR_MAX_PX: f64 = 12.0;
const GLITCH_AMPLITUDE: f64 = 0.05;
const GLITCH_FLICKER: f64 = 0.6;

const TEXT_SLIDE_DISTANCE: f64 = 0.04;
const TEXT_SCALE_FROM: f64 = 0.6;
const TEXT_BOUNCE_FROM: f64 = 0.3;

// Salts giving shake and glitch independent noise streams off one seed.
const SALT_SHAKE_Y: u64 = 0x9E1C_59A3_7B61_D245;
const SALT_SHAKE_ROT: u64 = 0x517C_C1B7_2722_0A95;
const SALT_GLITCH_Y: u64 = 0x2545_F491_4F6C_DD1D;
const SALT_GLITCH_FLICKER: u64 = 0x6C62_272E_07BB_0142;

/// Everything the evaluator needs to place one frame inside one scene.
///
/// Pure data; building one performs no work. [`crate::VideoCompositionTimeline::scene_ctx`]
/// derives these from an assembled timeline, but a rendering surface may
/// construct them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneCtx {
    /// Absolute frame on the output timeline.
    pub frame: FrameIndex,
    /// Output frame rate.
    pub fps: Fps,
    /// Absolute frame at which the scene starts.
    pub scene_start: FrameIndex,
    /// Scene length in frames.
    pub scene_frames: u64,
    /// Per-scene seed for noise-driven effects.
    pub seed: u64,
}

impl SceneCtx {
    /// Frames elapsed since scene start (0 before the scene begins).
    pub fn local_frame(self) -> u64 {
        self.frame.0.saturating_sub(self.scene_start.0)
    }

    /// Seconds elapsed since scene start.
    pub fn local_secs(self) -> f64 {
        self.fps.frames_to_secs(self.local_frame())
    }

    /// Seconds since the start of the whole timeline. Periodic effects run
    /// on this clock so they never reset at scene boundaries.
    pub fn absolute_secs(self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }

    /// Scene progress `clamp(local / scene_frames, 0, 1)`.
    ///
    /// Frames before the scene report 0, frames past its end report 1, so
    /// every evaluator is total over arbitrary frame access order.
    pub fn progress(self) -> f64 {
        if self.scene_frames == 0 {
            return 1.0;
        }
        clamp01(self.local_frame() as f64 / self.scene_frames as f64)
    }
}

/// Whole-image state for one frame.
///
/// `translate` is in canvas fractions (`0.05` = 5% of the canvas along that
/// axis), so the snapshot is resolution-independent. Identity is
/// [`EffectSnapshot::default`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSnapshot {
    /// Uniform scale, 1.0 at rest.
    pub scale: f64,
    /// Offset in canvas fractions.
    pub translate: Vec2,
    /// Rotation around the image center, degrees.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for EffectSnapshot {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            opacity: 1.0,
        }
    }
}

/// Caption text state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSnapshot {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset in canvas fractions.
    pub translate: Vec2,
    /// Uniform scale, 1.0 at rest.
    pub scale: f64,
    /// For character-driven animations, how many characters to show.
    /// `None` means the whole text.
    pub visible_chars: Option<u32>,
    /// Glow strength in `[0, 1]` for the paint layer.
    pub glow: f64,
}

impl Default for TextSnapshot {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            visible_chars: None,
            glow: 0.0,
        }
    }
}

/// Wipe sweep direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WipeDir {
    /// Reveal sweeps from the left edge to the right.
    LeftToRight,
    /// Reveal sweeps from the right edge to the left.
    RightToLeft,
    /// Reveal sweeps from the top edge down.
    TopToBottom,
    /// Reveal sweeps from the bottom edge up.
    BottomToTop,
}

/// Mask payload for reveal-style transitions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransitionMask {
    /// Directional reveal; `revealed` is the visible fraction of the scene.
    Wipe {
        /// Sweep direction.
        dir: WipeDir,
        /// Fraction of the scene visible, `[0, 1]`.
        revealed: f64,
    },
    /// Radial reveal sweeping like a clock hand from twelve o'clock.
    Clock {
        /// Fraction of the scene visible, `[0, 1]`.
        revealed: f64,
    },
}

/// Scene boundary state for one frame.
///
/// Identity (no transition in flight) is [`TransitionSnapshot::default`].
/// During the overlap window the compositor blends the outgoing scene's exit
/// snapshot with the incoming scene's entrance snapshot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSnapshot {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset in canvas fractions (slides move whole canvas widths).
    pub translate: Vec2,
    /// Uniform scale, 1.0 at rest.
    pub scale: f64,
    /// Perspective rotation around the vertical axis, degrees.
    pub rotation_y_deg: f64,
    /// Blur radius in pixels at 1080p; surfaces scale it with resolution.
    pub blur_px: f64,
    /// Reveal mask, when the transition is mask-based.
    pub mask: Option<TransitionMask>,
}

impl Default for TransitionSnapshot {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_y_deg: 0.0,
            blur_px: 0.0,
            mask: None,
        }
    }
}

/// Evaluate the scene's image motion at one frame.
///
/// Pure and deterministic: the same arguments always produce the same
/// snapshot, bit for bit. Progress-driven effects ease scene progress with
/// the configured easing and interpolate; periodic effects are functions of
/// the absolute frame; shake draws from seeded noise only.
pub fn eval_image_effect(ctx: SceneCtx, cfg: &SceneAnimationConfig) -> EffectSnapshot {
    let strength = cfg.intensity.multiplier();
    match cfg.image_effect {
        ImageEffect::Static => EffectSnapshot::default(),
        ImageEffect::ZoomIn => {
            let p = cfg.easing.apply(ctx.progress());
            EffectSnapshot {
                scale: lerp(1.0, 1.0 + ZOOM_AMOUNT * strength, p),
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::ZoomOut => {
            let p = cfg.easing.apply(ctx.progress());
            EffectSnapshot {
                scale: lerp(1.0 + ZOOM_AMOUNT * strength, 1.0, p),
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::PanLeft | ImageEffect::PanRight => {
            let p = cfg.easing.apply(ctx.progress());
            let distance = PAN_DISTANCE * strength;
            let x = match cfg.image_effect {
                ImageEffect::PanLeft => lerp(distance, -distance, p),
                _ => lerp(-distance, distance, p),
            };
            EffectSnapshot {
                // Overscan keeps the drifting image covering the canvas.
                scale: 1.0 + PAN_OVERSCAN * strength,
                translate: Vec2::new(x, 0.0),
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::KenBurns => {
            let kb = cfg.ken_burns.unwrap_or_else(KenBurnsConfig::default);
            let p = cfg.easing.apply(ctx.progress());
            EffectSnapshot {
                scale: lerp(kb.start_scale, kb.end_scale, p),
                translate: Vec2::new(
                    lerp(kb.start_x, kb.end_x, p),
                    lerp(kb.start_y, kb.end_y, p),
                ),
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::Parallax => {
            // Background layer: linear drift, no easing.
            let p = ctx.progress();
            let drift = PARALLAX_DRIFT * strength;
            EffectSnapshot {
                scale: 1.0 + PARALLAX_OVERSCAN * strength,
                translate: Vec2::new(lerp(-drift, drift, p), 0.0),
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::Pulse => {
            let t = ctx.absolute_secs();
            let wave = (std::f64::consts::TAU * PULSE_HZ * t).sin();
            EffectSnapshot {
                scale: 1.0 + PULSE_AMPLITUDE * strength * wave,
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::Float => {
            let t = ctx.absolute_secs();
            let amp = FLOAT_AMPLITUDE * strength;
            EffectSnapshot {
                translate: Vec2::new(
                    amp * 0.6 * (std::f64::consts::TAU * FLOAT_HZ * 0.8 * t).cos(),
                    amp * (std::f64::consts::TAU * FLOAT_HZ * t).sin(),
                ),
                ..EffectSnapshot::default()
            }
        }
        ImageEffect::Shake => {
            let f = ctx.frame.0;
            let jitter = |salt: u64| noise01(ctx.seed ^ salt, f) * 2.0 - 1.0;
            EffectSnapshot {
                translate: Vec2::new(
                    jitter(0) * SHAKE_AMPLITUDE * strength,
                    jitter(SALT_SHAKE_Y) * SHAKE_AMPLITUDE * strength,
                ),
                rotation_deg: jitter(SALT_SHAKE_ROT) * SHAKE_MAX_ROT_DEG * strength,
                ..EffectSnapshot::default()
            }
        }
    }
}

fn char_window_frames(text_chars: usize, fps: Fps) -> u64 {
    ((text_chars as f64 / TYPEWRITER_CHARS_PER_SEC) * fps.as_f64()).ceil() as u64
}

fn entrance_window_frames(anim: TextAnimation, text_chars: usize, fps: Fps) -> u64 {
    let frames = if anim.reveals_by_characters() {
        char_window_frames(text_chars, fps)
    } else {
        fps.secs_to_frames_round(TEXT_WINDOW_SECS)
    };
    frames.max(1)
}

fn visible_prefix(frames_since_start: u64, text_chars: usize, fps: Fps) -> u32 {
    let shown = (frames_since_start as f64 * TYPEWRITER_CHARS_PER_SEC / fps.as_f64()).floor();
    (shown as usize).min(text_chars) as u32
}

fn text_enter_shape(anim: TextAnimation, p: f64, ease: Ease) -> TextSnapshot {
    let ep = ease.apply(p);
    match anim {
        TextAnimation::FadeIn => TextSnapshot {
            opacity: ep,
            ..TextSnapshot::default()
        },
        TextAnimation::SlideUp => TextSnapshot {
            opacity: ep,
            translate: Vec2::new(0.0, lerp(TEXT_SLIDE_DISTANCE, 0.0, ep)),
            ..TextSnapshot::default()
        },
        // Bounce carries its own curve; the configured easing would flatten it.
        TextAnimation::Bounce => TextSnapshot {
            opacity: clamp01(p * 3.0),
            scale: lerp(TEXT_BOUNCE_FROM, 1.0, Ease::Bounce.apply(p)),
            ..TextSnapshot::default()
        },
        TextAnimation::Glow => TextSnapshot {
            opacity: ep,
            glow: ep,
            ..TextSnapshot::default()
        },
        TextAnimation::Scale => TextSnapshot {
            opacity: ep,
            scale: lerp(TEXT_SCALE_FROM, 1.0, ep),
            ..TextSnapshot::default()
        },
        TextAnimation::Typewriter | TextAnimation::Reveal | TextAnimation::None => {
            TextSnapshot::default()
        }
    }
}

fn text_exit_shape(anim: TextAnimation, q: f64, ease: Ease) -> TextSnapshot {
    let eq = ease.apply(q);
    match anim {
        TextAnimation::FadeIn => TextSnapshot {
            opacity: 1.0 - eq,
            ..TextSnapshot::default()
        },
        TextAnimation::SlideUp => TextSnapshot {
            opacity: 1.0 - eq,
            translate: Vec2::new(0.0, lerp(0.0, -TEXT_SLIDE_DISTANCE, eq)),
            ..TextSnapshot::default()
        },
        TextAnimation::Bounce => TextSnapshot {
            opacity: clamp01((1.0 - q) * 3.0),
            scale: lerp(1.0, TEXT_BOUNCE_FROM, Ease::Bounce.apply(q)),
            ..TextSnapshot::default()
        },
        TextAnimation::Glow => TextSnapshot {
            opacity: 1.0 - eq,
            glow: 1.0 - eq,
            ..TextSnapshot::default()
        },
        TextAnimation::Scale => TextSnapshot {
            opacity: 1.0 - eq,
            scale: lerp(1.0, TEXT_SCALE_FROM, eq),
            ..TextSnapshot::default()
        },
        TextAnimation::Typewriter | TextAnimation::Reveal | TextAnimation::None => {
            TextSnapshot::default()
        }
    }
}

/// Evaluate the caption text state at one frame.
///
/// `text_chars` is the caption length in characters (`str::chars().count()`),
/// which drives typewriter and reveal pacing. The entrance plays over a
/// [`TEXT_WINDOW_SECS`] window starting `text_delay_sec` into the scene
/// (character-driven animations take as long as their characters need); the
/// exit plays over the matching window ending at scene end. If the windows
/// overlap in a very short scene, the entrance wins.
pub fn eval_text(ctx: SceneCtx, cfg: &SceneAnimationConfig, text_chars: usize) -> TextSnapshot {
    let local = ctx.local_frame();
    let delay_frames = ctx.fps.secs_to_frames_round(cfg.text_delay_sec.max(0.0));
    let char_driven =
        cfg.text_entrance.reveals_by_characters() || cfg.text_exit.reveals_by_characters();
    let steady_chars = char_driven.then_some(text_chars as u32);

    // Before the delay nothing shows, whatever the entrance kind.
    if local < delay_frames {
        return TextSnapshot {
            opacity: if char_driven { 1.0 } else { 0.0 },
            visible_chars: char_driven.then_some(0),
            ..TextSnapshot::default()
        };
    }

    let since_delay = local - delay_frames;
    let enter_window = entrance_window_frames(cfg.text_entrance, text_chars, ctx.fps);

    if cfg.text_entrance != TextAnimation::None && since_delay < enter_window {
        if cfg.text_entrance.reveals_by_characters() {
            return TextSnapshot {
                visible_chars: Some(visible_prefix(since_delay, text_chars, ctx.fps)),
                ..TextSnapshot::default()
            };
        }
        let p = since_delay as f64 / enter_window as f64;
        return TextSnapshot {
            visible_chars: steady_chars,
            ..text_enter_shape(cfg.text_entrance, p, cfg.easing)
        };
    }

    if cfg.text_exit != TextAnimation::None {
        let exit_window = entrance_window_frames(cfg.text_exit, text_chars, ctx.fps);
        let exit_start = ctx.scene_frames.saturating_sub(exit_window);
        if local >= exit_start && local < ctx.scene_frames {
            let in_exit = local - exit_start;
            if cfg.text_exit.reveals_by_characters() {
                // Deletes tail-first.
                let gone = visible_prefix(in_exit, text_chars, ctx.fps);
                return TextSnapshot {
                    visible_chars: Some(text_chars as u32 - gone.min(text_chars as u32)),
                    ..TextSnapshot::default()
                };
            }
            let q = in_exit as f64 / exit_window as f64;
            return TextSnapshot {
                visible_chars: steady_chars,
                ..text_exit_shape(cfg.text_exit, q, cfg.easing)
            };
        }
    }

    TextSnapshot {
        visible_chars: steady_chars,
        ..TextSnapshot::default()
    }
}

#[derive(Clone, Copy, Debug)]
enum Edge {
    In,
    Out,
}

fn transition_window_frames(ctx: SceneCtx, cfg: &SceneAnimationConfig) -> u64 {
    ctx.fps
        .secs_to_frames_round(cfg.transition_duration_sec.max(0.0))
        .clamp(1, ctx.scene_frames.max(1))
}

fn window_progress(offset: u64, window: u64, ease: Ease) -> f64 {
    // (window - 1) denominator so the edge frames land exactly on 0 and 1.
    let denom = window.saturating_sub(1);
    let t = if denom == 0 {
        1.0
    } else {
        offset as f64 / denom as f64
    };
    ease.apply(t)
}

fn transition_shape(
    kind: SceneTransition,
    edge: Edge,
    p: f64,
    ctx: SceneCtx,
) -> TransitionSnapshot {
    // presence: 1.0 = fully composed at rest, 0.0 = fully absent.
    let presence = match edge {
        Edge::In => p,
        Edge::Out => 1.0 - p,
    };
    match kind {
        SceneTransition::Fade | SceneTransition::Dissolve => TransitionSnapshot {
            opacity: presence,
            ..TransitionSnapshot::default()
        },
        SceneTransition::Slide => {
            // Enters from the right edge, leaves through the left.
            let x = match edge {
                Edge::In => 1.0 - presence,
                Edge::Out => -(1.0 - presence),
            };
            TransitionSnapshot {
                translate: Vec2::new(x, 0.0),
                ..TransitionSnapshot::default()
            }
        }
        SceneTransition::Zoom => TransitionSnapshot {
            opacity: presence,
            scale: lerp(ZOOM_TRANSITION_FROM, 1.0, presence),
            ..TransitionSnapshot::default()
        },
        SceneTransition::Wipe => TransitionSnapshot {
            mask: Some(TransitionMask::Wipe {
                dir: WipeDir::LeftToRight,
                revealed: presence,
            }),
            ..TransitionSnapshot::default()
        },
        SceneTransition::ClockWipe => TransitionSnapshot {
            mask: Some(TransitionMask::Clock { revealed: presence }),
            ..TransitionSnapshot::default()
        },
        SceneTransition::Flip => TransitionSnapshot {
            rotation_y_deg: match edge {
                Edge::In => lerp(90.0, 0.0, p),
                Edge::Out => lerp(0.0, -90.0, p),
            },
            ..TransitionSnapshot::default()
        },
        SceneTransition::Blur => TransitionSnapshot {
            opacity: presence,
            blur_px: (1.0 - presence) * BLUR_MAX_PX,
            ..TransitionSnapshot::default()
        },
        SceneTransition::Glitch => {
            let f = ctx.frame.0;
            let envelope = 1.0 - presence;
            let jitter = |salt: u64| noise01(ctx.seed ^ salt, f) * 2.0 - 1.0;
            let flicker = 1.0 - noise01(ctx.seed ^ SALT_GLITCH_FLICKER, f) * GLITCH_FLICKER * envelope;
            TransitionSnapshot {
                opacity: clamp01(presence * flicker),
                translate: Vec2::new(
                    jitter(0) * GLITCH_AMPLITUDE * envelope,
                    jitter(SALT_GLITCH_Y) * GLITCH_AMPLITUDE * 0.4 * envelope,
                ),
                ..TransitionSnapshot::default()
            }
        }
        SceneTransition::HardCut | SceneTransition::None => TransitionSnapshot::default(),
    }
}

/// Evaluate the scene's entrance transition at one frame.
///
/// Identity outside the entrance window (the first `transition_duration_sec`
/// of the scene) and for instant boundary kinds.
pub fn eval_scene_entrance(ctx: SceneCtx, cfg: &SceneAnimationConfig) -> TransitionSnapshot {
    if cfg.scene_entrance.is_instant() {
        return TransitionSnapshot::default();
    }
    let window = transition_window_frames(ctx, cfg);
    let local = ctx.local_frame();
    if local >= window {
        return TransitionSnapshot::default();
    }
    let p = window_progress(local, window, cfg.easing);
    transition_shape(cfg.scene_entrance, Edge::In, p, ctx)
}

/// Evaluate the scene's exit transition at one frame.
///
/// Identity outside the exit window (the last `transition_duration_sec` of
/// the scene) and for instant boundary kinds.
pub fn eval_scene_exit(ctx: SceneCtx, cfg: &SceneAnimationConfig) -> TransitionSnapshot {
    if cfg.scene_exit.is_instant() {
        return TransitionSnapshot::default();
    }
    let window = transition_window_frames(ctx, cfg);
    let local = ctx.local_frame();
    let start = ctx.scene_frames.saturating_sub(window);
    if local < start || local >= ctx.scene_frames {
        return TransitionSnapshot::default();
    }
    let p = window_progress(local - start, window, cfg.easing);
    transition_shape(cfg.scene_exit, Edge::Out, p, ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
