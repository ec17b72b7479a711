//! Cinegrid is a scene timing and composition planning engine for short,
//! AI-assembled marketing videos.
//!
//! Cinegrid turns a variable-length script into a frame-accurate
//! [`VideoCompositionTimeline`]: a fixed grid of timed cuts, a visual style
//! per cut, a contiguous narration timesheet, and a resolved animation config
//! per scene. A rendering surface then asks the pure frame evaluator for
//! per-frame snapshots (transform, opacity, visible characters, transition
//! state) and paints them however it likes.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `total duration + scene length -> Vec<Cut>` (exact tiling of the timeline)
//! 2. **Style**: `StyleIntent + cut count -> Vec<CutStyle>` (never fails, degrades to defaults)
//! 3. **Narrate**: `lines + SpeechSynthesizer -> Timesheet` (strictly sequential, gap-free)
//! 4. **Assemble**: `VideoBrief + Timesheet -> VideoCompositionTimeline`
//! 5. **Evaluate**: `SceneCtx + SceneAnimationConfig -> snapshots` (pure, deterministic)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: frame evaluation is a pure function of its
//!   inputs; all pseudo-randomness is derived from a per-scene seed and the
//!   frame index.
//! - **Degrade, don't abort**: once inputs validate, per-item failures
//!   (a TTS outage, an unrecognized effect name, malformed AI style data)
//!   produce logged fallbacks, never a failed generation.
//! - **No IO in the core**: speech synthesis is an injected async seam; the
//!   library itself never touches the network or the filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod effects;
mod eval;
mod foundation;
mod speech;
mod style;
mod timeline;

pub use animation::config::{
    Intensity, KenBurnsConfig, SceneAnimationConfig, SceneAnimationOverrides, TEXT_WINDOW_SECS,
    TYPEWRITER_CHARS_PER_SEC, resolve_animation,
};
pub use animation::ease::Ease;
pub use composition::assemble::{TRANSITION_OVERLAP_SECS, VideoBrief, assemble};
pub use composition::model::{Bumper, SceneRenderConfig, VideoCompositionTimeline};
pub use effects::image::ImageEffect;
pub use effects::text::TextAnimation;
pub use effects::transition::SceneTransition;
pub use eval::frame::{
    EffectSnapshot, SceneCtx, TextSnapshot, TransitionMask, TransitionSnapshot, WipeDir,
    eval_image_effect, eval_scene_entrance, eval_scene_exit, eval_text,
};
pub use foundation::core::{AspectRatio, Fps, FrameIndex, Vec2};
pub use foundation::error::{CinegridError, CinegridResult};
pub use speech::provider::{
    FallbackChain, SpeechSynthesizer, SynthesisError, SynthesizedClip, VoiceSpec,
};
pub use style::assign::{apply_styles, assign_styles};
pub use style::intent::{CutStyle, StyleIntent};
pub use timeline::cuts::{
    Cut, MAX_CUT_COUNT, MIN_CUT_COUNT, calculate_cut_count, generate_cut_windows,
};
pub use timeline::timesheet::{
    NarrationLine, Timesheet, TimesheetBuilder, TimesheetConfig, TimesheetEntry, build_timesheet,
};
