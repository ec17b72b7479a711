use crate::{
    effects::image::ImageEffect,
    effects::text::TextAnimation,
    effects::transition::SceneTransition,
    style::intent::{CutStyle, StyleIntent},
    timeline::cuts::Cut,
};

// Pattern tables cycled by the non-explicit paths. Each table keeps every
// field free of 3-in-a-row repeats under cyclic repetition, including across
// the wrap, so the variation rule holds for any cut count by construction.

static VARIED_PATTERN: [CutStyle; 6] = [
    CutStyle::new(ImageEffect::ZoomIn, SceneTransition::Fade, TextAnimation::FadeIn),
    CutStyle::new(ImageEffect::PanRight, SceneTransition::Slide, TextAnimation::SlideUp),
    CutStyle::new(ImageEffect::KenBurns, SceneTransition::Dissolve, TextAnimation::Typewriter),
    CutStyle::new(ImageEffect::ZoomOut, SceneTransition::Wipe, TextAnimation::Scale),
    CutStyle::new(ImageEffect::PanLeft, SceneTransition::Fade, TextAnimation::FadeIn),
    CutStyle::new(ImageEffect::Float, SceneTransition::Zoom, TextAnimation::Reveal),
];

static TECH_PATTERN: [CutStyle; 3] = [
    CutStyle::new(ImageEffect::ZoomIn, SceneTransition::Glitch, TextAnimation::Typewriter),
    CutStyle::new(ImageEffect::PanRight, SceneTransition::Slide, TextAnimation::FadeIn),
    CutStyle::new(ImageEffect::ZoomOut, SceneTransition::Blur, TextAnimation::Scale),
];

static NATURE_PATTERN: [CutStyle; 3] = [
    CutStyle::new(ImageEffect::KenBurns, SceneTransition::Fade, TextAnimation::FadeIn),
    CutStyle::new(ImageEffect::PanLeft, SceneTransition::Dissolve, TextAnimation::SlideUp),
    CutStyle::new(ImageEffect::Float, SceneTransition::Fade, TextAnimation::Reveal),
];

static FOOD_PATTERN: [CutStyle; 3] = [
    CutStyle::new(ImageEffect::ZoomIn, SceneTransition::Dissolve, TextAnimation::SlideUp),
    CutStyle::new(ImageEffect::KenBurns, SceneTransition::Wipe, TextAnimation::FadeIn),
    CutStyle::new(ImageEffect::PanRight, SceneTransition::Fade, TextAnimation::Scale),
];

static ENERGY_PATTERN: [CutStyle; 3] = [
    CutStyle::new(ImageEffect::Shake, SceneTransition::Slide, TextAnimation::Bounce),
    CutStyle::new(ImageEffect::ZoomIn, SceneTransition::Zoom, TextAnimation::Scale),
    CutStyle::new(ImageEffect::PanLeft, SceneTransition::Glitch, TextAnimation::SlideUp),
];

static LUXURY_PATTERN: [CutStyle; 3] = [
    CutStyle::new(ImageEffect::KenBurns, SceneTransition::Fade, TextAnimation::Glow),
    CutStyle::new(ImageEffect::ZoomOut, SceneTransition::Blur, TextAnimation::FadeIn),
    CutStyle::new(ImageEffect::PanRight, SceneTransition::Dissolve, TextAnimation::Reveal),
];

// First matching category wins; order is the tie-break.
static CATEGORIES: [(&[&str], &[CutStyle]); 5] = [
    (
        &["tech", "product", "software", "app", "startup", "gadget", "saas"],
        &TECH_PATTERN,
    ),
    (
        &["nature", "travel", "landscape", "outdoor", "calm", "wellness"],
        &NATURE_PATTERN,
    ),
    (
        &["food", "restaurant", "cook", "recipe", "cafe", "drink"],
        &FOOD_PATTERN,
    ),
    (
        &["sport", "fitness", "energy", "action", "game", "music"],
        &ENERGY_PATTERN,
    ),
    (
        &["luxury", "fashion", "beauty", "elegant", "premium", "jewel"],
        &LUXURY_PATTERN,
    ),
];

fn keyword_pattern(keyword: &str) -> &'static [CutStyle] {
    let key = keyword.to_ascii_lowercase();
    for (needles, pattern) in &CATEGORIES {
        if needles.iter().any(|needle| key.contains(needle)) {
            return pattern;
        }
    }
    tracing::debug!(keyword, "keyword matched no category, using varied pattern");
    &VARIED_PATTERN
}

fn cycle(pattern: &[CutStyle], count: usize) -> Vec<CutStyle> {
    (0..count).map(|i| pattern[i % pattern.len()]).collect()
}

fn pad_or_truncate(styles: &[CutStyle], count: usize) -> Vec<CutStyle> {
    if styles.len() != count {
        tracing::debug!(
            provided = styles.len(),
            needed = count,
            "explicit style list resized to cut count"
        );
    }
    let mut out: Vec<CutStyle> = styles.iter().copied().take(count).collect();
    if let Some(&last) = styles.last() {
        while out.len() < count {
            out.push(last);
        }
    }
    out
}

/// Produce exactly `cut_count` styles from the intent.
///
/// Never fails. Explicit lists are padded by repeating their last style or
/// truncated; keyword and varied intents cycle a pattern table. Every
/// non-explicit path keeps the variation rule: no image effect or transition
/// value appears three times in a row.
pub fn assign_styles(cut_count: usize, intent: &StyleIntent) -> Vec<CutStyle> {
    match intent {
        StyleIntent::Explicit(styles) if !styles.is_empty() => pad_or_truncate(styles, cut_count),
        StyleIntent::Explicit(_) => {
            tracing::warn!("explicit style intent is empty, using varied pattern");
            cycle(&VARIED_PATTERN, cut_count)
        }
        StyleIntent::Keyword(keyword) => cycle(keyword_pattern(keyword), cut_count),
        StyleIntent::Varied => cycle(&VARIED_PATTERN, cut_count),
    }
}

/// Write assigned styles onto the cut grid.
///
/// The only sanctioned mutation of cut style fields. Pairs positionally;
/// callers pass a style list produced by [`assign_styles`] for the same cut
/// count.
pub fn apply_styles(cuts: &mut [Cut], styles: &[CutStyle]) {
    for (cut, style) in cuts.iter_mut().zip(styles) {
        cut.image_effect = style.image_effect;
        cut.transition = style.transition;
        cut.text_animation = style.text_animation;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/assign.rs"]
mod tests;
