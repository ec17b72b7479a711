use crate::{
    effects::image::ImageEffect,
    effects::text::TextAnimation,
    effects::transition::SceneTransition,
    foundation::error::{CinegridError, CinegridResult},
};

/// Style triple assigned to one cut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CutStyle {
    /// Motion for the cut's image.
    pub image_effect: ImageEffect,
    /// Boundary treatment into the cut.
    pub transition: SceneTransition,
    /// Caption entrance.
    pub text_animation: TextAnimation,
}

impl CutStyle {
    /// Shorthand used by the built-in pattern tables.
    pub const fn new(
        image_effect: ImageEffect,
        transition: SceneTransition,
        text_animation: TextAnimation,
    ) -> Self {
        Self {
            image_effect,
            transition,
            text_animation,
        }
    }
}

/// Where per-cut styles come from.
///
/// In brief JSON this is untagged: an array means [`StyleIntent::Explicit`],
/// a string means [`StyleIntent::Keyword`], and `null` (or omitting the
/// field) means [`StyleIntent::Varied`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleIntent {
    /// AI-planned style per cut, already validated.
    Explicit(Vec<CutStyle>),
    /// Pick a pattern by matching the keyword against the category table.
    Keyword(String),
    /// Cycle the built-in varied pattern.
    #[default]
    Varied,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCutStyle {
    #[serde(default)]
    image_effect: Option<String>,
    #[serde(default)]
    transition: Option<String>,
    #[serde(default)]
    text_animation: Option<String>,
}

impl RawCutStyle {
    fn resolve(&self) -> CutStyle {
        let image_effect = match self.image_effect.as_deref() {
            None => ImageEffect::default(),
            Some(s) => ImageEffect::parse_loose(s).unwrap_or_else(|| {
                tracing::warn!(value = s, "unrecognized image effect, using default");
                ImageEffect::default()
            }),
        };
        let transition = match self.transition.as_deref() {
            None => SceneTransition::default(),
            Some(s) => SceneTransition::parse_loose(s).unwrap_or_else(|| {
                tracing::warn!(value = s, "unrecognized transition, using default");
                SceneTransition::default()
            }),
        };
        let text_animation = match self.text_animation.as_deref() {
            None => TextAnimation::default(),
            Some(s) => TextAnimation::parse_loose(s).unwrap_or_else(|| {
                tracing::warn!(value = s, "unrecognized text animation, using default");
                TextAnimation::default()
            }),
        };
        CutStyle {
            image_effect,
            transition,
            text_animation,
        }
    }
}

fn parse_ai_styles(json: &str) -> CinegridResult<Vec<CutStyle>> {
    let raw: Vec<RawCutStyle> = serde_json::from_str(json).map_err(|e| {
        CinegridError::style_intent(format!("payload is not a JSON array of style objects: {e}"))
    })?;
    Ok(raw.iter().map(RawCutStyle::resolve).collect())
}

impl StyleIntent {
    /// Interpret a JSON array of per-cut styles produced by an AI planner.
    ///
    /// Field values are parsed leniently: an unrecognized effect, transition
    /// or text animation name is replaced by that field's default and logged,
    /// never rejected. Only a document that is not an array of objects at
    /// all falls back, to [`StyleIntent::Varied`], again logged rather than
    /// surfaced. AI output quality must not decide whether a video gets
    /// made.
    pub fn from_ai_json(json: &str) -> Self {
        match parse_ai_styles(json) {
            Ok(styles) if !styles.is_empty() => Self::Explicit(styles),
            Ok(_) => {
                tracing::warn!("AI style payload is an empty array, using varied pattern");
                Self::Varied
            }
            Err(err) => {
                tracing::warn!(error = %err, "AI style payload unusable, using varied pattern");
                Self::Varied
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/intent.rs"]
mod tests;
