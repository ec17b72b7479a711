/// How caption text enters or exits a scene.
///
/// The same variant describes both directions: an exit plays the entrance
/// curve in reverse (typewriter and reveal delete characters tail-first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAnimation {
    /// Characters appear one by one at a fixed rate.
    Typewriter,
    /// Opacity ramp. The fallback for unrecognized names and the hard
    /// default entrance.
    #[default]
    FadeIn,
    /// Fade combined with a short upward drift.
    SlideUp,
    /// Overshooting scale pop.
    Bounce,
    /// Characters revealed in order, like typewriter but meant for wipes
    /// in the paint layer.
    Reveal,
    /// Fade plus a glow strength ramp for the paint layer.
    Glow,
    /// Scale from small to rest with a fade.
    Scale,
    /// Text is simply present for the whole scene.
    None,
}

impl TextAnimation {
    /// Canonical kebab-case name, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typewriter => "typewriter",
            Self::FadeIn => "fade-in",
            Self::SlideUp => "slide-up",
            Self::Bounce => "bounce",
            Self::Reveal => "reveal",
            Self::Glow => "glow",
            Self::Scale => "scale",
            Self::None => "none",
        }
    }

    /// Parse a name leniently: case-insensitive, separators ignored.
    /// Returns `None` for unrecognized names.
    pub fn parse_loose(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "typewriter" | "type" => Some(Self::Typewriter),
            "fadein" | "fade" => Some(Self::FadeIn),
            "slideup" | "slide" => Some(Self::SlideUp),
            "bounce" => Some(Self::Bounce),
            "reveal" => Some(Self::Reveal),
            "glow" => Some(Self::Glow),
            "scale" => Some(Self::Scale),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Whether the animation works by showing a growing character prefix.
    pub fn reveals_by_characters(self) -> bool {
        matches!(self, Self::Typewriter | Self::Reveal)
    }
}
