/// Motion applied to a scene's still image for its whole duration.
///
/// The set is closed: every variant has an evaluator arm, so once a value is
/// parsed it can never fail downstream. Unknown names from AI payloads or
/// JSON briefs resolve to `None` via [`ImageEffect::parse_loose`] and callers
/// substitute a documented fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageEffect {
    /// Slow scale up from rest.
    ///
    /// The fallback when AI style data carries an unrecognized effect name
    /// and the hard default when no config tier sets an effect.
    #[default]
    ZoomIn,
    /// Slow scale down to rest.
    ZoomOut,
    /// Horizontal drift to the left with a slight overscan zoom.
    PanLeft,
    /// Horizontal drift to the right with a slight overscan zoom.
    PanRight,
    /// Simultaneous scale and position interpolation between two framings.
    KenBurns,
    /// Slow background drift, linear over the scene.
    Parallax,
    /// Periodic scale oscillation, a function of the absolute frame.
    Pulse,
    /// Gentle two-axis sinusoidal drift, a function of the absolute frame.
    Float,
    /// Seeded per-frame position and rotation jitter.
    Shake,
    /// No motion at all.
    Static,
}

impl ImageEffect {
    /// Canonical kebab-case name, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::KenBurns => "ken-burns",
            Self::Parallax => "parallax",
            Self::Pulse => "pulse",
            Self::Float => "float",
            Self::Shake => "shake",
            Self::Static => "static",
        }
    }

    /// Parse a name leniently: case-insensitive, separators ignored.
    ///
    /// Returns `None` for unrecognized names; never errors, because effect
    /// names arrive from AI output and a bad name must not sink a run.
    pub fn parse_loose(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "zoomin" | "zoom" => Some(Self::ZoomIn),
            "zoomout" => Some(Self::ZoomOut),
            "panleft" => Some(Self::PanLeft),
            "panright" => Some(Self::PanRight),
            "kenburns" => Some(Self::KenBurns),
            "parallax" => Some(Self::Parallax),
            "pulse" => Some(Self::Pulse),
            "float" => Some(Self::Float),
            "shake" => Some(Self::Shake),
            "static" | "still" => Some(Self::Static),
            _ => None,
        }
    }

    /// Whether the effect oscillates as a function of the absolute frame
    /// instead of interpolating over scene progress.
    pub fn is_periodic(self) -> bool {
        matches!(self, Self::Pulse | Self::Float | Self::Shake)
    }
}
