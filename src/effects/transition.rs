/// Visual treatment at a scene boundary.
///
/// One vocabulary serves both uses: the between-cut transition recorded on a
/// [`crate::Cut`] and the per-scene entrance/exit in the animation config.
/// During the transition overlap the outgoing scene plays its exit while the
/// incoming scene plays its entrance, so the compositor always has two
/// snapshots to blend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneTransition {
    /// Opacity ramp. The fallback for unrecognized names and the hard
    /// default boundary treatment.
    #[default]
    Fade,
    /// Horizontal slide across the canvas.
    Slide,
    /// Scale toward or away from rest combined with a fade.
    Zoom,
    /// Instant switch, no window at all.
    #[serde(rename = "cut")]
    HardCut,
    /// Crossfade where both scenes stay at full scale. Same snapshot as
    /// [`SceneTransition::Fade`]; the paint layer blends the pair.
    Dissolve,
    /// Directional reveal mask.
    Wipe,
    /// Radial reveal mask sweeping like a clock hand.
    ClockWipe,
    /// Perspective flip around the vertical axis.
    Flip,
    /// Blur in or out combined with a fade.
    Blur,
    /// Seeded positional flicker that settles as the scene lands.
    Glitch,
    /// No boundary treatment.
    None,
}

impl SceneTransition {
    /// Canonical kebab-case name, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Zoom => "zoom",
            Self::HardCut => "cut",
            Self::Dissolve => "dissolve",
            Self::Wipe => "wipe",
            Self::ClockWipe => "clock-wipe",
            Self::Flip => "flip",
            Self::Blur => "blur",
            Self::Glitch => "glitch",
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
            "fade" | "crossfade" => Some(Self::Fade),
            "slide" => Some(Self::Slide),
            "zoom" => Some(Self::Zoom),
            "cut" | "hardcut" => Some(Self::HardCut),
            "dissolve" => Some(Self::Dissolve),
            "wipe" => Some(Self::Wipe),
            "clockwipe" => Some(Self::ClockWipe),
            "flip" => Some(Self::Flip),
            "blur" => Some(Self::Blur),
            "glitch" => Some(Self::Glitch),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Whether the boundary switches without an animation window.
    pub fn is_instant(self) -> bool {
        matches!(self, Self::HardCut | Self::None)
    }
}
