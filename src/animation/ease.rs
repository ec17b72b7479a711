/// Easing curve applied to interpolation progress.
///
/// All curves map `[0, 1]` onto `[0, 1]` with `apply(0) == 0` and
/// `apply(1) == 1`. Spring and bounce overshoot or dip inside the interval
/// but still land exactly on the endpoints, so transition windows always
/// start and finish at their rest states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic acceleration from rest.
    EaseIn,
    /// Quadratic deceleration into rest.
    EaseOut,
    /// Quadratic acceleration then deceleration.
    #[default]
    EaseInOut,
    /// Damped oscillation that overshoots the target before settling.
    Spring,
    /// Ballistic bounce settling at the target.
    Bounce,
}

impl Ease {
    /// Evaluate the curve at progress `t` (clamped to `[0, 1]` first).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::Spring => {
                // Exponentially damped cosine, 1.5 oscillations over the
                // window. The decay term never quite reaches zero, so the
                // endpoint is pinned by hand.
                if t >= 1.0 {
                    1.0
                } else {
                    let decay = (-6.0 * t).exp();
                    1.0 - decay * (std::f64::consts::TAU * 1.5 * t).cos()
                }
            }
            Self::Bounce => {
                // Piecewise parabolas, the classic four-segment bounce-out.
                let n1 = 7.5625;
                let d1 = 2.75;
                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    let t = t - 1.5 / d1;
                    n1 * t * t + 0.75
                } else if t < 2.5 / d1 {
                    let t = t - 2.25 / d1;
                    n1 * t * t + 0.9375
                } else {
                    let t = t - 2.625 / d1;
                    n1 * t * t + 0.984375
                }
            }
        }
    }
}
