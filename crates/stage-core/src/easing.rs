//! Easing curves for tweens. Input and output are progress in [0, 1].

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuadraticInOut,
    CubicInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::ExponentialIn => {
                if t == 0.0 {
                    0.0
                } else {
                    1024.0_f32.powf(t - 1.0)
                }
            }
            Easing::ExponentialOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Easing::ExponentialInOut => {
                if t == 0.0 {
                    return 0.0;
                }
                if t == 1.0 {
                    return 1.0;
                }
                let t2 = t * 2.0;
                if t2 < 1.0 {
                    0.5 * 1024.0_f32.powf(t2 - 1.0)
                } else {
                    0.5 * (2.0 - 2.0_f32.powf(-10.0 * (t2 - 1.0)))
                }
            }
        }
    }
}
