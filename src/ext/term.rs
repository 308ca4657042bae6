use crossterm::style::Color;

pub trait ColorInterpolationExt<T> {
    fn lerp(&self, other: &T, r: f64) -> T;
}

impl ColorInterpolationExt<Color> for Color {
    fn lerp(&self, other: &Color, p: f64) -> Color {
        assert!((0f64..=1f64).contains(&p), "lerp p lives in [0, 1]");

        // interpolate a channel
        let f = |a: u8, b: u8| ((a as f64) * p + (b as f64) * (1f64 - p)).round() as u8;

        match (self, other) {
            (
                Color::Rgb {
                    r: r1,
                    g: g1,
                    b: b1,
                },
                Color::Rgb {
                    r: r2,
                    g: g2,
                    b: b2,
                },
            ) => Color::Rgb {
                r: f(*r1, *r2),
                g: f(*g1, *g2),
                b: f(*b1, *b2),
            },

            // only rgb colors interpolate; named colors stick to `self`
            _ => *self,
        }
    }
}

#[cfg(test)]
mod test {
    use crossterm::style::Color;

    use crate::ext::term::ColorInterpolationExt;

    #[test]
    fn lerp_is_self_at_one_and_other_at_zero() {
        let a = Color::Rgb { r: 255, g: 0, b: 0 };
        let b = Color::Rgb { r: 0, g: 0, b: 255 };

        assert_eq!(a.lerp(&b, 1.0), a);
        assert_eq!(a.lerp(&b, 0.0), b);
    }

    #[test]
    fn lerp_rounds_to_the_nearest_channel_value() {
        let a = Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        let b = Color::Rgb {
            r: 127,
            g: 127,
            b: 127,
        };

        assert_eq!(
            a.lerp(&b, 0.5),
            Color::Rgb {
                r: 191,
                g: 191,
                b: 191
            }
        );
    }

    #[test]
    fn named_colors_do_not_interpolate() {
        let a = Color::White;
        let b = Color::Rgb { r: 0, g: 0, b: 0 };

        assert_eq!(a.lerp(&b, 0.5), Color::White);
    }
}
