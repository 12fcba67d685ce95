use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::data::Layer;

const PAD_FRAC: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JitterParams {
    /// Points land in `[index - half_width, index + half_width]`.
    pub half_width: f32,
    pub seed: u64,
}

impl Default for JitterParams {
    fn default() -> Self {
        Self {
            half_width: 0.1,
            seed: 0xC0FFEE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripPoint {
    pub layer: Layer,
    pub x: f32,
    /// The measured value, unrounded.
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    pub points: Vec<StripPoint>,
    pub zero_line: Vec<(f32, f64)>,
    pub y_ticks: Vec<f64>,
    pub y_range: (f64, f64),
}

impl StripLayout {
    pub fn build(values: &[(Layer, f64)], y_ticks: &[f64], jitter: JitterParams) -> Self {
        let mut rng = StdRng::seed_from_u64(jitter.seed);
        let half = jitter.half_width.abs();
        let points: Vec<StripPoint> = values
            .iter()
            .map(|&(layer, value)| StripPoint {
                layer,
                x: layer.index() as f32 + rng.random_range(-half..=half),
                y: value,
            })
            .collect();

        let zero_line = Layer::ALL
            .iter()
            .map(|layer| (layer.index() as f32, 0.0))
            .collect();

        let y_range = padded_range(
            points
                .iter()
                .map(|p| p.y)
                .chain(y_ticks.iter().copied())
                .chain(std::iter::once(0.0)),
        );

        Self {
            points,
            zero_line,
            y_ticks: y_ticks.to_vec(),
            y_range,
        }
    }

    pub fn count_for(&self, layer: Layer) -> usize {
        self.points.iter().filter(|p| p.layer == layer).count()
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() || (hi - lo).abs() < 1e-6 {
        let mid = if lo.is_finite() { lo } else { 0.0 };
        return (mid - 1.0, mid + 1.0);
    }
    let pad = (hi - lo) * PAD_FRAC;
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_line_spans_every_layer() {
        let layout = StripLayout::build(&[], &[], JitterParams::default());
        assert_eq!(
            layout.zero_line,
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (5.0, 0.0)]
        );
        assert_eq!(layout.y_range, (-1.0, 1.0));
    }

    #[test]
    fn points_stay_inside_their_band() {
        let values: Vec<(Layer, f64)> = Layer::ALL
            .iter()
            .flat_map(|&l| (0..20).map(move |i| (l, i as f64 - 10.0)))
            .collect();
        let jitter = JitterParams {
            half_width: 0.1,
            seed: 7,
        };
        let layout = StripLayout::build(&values, &[], jitter);
        for p in &layout.points {
            let center = p.layer.index() as f32;
            assert!((p.x - center).abs() <= 0.1 + 1e-6, "{p:?} left its band");
        }
    }

    #[test]
    fn range_covers_ticks_and_data() {
        let ticks = [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0];
        let layout = StripLayout::build(&[(Layer::II, 120.0)], &ticks, JitterParams::default());
        let (lo, hi) = layout.y_range;
        assert!(lo < -90.0);
        assert!(hi > 120.0);
    }

    #[test]
    fn zero_half_width_places_points_on_center() {
        let jitter = JitterParams {
            half_width: 0.0,
            seed: 1,
        };
        let layout = StripLayout::build(&[(Layer::V, 3.5)], &[], jitter);
        assert_eq!(layout.points[0].x, 4.0);
        assert_eq!(layout.points[0].y, 3.5);
    }

    #[test]
    fn values_keep_full_precision() {
        let layout = StripLayout::build(&[(Layer::I, 12.3)], &[], JitterParams::default());
        assert_eq!(layout.points[0].y, 12.3);
    }
}
