//! Chart geometry computed ahead of rendering.
pub mod bars;
pub mod strip;

pub use bars::{BarSegment, BarStack, StackedBarLayout};
pub use strip::{JitterParams, StripLayout, StripPoint};

/// `0, step, 2*step, ...` while `<= max`.
pub fn stride_ticks(step: u32, max: u32) -> Vec<f32> {
    if step == 0 {
        return vec![0.0];
    }
    (0..=max).step_by(step as usize).map(|t| t as f32).collect()
}

/// Half-open category bands `[i - 0.5, i + 0.5)` around each lamina.
pub fn layer_axis_range() -> std::ops::Range<f32> {
    -0.5f32..(crate::data::Layer::ALL.len() as f32 - 0.5)
}
