use plotters::style::RGBColor;

use super::stride_ticks;
use crate::data::{FoldObservationTable, FoldType, Layer, ThicknessCategory};

const HEADROOM: f32 = 1.05;

#[derive(Clone, Debug, PartialEq)]
pub struct BarSegment {
    pub category: ThicknessCategory,
    pub y0: f32,
    pub y1: f32,
    pub color: RGBColor,
}

impl BarSegment {
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarStack {
    pub layer: Layer,
    pub x: f32,
    /// Always one per category, in stacking order.
    pub segments: Vec<BarSegment>,
}

impl BarStack {
    pub fn top(&self) -> f32 {
        self.segments.last().map(|s| s.y1).unwrap_or(0.0)
    }

    pub fn segment(&self, category: ThicknessCategory) -> &BarSegment {
        &self.segments[category.index()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackedBarLayout {
    pub fold: FoldType,
    pub stacks: Vec<BarStack>,
    pub y_ticks: Vec<f32>,
    pub y_max: f32,
}

impl StackedBarLayout {
    pub fn from_table(table: &FoldObservationTable, tick_step: u32) -> Self {
        let stacks = Layer::ALL
            .iter()
            .map(|&layer| {
                let mut base = 0u32;
                let segments = ThicknessCategory::ALL
                    .iter()
                    .map(|&category| {
                        let count = table.count(layer, category);
                        let seg = BarSegment {
                            category,
                            y0: base as f32,
                            y1: (base + count) as f32,
                            color: category.color(),
                        };
                        base += count;
                        seg
                    })
                    .collect();
                BarStack {
                    layer,
                    x: layer.index() as f32,
                    segments,
                }
            })
            .collect();

        let max_total = table.max_layer_total();
        Self {
            fold: table.fold(),
            stacks,
            y_ticks: stride_ticks(tick_step, max_total),
            y_max: (max_total as f32 * HEADROOM).max(1.0),
        }
    }

    pub fn stack(&self, layer: Layer) -> &BarStack {
        &self.stacks[layer.index()]
    }

    /// Share of the lamina's stack taken by one category, 0 for an empty stack.
    pub fn fraction(&self, layer: Layer, category: ThicknessCategory) -> f32 {
        let stack = self.stack(layer);
        let top = stack.top();
        if top <= 0.0 {
            return 0.0;
        }
        stack.segment(category).height() / top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sulcal_layer_three_stack() {
        let layout = StackedBarLayout::from_table(&FoldObservationTable::sulcal(), 4);
        let stack = layout.stack(Layer::III);
        assert_eq!(stack.top(), 29.0);
        assert_relative_eq!(
            layout.fraction(Layer::III, ThicknessCategory::StronglyDecreased),
            28.0 / 29.0
        );
        assert_eq!(stack.segment(ThicknessCategory::StronglyDecreased).y0, 0.0);
        assert_eq!(stack.segment(ThicknessCategory::StronglyDecreased).y1, 28.0);
    }

    #[test]
    fn zero_counts_become_zero_height_segments() {
        let layout = StackedBarLayout::from_table(&FoldObservationTable::sulcal(), 4);
        let stack = layout.stack(Layer::VI);
        assert_eq!(stack.segments.len(), 5);
        for cat in &ThicknessCategory::ALL[1..] {
            let seg = stack.segment(*cat);
            assert_eq!(seg.height(), 0.0);
            assert_eq!(seg.y0, 29.0);
        }
    }

    #[test]
    fn segments_are_contiguous() {
        let layout = StackedBarLayout::from_table(&FoldObservationTable::gyral(), 4);
        for stack in &layout.stacks {
            assert_eq!(stack.segments[0].y0, 0.0);
            for pair in stack.segments.windows(2) {
                assert_eq!(pair[0].y1, pair[1].y0);
            }
        }
    }

    #[test]
    fn ticks_follow_fixed_stride() {
        let layout = StackedBarLayout::from_table(&FoldObservationTable::gyral(), 4);
        assert_eq!(
            layout.y_ticks,
            vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 28.0]
        );
        assert!(layout.y_max > 28.0);
    }
}
