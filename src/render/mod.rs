//! Plotters renderers for the precomputed layouts.
pub mod bars;
pub mod strip;

pub use bars::render_stacked_bars;
pub use strip::render_strip_plot;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::data::Layer;
use crate::error::Result;

pub(crate) const FONT_FAMILY: &str = "sans-serif";
pub(crate) const LAYER_AXIS_DESC: &str = "Lamina";

/// The default float key points over `-0.5..5.5` with at most six labels
/// are exactly the lamina centres `0..=5`.
pub(crate) const LAYER_LABEL_COUNT: usize = Layer::ALL.len();

pub(crate) fn layer_label(x: &f32) -> String {
    let idx = x.round();
    if idx < 0.0 {
        return String::new();
    }
    Layer::from_index(idx as usize)
        .map(|l| l.label().to_string())
        .unwrap_or_default()
}

pub(crate) fn tick_label(value: f64) -> String {
    format!("{value:.0}")
}

/// Left-axis ticks at fixed backend positions.
///
/// The mesh is configured with no y labels; each `(pixel, label)` pair gets a
/// tick mark pointing away from the plot and a right-aligned label.
pub(crate) fn draw_left_ticks(
    root: &DrawingArea<BitMapBackend, Shift>,
    marks: &[((i32, i32), String)],
    tick_len: i32,
    stroke: u32,
    font: u32,
) -> Result<()> {
    let style = TextStyle::from((FONT_FAMILY, font).into_font())
        .pos(Pos::new(HPos::Right, VPos::Center));
    for ((x, y), label) in marks {
        let (x, y) = (*x, *y);
        root.draw(&PathElement::new(
            vec![(x - tick_len, y), (x, y)],
            BLACK.stroke_width(stroke),
        ))?;
        root.draw(&Text::new(
            label.clone(),
            (x - tick_len - tick_len / 2, y),
            &style,
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_labels_map_positions_to_numerals() {
        let labels: Vec<String> = (0..LAYER_LABEL_COUNT)
            .map(|i| layer_label(&(i as f32)))
            .collect();
        assert_eq!(labels, ["I", "II", "III", "IV", "V", "VI"]);
        assert_eq!(layer_label(&-1.0), "");
        assert_eq!(layer_label(&6.0), "");
    }

    #[test]
    fn tick_labels_drop_fraction() {
        assert_eq!(tick_label(-90.0), "-90");
        assert_eq!(tick_label(28.0), "28");
    }
}
