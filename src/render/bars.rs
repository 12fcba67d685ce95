use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{
    FONT_FAMILY, LAYER_AXIS_DESC, LAYER_LABEL_COUNT, draw_left_ticks, layer_label, tick_label,
};
use crate::config::QualitativeConfig;
use crate::data::ThicknessCategory;
use crate::error::Result;
use crate::geometry::{StackedBarLayout, layer_axis_range};

/// Legend row starts this far into the canvas, like a legend anchored at
/// `x = 0.06` of the axes.
const LEGEND_X_FRAC: f64 = 0.06;

pub fn render_stacked_bars(
    out_path: &Path,
    layout: &StackedBarLayout,
    cfg: &QualitativeConfig,
) -> Result<()> {
    let font = cfg.font_size;
    let root = BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (legend_area, plot_area) = root.split_vertically(font * 2);
    draw_category_legend(&legend_area, cfg.width, font)?;

    let x_range = layer_axis_range();
    let mut chart = ChartBuilder::on(&plot_area)
        .margin(font / 2)
        .x_label_area_size(font * 3)
        .y_label_area_size(font * 3)
        .build_cartesian_2d(x_range.clone(), 0.0f32..layout.y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(LAYER_LABEL_COUNT)
        .y_labels(0)
        .x_desc(LAYER_AXIS_DESC)
        .y_desc(format!("# of {} folds", layout.fold.title()))
        .x_label_formatter(&layer_label)
        .label_style((FONT_FAMILY, font))
        .axis_desc_style((FONT_FAMILY, font))
        .set_tick_mark_size(LabelAreaPosition::Bottom, (font / 4) as i32)
        .draw()?;

    let marks: Vec<((i32, i32), String)> = layout
        .y_ticks
        .iter()
        .map(|&t| {
            (
                chart.backend_coord(&(x_range.start, t)),
                tick_label(t as f64),
            )
        })
        .collect();
    draw_left_ticks(&root, &marks, (font / 4) as i32, 1, font)?;

    let half = cfg.bar_width / 2.0;
    for category in ThicknessCategory::ALL {
        let fill = category.color().filled();
        chart.draw_series(layout.stacks.iter().map(|stack| {
            let seg = stack.segment(category);
            Rectangle::new([(stack.x - half, seg.y0), (stack.x + half, seg.y1)], fill)
        }))?;
        chart.draw_series(layout.stacks.iter().map(|stack| {
            let seg = stack.segment(category);
            Rectangle::new(
                [(stack.x - half, seg.y0), (stack.x + half, seg.y1)],
                BLACK.stroke_width(1),
            )
        }))?;
    }

    root.present()?;
    Ok(())
}

/// One row of five swatches, left to right in stacking order.
fn draw_category_legend(
    area: &DrawingArea<BitMapBackend, Shift>,
    width: u32,
    font: u32,
) -> Result<()> {
    let swatch = (font as i32 * 3) / 4;
    let column = font as i32 * 3;
    let y = font as i32 - swatch / 2;
    let label_style =
        TextStyle::from((FONT_FAMILY, font).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    let mut x = (width as f64 * LEGEND_X_FRAC) as i32;
    for category in ThicknessCategory::ALL {
        area.draw(&Rectangle::new(
            [(x, y), (x + swatch, y + swatch)],
            category.color().filled(),
        ))?;
        area.draw(&Rectangle::new(
            [(x, y), (x + swatch, y + swatch)],
            BLACK.stroke_width(1),
        ))?;
        area.draw(&Text::new(
            category.label().to_string(),
            (x + swatch + swatch / 2, y + swatch / 2),
            &label_style,
        ))?;
        x += column;
    }
    Ok(())
}
