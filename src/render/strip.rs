use std::path::Path;

use plotters::prelude::*;

use super::{
    FONT_FAMILY, LAYER_AXIS_DESC, LAYER_LABEL_COUNT, draw_left_ticks, layer_label, tick_label,
};
use crate::config::QuantitativeConfig;
use crate::error::Result;
use crate::geometry::{StripLayout, layer_axis_range};

const ZERO_LINE_COLOR: RGBColor = RGBColor(128, 128, 128);
const AXIS_STROKE: u32 = 3;

pub fn render_strip_plot(
    out_path: &Path,
    layout: &StripLayout,
    caption: &str,
    y_desc: &str,
    cfg: &QuantitativeConfig,
) -> Result<()> {
    let font = cfg.font_size;
    let root = BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_lo, y_hi) = layout.y_range;
    let x_range = layer_axis_range();
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, font / 2))
        .margin(font / 2)
        .x_label_area_size(font * 3)
        .y_label_area_size(font * 4)
        .build_cartesian_2d(x_range.clone(), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(LAYER_LABEL_COUNT)
        .y_labels(0)
        .x_desc(LAYER_AXIS_DESC)
        .y_desc(y_desc)
        .x_label_formatter(&layer_label)
        .label_style((FONT_FAMILY, font))
        .axis_desc_style((FONT_FAMILY, font))
        .axis_style(BLACK.stroke_width(AXIS_STROKE))
        .set_tick_mark_size(LabelAreaPosition::Bottom, (font / 2) as i32)
        .draw()?;

    let marks: Vec<((i32, i32), String)> = layout
        .y_ticks
        .iter()
        .map(|&t| (chart.backend_coord(&(x_range.start, t)), tick_label(t)))
        .collect();
    draw_left_ticks(&root, &marks, (font / 2) as i32, AXIS_STROKE, font)?;

    let dash = cfg.zero_line_width * 4;
    chart.draw_series(DashedLineSeries::new(
        layout.zero_line.iter().copied(),
        dash,
        dash / 2,
        ShapeStyle::from(&ZERO_LINE_COLOR).stroke_width(cfg.zero_line_width),
    ))?;

    let style = BLACK.mix(cfg.point_alpha).filled();
    chart.draw_series(
        layout
            .points
            .iter()
            .map(|p| Circle::new((p.x, p.y), cfg.point_radius, style)),
    )?;

    root.present()?;
    Ok(())
}
