//! Table 1: relative laminar volume and thickness differences.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::QuantitativeConfig;
use crate::data::MeasurementTable;
use crate::error::Result;
use crate::geometry::StripLayout;
use crate::render::render_strip_plot;

/// Ticks shared by every Table 1 chart: -90 to 90 in steps of 30.
pub const PERCENT_TICKS: [f64; 7] = [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScatterSetKind {
    VolumeConstancy,
    IsomorphicCurvature,
}

impl ScatterSetKind {
    pub fn all() -> Vec<ScatterSetKind> {
        vec![
            ScatterSetKind::VolumeConstancy,
            ScatterSetKind::IsomorphicCurvature,
        ]
    }

    pub fn figure_set(self) -> ScatterFigureSet {
        match self {
            ScatterSetKind::VolumeConstancy => volume_constancy_set(),
            ScatterSetKind::IsomorphicCurvature => isomorphic_curvature_set(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterFigure {
    pub metric: &'static str,
    pub axis_label: &'static str,
}

impl ScatterFigure {
    pub fn title(&self, dataset_file: &str) -> String {
        format!("{} ({})", self.metric, dataset_file)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterFigureSet {
    pub kind: ScatterSetKind,
    pub dataset_file: &'static str,
    pub y_ticks: Vec<f64>,
    pub figures: Vec<ScatterFigure>,
}

pub fn volume_constancy_set() -> ScatterFigureSet {
    ScatterFigureSet {
        kind: ScatterSetKind::VolumeConstancy,
        dataset_file: "Quantitative_law_of_volume_constancy.csv",
        y_ticks: PERCENT_TICKS.to_vec(),
        figures: vec![
            ScatterFigure {
                metric: "Bok_1929_relative_laminar_volume_difference",
                axis_label: "V̄g − V̄s (%)",
            },
            ScatterFigure {
                metric: "Bok_1929_relative_laminar_thickness_difference",
                axis_label: "T̄g − T̄s (%)",
            },
        ],
    }
}

pub fn isomorphic_curvature_set() -> ScatterFigureSet {
    ScatterFigureSet {
        kind: ScatterSetKind::IsomorphicCurvature,
        dataset_file: "Quantitative_plane_of_isomorphic_curvature.csv",
        y_ticks: PERCENT_TICKS.to_vec(),
        figures: vec![
            ScatterFigure {
                metric: "Bok_1929_gyri_to_wall_thickness_difference",
                axis_label: "T̄w − T̄g (%)",
            },
            ScatterFigure {
                metric: "Bok_1929_sulci_to_wall_thickness_difference",
                axis_label: "T̄w − T̄s (%)",
            },
        ],
    }
}

pub fn quantitative_file_name(metric: &str) -> String {
    format!("Quantitative_recreation_of_{metric}.png")
}

/// Build the layout for one metric of an already loaded table.
pub fn strip_layout_for(
    table: &MeasurementTable,
    figure: &ScatterFigure,
    y_ticks: &[f64],
    cfg: &QuantitativeConfig,
) -> Result<StripLayout> {
    let values = table.metric_points(figure.metric)?;
    Ok(StripLayout::build(&values, y_ticks, cfg.jitter()))
}

/// Loads the set's dataset once, then renders each figure in order.
///
/// The dataset is read before any image is written, so an unreadable file
/// leaves no partial output behind.
pub fn run_scatter_set(
    set: &ScatterFigureSet,
    data_dir: &Path,
    out_dir: &Path,
    cfg: &QuantitativeConfig,
) -> Result<Vec<PathBuf>> {
    let table = MeasurementTable::load(&data_dir.join(set.dataset_file))?;
    if table.skipped_rows() > 0 {
        info!(
            dataset = set.dataset_file,
            skipped = table.skipped_rows(),
            "dropped malformed rows"
        );
    }

    let mut written = Vec::with_capacity(set.figures.len());
    for figure in &set.figures {
        let layout = strip_layout_for(&table, figure, &set.y_ticks, cfg)?;
        let out_path = out_dir.join(quantitative_file_name(figure.metric));
        render_strip_plot(
            &out_path,
            &layout,
            &figure.title(set.dataset_file),
            figure.axis_label,
            cfg,
        )?;
        info!(
            metric = figure.metric,
            points = layout.points.len(),
            path = %out_path.display(),
            "saved strip plot"
        );
        written.push(out_path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_set_has_two_figures_with_shared_ticks() {
        for kind in ScatterSetKind::all() {
            let set = kind.figure_set();
            assert_eq!(set.kind, kind);
            assert_eq!(set.figures.len(), 2);
            assert_eq!(set.y_ticks, PERCENT_TICKS.to_vec());
        }
    }

    #[test]
    fn titles_and_file_names_embed_metric() {
        let set = volume_constancy_set();
        let fig = &set.figures[0];
        assert_eq!(
            fig.title(set.dataset_file),
            "Bok_1929_relative_laminar_volume_difference (Quantitative_law_of_volume_constancy.csv)"
        );
        assert_eq!(
            quantitative_file_name(fig.metric),
            "Quantitative_recreation_of_Bok_1929_relative_laminar_volume_difference.png"
        );
    }
}
