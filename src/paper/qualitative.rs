//! Figure 18: stacked thickness categories per lamina.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::QualitativeConfig;
use crate::data::{FoldObservationTable, FoldType};
use crate::error::Result;
use crate::geometry::StackedBarLayout;
use crate::render::render_stacked_bars;

pub fn qualitative_file_name(fold: FoldType) -> String {
    format!("isomorphic_curvature_{}.png", fold.title())
}

pub fn run_fold_chart(
    table: &FoldObservationTable,
    out_dir: &Path,
    cfg: &QualitativeConfig,
) -> Result<PathBuf> {
    let layout = StackedBarLayout::from_table(table, cfg.y_tick_step);
    let out_path = out_dir.join(qualitative_file_name(table.fold()));
    render_stacked_bars(&out_path, &layout, cfg)?;
    info!(
        fold = table.fold().title(),
        path = %out_path.display(),
        "saved stacked bar chart"
    );
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_fold_title() {
        assert_eq!(
            qualitative_file_name(FoldType::Sulcal),
            "isomorphic_curvature_sulcal.png"
        );
        assert_eq!(
            qualitative_file_name(FoldType::Gyral),
            "isomorphic_curvature_gyral.png"
        );
    }
}
