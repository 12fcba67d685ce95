//! Figure drivers: one function per output image.
pub mod qualitative;
pub mod quantitative;

pub use qualitative::{qualitative_file_name, run_fold_chart};
pub use quantitative::{
    PERCENT_TICKS, ScatterFigure, ScatterFigureSet, ScatterSetKind, isomorphic_curvature_set,
    quantitative_file_name, run_scatter_set, strip_layout_for, volume_constancy_set,
};
