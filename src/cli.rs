use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::config::FigureConfig;
use crate::data::FoldType;
use crate::paper::ScatterSetKind;

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to config TOML (read only if present)
    #[arg(long, default_value = "figures.toml")]
    pub config: PathBuf,

    /// Directory for the rendered images (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CommonArgs {
    /// Loads the config file and applies the overrides shared by both binaries.
    pub fn load_config(&self) -> FigureConfig {
        let mut cfg = FigureConfig::load_or_default(&self.config);
        if let Some(dir) = &self.out_dir {
            cfg.output.dir = dir.clone();
        }
        cfg
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldArg {
    Sulcal,
    Gyral,
}

impl From<FoldArg> for FoldType {
    fn from(arg: FoldArg) -> Self {
        match arg {
            FoldArg::Sulcal => FoldType::Sulcal,
            FoldArg::Gyral => FoldType::Gyral,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetArg {
    /// Gyral vs sulcal relative volume and thickness
    Volume,
    /// Wall vs gyral and wall vs sulcal thickness
    Curvature,
}

impl From<SetArg> for ScatterSetKind {
    fn from(arg: SetArg) -> Self {
        match arg {
            SetArg::Volume => ScatterSetKind::VolumeConstancy,
            SetArg::Curvature => ScatterSetKind::IsomorphicCurvature,
        }
    }
}

/// Stacked bar charts of Figure 18 (sulcal and gyral folds).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct QualitativeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Fold types to render (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub fold: Vec<FoldArg>,
}

impl QualitativeArgs {
    pub fn folds(&self) -> Vec<FoldType> {
        if self.fold.is_empty() {
            return FoldType::all();
        }
        let mut out: Vec<FoldType> = Vec::new();
        for &arg in &self.fold {
            let fold = FoldType::from(arg);
            if !out.contains(&fold) {
                out.push(fold);
            }
        }
        out
    }
}

/// Strip plots of the Table 1 percentage differences.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct QuantitativeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory holding the Table 1 CSV files (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Figure sets to render (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub set: Vec<SetArg>,
}

impl QuantitativeArgs {
    pub fn sets(&self) -> Vec<ScatterSetKind> {
        if self.set.is_empty() {
            return ScatterSetKind::all();
        }
        let mut out: Vec<ScatterSetKind> = Vec::new();
        for &arg in &self.set {
            let kind = ScatterSetKind::from(arg);
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
        out
    }

    pub fn load_config(&self) -> FigureConfig {
        let mut cfg = self.common.load_config();
        if let Some(dir) = &self.data_dir {
            cfg.quantitative.data_dir = dir.clone();
        }
        cfg
    }
}
