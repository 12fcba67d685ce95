//! Figure 18: qualitative thickness change per lamina, counted over folds.
//!
//! The "temporopolar area, right, very curved" region is already excluded
//! from both tables (stark deviation from the other folds, extra curvature
//! at the fold bottom). The counts below are the filtered counts.

use super::category::ThicknessCategory;
use super::layer::Layer;

const N_LAYERS: usize = Layer::ALL.len();
const N_CATEGORIES: usize = ThicknessCategory::ALL.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldType {
    Sulcal,
    Gyral,
}

impl FoldType {
    pub fn title(self) -> &'static str {
        match self {
            FoldType::Sulcal => "sulcal",
            FoldType::Gyral => "gyral",
        }
    }

    pub fn all() -> Vec<FoldType> {
        vec![FoldType::Sulcal, FoldType::Gyral]
    }
}

/// Columns entered from the paper, one per category in stacking order,
/// each listing the counts for laminae I..VI.
const SULCAL_COLUMNS: [[u32; N_LAYERS]; N_CATEGORIES] = [
    [0, 0, 28, 26, 28, 29],
    [1, 1, 1, 1, 1, 0],
    [1, 19, 0, 0, 0, 0],
    [1, 7, 0, 0, 0, 0],
    [26, 2, 0, 0, 0, 0],
];

const GYRAL_COLUMNS: [[u32; N_LAYERS]; N_CATEGORIES] = [
    [17, 13, 17, 0, 0, 0],
    [3, 6, 2, 3, 0, 0],
    [4, 9, 1, 16, 1, 1],
    [4, 0, 1, 2, 5, 0],
    [0, 0, 6, 5, 22, 27],
];

/// Absolute fold counts for every (lamina, category) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldObservationTable {
    fold: FoldType,
    counts: [[u32; N_CATEGORIES]; N_LAYERS],
}

impl FoldObservationTable {
    pub fn from_category_columns(
        fold: FoldType,
        columns: [[u32; N_LAYERS]; N_CATEGORIES],
    ) -> Self {
        let mut counts = [[0u32; N_CATEGORIES]; N_LAYERS];
        for (cat_idx, column) in columns.iter().enumerate() {
            for (layer_idx, &count) in column.iter().enumerate() {
                counts[layer_idx][cat_idx] = count;
            }
        }
        Self { fold, counts }
    }

    pub fn sulcal() -> Self {
        Self::from_category_columns(FoldType::Sulcal, SULCAL_COLUMNS)
    }

    pub fn gyral() -> Self {
        Self::from_category_columns(FoldType::Gyral, GYRAL_COLUMNS)
    }

    pub fn for_fold(fold: FoldType) -> Self {
        match fold {
            FoldType::Sulcal => Self::sulcal(),
            FoldType::Gyral => Self::gyral(),
        }
    }

    pub fn fold(&self) -> FoldType {
        self.fold
    }

    pub fn count(&self, layer: Layer, category: ThicknessCategory) -> u32 {
        self.counts[layer.index()][category.index()]
    }

    /// Counts for one lamina in stacking order.
    pub fn layer_counts(&self, layer: Layer) -> [u32; N_CATEGORIES] {
        self.counts[layer.index()]
    }

    pub fn layer_total(&self, layer: Layer) -> u32 {
        self.counts[layer.index()].iter().sum()
    }

    pub fn max_layer_total(&self) -> u32 {
        Layer::ALL
            .iter()
            .map(|&layer| self.layer_total(layer))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sulcal_layer_three_matches_figure() {
        let table = FoldObservationTable::sulcal();
        assert_eq!(table.layer_counts(Layer::III), [28, 1, 0, 0, 0]);
        assert_eq!(table.layer_total(Layer::III), 29);
    }

    #[test]
    fn columns_are_transposed_into_layer_rows() {
        let table = FoldObservationTable::gyral();
        assert_eq!(table.layer_counts(Layer::I), [17, 3, 4, 4, 0]);
        assert_eq!(table.layer_counts(Layer::IV), [0, 3, 16, 2, 5]);
        assert_eq!(table.layer_counts(Layer::VI), [0, 0, 1, 0, 27]);
        assert_eq!(
            table.count(Layer::V, ThicknessCategory::StronglyIncreased),
            22
        );
    }

    #[test]
    fn filtered_region_totals_are_preserved() {
        let sulcal: Vec<u32> = Layer::ALL
            .iter()
            .map(|&l| FoldObservationTable::sulcal().layer_total(l))
            .collect();
        let gyral: Vec<u32> = Layer::ALL
            .iter()
            .map(|&l| FoldObservationTable::gyral().layer_total(l))
            .collect();
        assert_eq!(sulcal, [29, 29, 29, 27, 29, 29]);
        assert_eq!(gyral, [28, 28, 27, 26, 28, 28]);
        assert_eq!(FoldObservationTable::sulcal().max_layer_total(), 29);
        assert_eq!(FoldObservationTable::gyral().max_layer_total(), 28);
    }
}
