pub mod category;
pub mod layer;
pub mod measurements;
pub mod observations;

pub use category::ThicknessCategory;
pub use layer::Layer;
pub use measurements::{MeasurementRecord, MeasurementTable};
pub use observations::{FoldObservationTable, FoldType};
