pub mod model;

pub use model::{WeaknessModel, WeaknessRecord, WeightTable, NEUTRAL_WEIGHT};
