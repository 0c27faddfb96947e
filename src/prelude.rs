pub use crate::{Count, PopulationTable, Populations, Row, Rows, Scores, VariantRecord};
