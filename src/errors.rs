use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no reference population: insert a table before adding populations")]
    MissingReferencePopulation,
    #[error("row {row} of reference population {population} has no first column")]
    EmptyReferenceRow { population: String, row: usize },
    #[error("ragged table: row {row} has {found} columns, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid table shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
