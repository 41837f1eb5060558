//! Parser layer for reading tabular data into the model

mod csv;

pub use self::csv::parse;
