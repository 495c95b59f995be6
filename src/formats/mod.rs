// Input file format handling

pub mod csv;

pub use csv::{AqiReader, CsvError};
