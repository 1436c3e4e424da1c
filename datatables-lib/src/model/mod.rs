//! Tabular data model

mod dataset;
mod row;
mod row_serde;
mod value;

pub use dataset::*;
pub use row::*;
pub use value::*;
