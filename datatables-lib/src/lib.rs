//! DataTables widget binding
//!
//! Turns a rectangular dataset and a table configuration into the payload an
//! embedded DataTables widget renders, and decodes what the widget reports
//! back: the current row selection or an action-button click. Keyed widgets
//! can be told to drop their selection by bumping a reset nonce kept in the
//! session.

pub mod boundary;
pub mod config;
pub mod error;
pub mod host;
pub mod model;
pub mod payload;
pub mod result;
pub mod session;
pub mod widget;

mod component;

pub use component::*;
pub use error::Error;
pub use error::Result;
pub use result::InteractionResult;
