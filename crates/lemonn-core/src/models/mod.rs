//! Domain models for the Lemonn clinic screens.

mod field;
mod mapping;
mod patient;
mod record;
mod schema;

pub use field::*;
pub use mapping::*;
pub use patient::*;
pub use record::*;
pub use schema::*;
