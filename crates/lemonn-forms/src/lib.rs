//! Clinic form catalog for the Lemonn form engine.
//!
//! This crate provides the three forms the clinic screens open (patient
//! intake, activity generation and IEP creation), the option lists those
//! screens render, and the bridge from an intake submission to a roster entry.

pub mod catalog;
pub mod intake;
pub mod options;

pub use catalog::*;
pub use intake::*;
