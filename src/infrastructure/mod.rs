//! Infrastructure layer implementing the domain repository traits.
//!
//! # Modules
//!
//! - [`catalog`] - In-memory content catalog

pub mod catalog;
