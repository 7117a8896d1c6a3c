//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for catalog access; implementations live in
//! `crate::infrastructure::catalog`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`PageRepository`] - Page lookup and listing

pub mod page_repository;

pub use page_repository::PageRepository;

#[cfg(test)]
pub use page_repository::MockPageRepository;
