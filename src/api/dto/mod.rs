//! Response DTOs.

pub mod health;
