//! Domain building blocks shared by the data-access and transport crates.

pub mod error;
pub mod masking;
pub mod tasks;
pub mod types;
pub mod view;
