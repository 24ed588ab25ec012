//! Infrastructure layer - relational store access.

mod store;

pub use store::Store;
