//! # ll-infra
//!
//! Infrastructure adapters for Little Lemon: the SQLite-backed local store,
//! the bundled menu source and platform directory resolution.

pub mod db;
pub mod fs;
pub mod menu_source;
pub mod store;

pub use menu_source::FixtureMenuSource;
pub use store::LocalStore;
