//! Little Lemon application layer
//!
//! One use case per user action, each built from `Arc<dyn Port>` trait
//! objects so the same logic runs against SQLite or test doubles.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::{App, UseCases};
pub use app_paths::AppPaths;
pub use deps::AppDeps;
