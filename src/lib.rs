//! Little Lemon
//!
//! Bootstrap and command line surface of the Little Lemon app. The domain,
//! use cases and storage live in the `ll-core`, `ll-app` and `ll-infra`
//! crates.

pub mod bootstrap;
pub mod cli;
