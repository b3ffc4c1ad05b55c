//! Menu sources
//!
//! The application ships without a backend; the menu comes from a JSON
//! document bundled into the binary.

mod fixture;

pub use fixture::FixtureMenuSource;
