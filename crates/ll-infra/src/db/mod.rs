pub mod executor;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod ports;
pub mod repositories;
pub mod schema;
