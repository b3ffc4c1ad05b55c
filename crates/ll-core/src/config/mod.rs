//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! This module contains data only: no validation, no policy. Missing keys
//! become empty values, which are valid facts.

mod app_config;

pub use app_config::AppConfig;
