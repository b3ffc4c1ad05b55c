//! Tracing configuration for Little Lemon
//!
//! - Console layer on stderr (stdout carries the command output), `warn`
//!   unless `RUST_LOG` says otherwise.
//! - Optional daily-rolling file layer under the logs directory, `debug` in
//!   development and `info` in release builds.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "little-lemon.log";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives for the file layer.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ll_app={level}"),
        format!("ll_infra={level}"),
        format!("ll_core={level}"),
        "diesel=warn".to_string(),
    ]
}

fn env_filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Initialize the global tracing subscriber.
///
/// `logs_dir` enables the file layer. If that directory cannot be prepared,
/// logging falls back to the console only.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let is_dev = is_development();

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr))
        .with_filter(env_filter_or("warn"));

    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to console: {err}");
            None
        }
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(env_filter_or(&build_filter_directives(is_dev).join(",")))
    });

    registry().with(console_layer).with(file_layer).try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"ll_infra=debug".to_string()));
        assert!(dev_directives.contains(&"diesel=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"ll_app=info".to_string()));
    }
}
