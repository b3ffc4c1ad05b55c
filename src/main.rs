use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ll_app::AppPaths;
use ll_core::app_dirs::AppDirs;
use ll_core::ports::AppDirsPort;
use ll_infra::fs::DirsAppDirsAdapter;
use tracing::error;

use little_lemon::bootstrap::{resolve_config, tracing::init_tracing_subscriber, AppRuntime};
use little_lemon::cli::{self, Cli};

fn resolve_data_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    Ok(DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application data directory")?
        .app_data_root)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(&cli)?;
    let paths = AppPaths::from_app_dirs(&AppDirs {
        app_data_root: data_dir.clone(),
    });
    let config = resolve_config(cli.config.as_deref(), &paths, &data_dir)?;

    init_tracing_subscriber(config.file_logging.then_some(paths.logs_dir.as_path()))
        .context("Failed to initialize tracing")?;

    let runtime = AppRuntime::new(&config).context("Failed to start Little Lemon")?;

    let result = cli::execute(&runtime.usecases(), cli.command).await;
    runtime.shutdown();

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            let reason = format!("{err:#}");
            error!(%reason, "Command failed");
            Err(err)
        }
    }
}
