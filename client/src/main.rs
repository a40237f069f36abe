//! `holidaze` entry point: loads settings, restores the session and runs one
//! command.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use holidaze::config::ClientSettings;
use holidaze::inbound::cli::{Cli, build_app, run};
use mockable::{DefaultClock, DefaultEnv};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = ClientSettings::load_from_iter([OsString::from("holidaze")])
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    init_tracing(settings.log_json);

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start the Tokio runtime")?;
    runtime.block_on(async_main(cli, &settings))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        warn!(error = %e, "tracing init failed");
    }
}

async fn async_main(cli: Cli, settings: &ClientSettings) -> Result<ExitCode> {
    let app = Arc::new(
        build_app(settings, &DefaultEnv::new(), Arc::new(DefaultClock))
            .wrap_err("failed to start the client")?,
    );

    let mut stdout = io::stdout().lock();
    match run(app, cli.command, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln_message(&err.to_string())?;
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

fn eprintln_message(message: &str) -> io::Result<()> {
    use std::io::Write;
    writeln!(io::stderr().lock(), "{message}")
}
