mod bitrise;
mod cli;
mod config;
mod constant;
mod export_error;
mod extract;
mod pretty_log;
mod publish;

use crate::bitrise::token_bitrise_async_client::TokenBitriseAsyncClient;
use crate::cli::{cli_do_export, ExportOutcome};
use crate::config::{ExportConfig, ExportParams};
use crate::export_error::ExportError;
use crate::publish::EnvmanPublisher;
use clap::Parser;
use std::io::{stdout, Stdout};

#[derive(Parser)]
#[command(name = "Build Log Export",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about = None
)]
struct Cli {
    #[command(flatten)]
    params: ExportParams,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let mut stdout = stdout();

    show_welcome();

    if let Err(err) = main_cli(&mut stdout, cli.params).await {
        err.colored_println(&mut stdout);
        std::process::exit(1);
    }

    show_finished();
}

async fn main_cli(stdout: &mut Stdout, params: ExportParams) -> Result<ExportOutcome, ExportError> {
    let config = ExportConfig::try_from(params)?;
    config.colored_println(stdout);

    let client = TokenBitriseAsyncClient::new(&config.api_base_url, &config.api_auth_token)
        .map_err(ExportError::ClientInvalid)?;
    let publisher = EnvmanPublisher::new(&config.publisher);

    cli_do_export(stdout, &config, &client, &publisher).await
}

fn show_welcome() {
    println!(
        "--- Build Log Export v{} ---",
        env!("CARGO_PKG_VERSION")
    );
}

fn show_finished() {
    println!("--- All Finished ---");
}
