use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{HttpOrdersApi, OrderDetailsController, OrdersApi, SubmitOutcome};
use shared::domain::{OperatorId, OrderId};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{load_settings, Settings, SETTINGS_FILE};
use render::{render_operators, render_view};

#[derive(Parser, Debug)]
#[command(name = "order_desk", about = "Inspect warehouse orders and assign operators")]
struct Cli {
    /// Settings file; missing files fall back to defaults.
    #[arg(long, default_value = SETTINGS_FILE)]
    config: PathBuf,
    /// Overrides the API base url from settings and environment.
    #[arg(long)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one order with its products and assignment form.
    Show { order_id: i64 },
    /// List the operators currently eligible for assignment.
    Operators,
    /// Assign (or reassign) an operator to an order.
    Assign { order_id: i64, operator_id: i64 },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_api(settings: &Settings) -> Result<HttpOrdersApi> {
    let api = match settings.request_timeout() {
        Some(timeout) => HttpOrdersApi::with_timeout(&settings.api_base_url, timeout)?,
        None => HttpOrdersApi::new(&settings.api_base_url)?,
    };
    Ok(api)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config)?;
    if let Some(url) = cli.api_base_url {
        settings.api_base_url = url;
    }
    init_tracing(&settings.log_filter);
    info!(api_base_url = %settings.api_base_url, "order_desk starting");

    let api = Arc::new(build_api(&settings)?);

    match cli.command {
        Command::Show { order_id } => {
            let controller = OrderDetailsController::with_success_display(
                api,
                settings.success_display(),
            );
            controller.mount(Some(OrderId(order_id))).await;
            println!("{}", render_view(&controller.view().await));
        }
        Command::Operators => {
            let operators = api
                .list_active_operators()
                .await
                .context("failed to list active operators")?;
            println!("{}", render_operators(&operators));
        }
        Command::Assign {
            order_id,
            operator_id,
        } => {
            let controller = OrderDetailsController::with_success_display(
                api,
                settings.success_display(),
            );
            controller.mount(Some(OrderId(order_id))).await;
            let state = controller.snapshot().await;
            if state.order.loaded().is_none() {
                bail!("{}", render_view(&controller.view().await));
            }
            if !state
                .operators
                .iter()
                .any(|operator| operator.id == OperatorId(operator_id))
            {
                bail!("operator {operator_id} is not in the active operator list");
            }

            controller
                .select_operator(Some(OperatorId(operator_id)))
                .await;
            let outcome = controller.submit_assignment().await;
            println!("{}", render_view(&controller.view().await));
            controller.shutdown().await;
            if outcome != SubmitOutcome::Assigned {
                bail!("assignment did not complete ({outcome:?})");
            }
        }
    }

    Ok(())
}
