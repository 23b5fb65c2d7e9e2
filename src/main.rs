use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use smart_stub::config::AppConfig;
use smart_stub::engine::{self, ScenarioCode};
use smart_stub::error::AppError;
use smart_stub::routes::{app_router, AppState};
use smart_stub::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "smart-stub",
    about = "Deterministic stand-in for the DWP identity and eligibility API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP stub (default command)
    Serve(ServeArgs),
    /// Print the scenario a given identifier selects
    Decode {
        /// National insurance number to decode
        nino: String,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Decode { nino } => run_decode(&nino),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.log_filter)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = app_router(state).layer(prometheus_layer);

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        "identity and eligibility stub ready",
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_decode(nino: &str) -> Result<(), AppError> {
    let code = engine::decode(nino)?;
    render_scenario(nino, &code);
    Ok(())
}

fn render_scenario(nino: &str, code: &ScenarioCode) {
    println!("Identifier: {}", nino.trim().to_ascii_uppercase());
    println!("Identity match: {}", code.identity.label());
    println!("Eligibility: {}", code.eligibility.label());
    match code.children {
        Some(counts) => {
            println!("Children under one: {}", counts.under_one);
            println!("Children under four: {}", counts.under_four);
        }
        None => println!("Children: not encoded (dependants echoed from the request)"),
    }
}
