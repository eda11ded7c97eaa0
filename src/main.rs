use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use culture_scores::config::AppConfig;
use culture_scores::error::AppError;
use culture_scores::http::{score_router, AppState};
use culture_scores::scoring::{rules, RawScore, ScoreInput};
use culture_scores::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Culture Scores",
    about = "Serve and evaluate four-quadrant culture score assessments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Scale and rank a score from the command line
    Process(ScoreArgs),
    /// Run the diagnostic rules against a score from the command line
    Check(ScoreArgs),
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

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Raw value for the Collaborate quadrant
    #[arg(long, default_value_t = 0)]
    collaborate: u32,
    /// Raw value for the Create quadrant
    #[arg(long, default_value_t = 0)]
    create: u32,
    /// Raw value for the Compete quadrant
    #[arg(long, default_value_t = 0)]
    compete: u32,
    /// Raw value for the Control quadrant
    #[arg(long, default_value_t = 0)]
    control: u32,
}

impl ScoreArgs {
    fn input(&self) -> ScoreInput {
        ScoreInput {
            collaborate: self.collaborate,
            create: self.create,
            compete: self.compete,
            control: self.control,
        }
    }
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
        Command::Process(args) => run_process(&args),
        Command::Check(args) => run_check(&args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.host = host;
    }
    if let Some(port) = args.port.take() {
        config.port = port;
    }

    telemetry::init(&config.log_level)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = score_router()
        .layer(prometheus_layer)
        .layer(Extension(state));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, "culture score service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_process(args: &ScoreArgs) -> Result<(), AppError> {
    let raw = RawScore::new(&args.input());
    let scaled = raw.scale()?;
    let ranked = scaled.rank();

    println!("Raw    {raw}");
    println!("Scaled {scaled}");
    println!("\nRanking");
    for (position, score) in ranked.positions() {
        println!("- {}: {} ({:.2})", position, score.culture.label(), score.value);
    }

    Ok(())
}

fn run_check(args: &ScoreArgs) -> Result<(), AppError> {
    let raw = RawScore::new(&args.input());

    println!("Raw    {raw}");
    println!("\nRule verdicts");
    for outcome in rules::evaluate(&raw) {
        println!("- {:?}: {:?}", outcome.name, outcome.result);
    }

    Ok(())
}
