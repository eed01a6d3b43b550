use clap::Parser;
use idr_radar::application::sentiment::classify_headline;
use idr_radar::cli::commands::{Cli, Commands};
use idr_radar::config::{parse_run_date, RadarConfig};
use idr_radar::IdrRadar;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let radar = match load_radar(&cli) {
        Ok(radar) => radar,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(radar, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let log_format = std::env::var("RADAR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // logs go to stderr so `fetch --stdout` stays valid JSON
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn load_radar(cli: &Cli) -> Result<IdrRadar, Box<dyn std::error::Error>> {
    let mut config = RadarConfig::from_env()?;
    if let Some(date) = &cli.date {
        config.run_date = parse_run_date(date)?;
    }
    Ok(IdrRadar::new(config)?)
}

async fn run_command(radar: IdrRadar, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Fetch { output, stdout } => {
            let snapshot = radar.snapshot().await;
            if stdout {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                let path = output.unwrap_or_else(|| radar.config().output_path.clone());
                radar.write_snapshot(&snapshot, &path)?;
                tracing::info!(path = %path.display(), "snapshot written");
            }
        }
        Commands::Check => {
            let status = radar.market_status();
            println!("market_open={}", status.open);
            println!("skip_reason={}", status.reason);
        }
        Commands::Classify { title } => {
            println!("{}", classify_headline(&title));
        }
    }
    Ok(())
}
