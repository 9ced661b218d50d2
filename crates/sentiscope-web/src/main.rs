use clap::Parser;
use sentiscope_classifiers::{classify_lines, ModelLoader, Predictor};
use sentiscope_core::extract_lines;
use sentiscope_web::cli::{Cli, Commands};
use sentiscope_web::config::AppConfig;
use sentiscope_web::render::WARNING_MESSAGE;
use sentiscope_web::server::run_server;
use sentiscope_web::state::AppState;
use sentiscope_web::templates::Templates;
use std::io::Read;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            common,
            address,
            port,
        } => {
            init_logging(common.verbose);

            let mut config = AppConfig::load(&common.config, &common)?;
            if let Some(address) = address {
                config.server.address = address;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.listen_addr()?;

            let templates = Templates::load(&config.templates);
            let model = load_model(&config)?;

            println!();
            println!("  Sentiscope: per-line sentiment analysis");
            println!("  Model:   {}", model.name());
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(AppState::new(model, templates), addr).await?;
        }

        Commands::Predict { common, text } => {
            init_logging(common.verbose);

            let config = AppConfig::load(&common.config, &common)?;
            let raw = if text.is_empty() {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                input
            } else {
                text.join("\n")
            };

            let lines = extract_lines(&raw);
            if lines.is_empty() {
                eprintln!("{}", WARNING_MESSAGE);
                return Ok(());
            }

            let model = load_model(&config)?;
            for prediction in classify_lines(&lines, model.as_ref())? {
                println!(
                    "{}. {} -> {} ({})",
                    prediction.index,
                    prediction.text,
                    prediction.label(),
                    prediction.code
                );
            }
        }
    }

    Ok(())
}

/// Unpack and load the model; any failure here halts the process
fn load_model(config: &AppConfig) -> anyhow::Result<Arc<dyn Predictor>> {
    let loader = ModelLoader::new(config.model.clone());
    match loader.ensure_and_load() {
        Ok(model) => Ok(model),
        Err(e) => {
            tracing::error!("Failed to load model: {}", e);
            Err(e.into())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "sentiscope=debug,sentiscope_web=debug,sentiscope_classifiers=debug,tower_http=debug"
    } else {
        "sentiscope=info,sentiscope_web=info,sentiscope_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
