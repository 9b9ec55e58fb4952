use anyhow::Result;
use linkslug::config::{self, Config};
use linkslug::server;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Create the credential file (see CREDENTIALS_FILE) and restart.");
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
