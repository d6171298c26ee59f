use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_checklist::config::{AppConfig, DEFAULT_PORT};
use agent_checklist::models::Category;
use agent_checklist::{api, store::SelectionStore};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Pick agent tasks and save them as a JSON snapshot and an MDX intake document")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the checklist form
    Serve {
        /// Port for the web UI
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory holding json/ and intake/ (defaults to the working directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Print the last saved selections
    Show {
        /// Directory holding json/ and intake/ (defaults to the working directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Check whether a checklist server is running
    Status {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "agent_checklist=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(root: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match root {
        Some(root) => Ok(AppConfig::under(root)),
        None => AppConfig::from_current_dir().context("Could not determine working directory"),
    }
}

async fn serve(port: u16, root: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(root)?.with_app_url(format!("http://localhost:{}", port));
    tracing::info!(
        "Storing selections in {} and {}",
        config.storage.snapshot_path.display(),
        config.storage.document_path.display()
    );

    let app = api::create_router(SelectionStore::new(config));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Checklist listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn show(root: Option<PathBuf>) -> anyhow::Result<()> {
    let store = SelectionStore::new(load_config(root)?);

    let Some(snapshot) = store.load_snapshot()? else {
        println!("No selections saved yet.");
        return Ok(());
    };

    let selection = snapshot.selection();
    for category in Category::ALL {
        println!("{}:", category.heading());
        let items = selection.get(category);
        if items.is_empty() {
            println!("  (none)");
        }
        for item in items {
            println!("  - {}", item);
        }
    }
    println!("Last updated: {}", snapshot.timestamp);
    Ok(())
}

async fn status(port: u16) -> anyhow::Result<()> {
    let url = format!("http://127.0.0.1:{}/api/v1/health", port);
    match reqwest::get(&url).await {
        Ok(response) if response.status().is_success() => {
            println!("Checklist server is running on port {}", port);
        }
        Ok(response) => {
            println!("Checklist server on port {} answered {}", port, response.status());
        }
        Err(_) => {
            println!("No checklist server on port {}", port);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, root }) => serve(port, root).await?,
        Some(Commands::Show { root }) => show(root)?,
        Some(Commands::Status { port }) => status(port).await?,
        None => serve(DEFAULT_PORT, None).await?,
    }

    Ok(())
}
