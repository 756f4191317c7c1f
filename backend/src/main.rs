//! BantConfirm CLI - marketplace backend
//!
//! # Main Commands
//!
//! ```bash
//! bantconfirm serve                  # Start HTTP server (port 3000)
//! bantconfirm seed                   # Write the default catalog
//! bantconfirm export-leads -o x.csv  # Export the lead pipeline
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! bantconfirm score lead.json        # Score a lead draft with the AI
//! bantconfirm consult "Best CRM?"    # Ask the AI consultant
//! bantconfirm stats                  # Show record counts
//! ```

use bantconfirm::{
    server::start_server, store::seed::seed_all, AppConfig, JsonStore, LeadDraft, LeadScorer,
    Marketplace, ScoringClient,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bantconfirm")]
#[command(about = "Backend for the BantConfirm B2B lead marketplace", long_about = None)]
struct Cli {
    /// Data directory (overrides DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write the default catalog, blog posts, logos and settings
    Seed {
        /// Overwrite keys that already hold data
        #[arg(long)]
        force: bool,
    },

    /// Export all leads as CSV
    ExportLeads {
        /// Output file (default: leads_export_<millis>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score a lead draft (JSON file) with the AI
    Score {
        /// Input JSON file with wizard fields
        input: PathBuf,
    },

    /// Ask the AI business consultant
    Consult {
        /// Question to ask
        query: String,
    },

    /// Show record counts
    Stats,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bantconfirm=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let result = match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            start_server(config).await.map_err(Into::into)
        }
        Commands::Seed { force } => cmd_seed(&config, force),
        Commands::ExportLeads { output } => cmd_export(&config, output.as_deref()),
        Commands::Score { input } => cmd_score(&config, &input).await,
        Commands::Consult { query } => cmd_consult(&config, &query).await,
        Commands::Stats => cmd_stats(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_marketplace(config: &AppConfig) -> Result<Marketplace, Box<dyn std::error::Error>> {
    let store = JsonStore::open(&config.data_dir)?;
    Ok(Marketplace::new(Arc::new(store)))
}

fn cmd_seed(config: &AppConfig, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open(&config.data_dir)?;
    let written = seed_all(&store, force)?;

    if written.is_empty() {
        eprintln!("Nothing to seed in {} (use --force to overwrite)", store.dir().display());
    } else {
        for key in &written {
            eprintln!("   seeded {}", key);
        }
        eprintln!("Seeded {} keys in {}", written.len(), store.dir().display());
    }
    Ok(())
}

fn cmd_export(config: &AppConfig, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let market = open_marketplace(config)?;
    let export = market.export_leads()?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&export.file_name));
    fs::write(&path, &export.csv)?;
    eprintln!("Exported leads to {}", path.display());
    Ok(())
}

async fn cmd_score(config: &AppConfig, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let draft: LeadDraft = serde_json::from_str(&content)?;
    draft.validate()?;

    let client = ScoringClient::new(config.scoring.clone());
    eprintln!("Scoring with {}", client.model());
    let analysis = client.score_lead(&draft).await;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

async fn cmd_consult(config: &AppConfig, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = ScoringClient::new(config.scoring.clone());
    println!("{}", client.consult(query).await);
    Ok(())
}

fn cmd_stats(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let market = open_marketplace(config)?;
    let overview = market.overview()?;
    let leads = market.list_leads()?;
    let qualified = leads
        .iter()
        .filter(|l| l.status == bantconfirm::LeadStatus::Qualified)
        .count();
    let unassigned = leads.iter().filter(|l| l.assigned_vendor_id.is_none()).count();

    println!("Data directory: {}", config.data_dir.display());
    println!("   Leads:      {} ({} qualified, {} unassigned)", overview.leads, qualified, unassigned);
    println!("   Vendors:    {}", overview.vendors);
    println!("   Products:   {}", overview.products);
    println!("   Categories: {}", market.list_categories()?.len());
    println!("   Blog posts: {}", market.list_blogs()?.len());
    Ok(())
}
