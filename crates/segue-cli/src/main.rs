use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "segue", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the song catalog CSV (overrides SEGUE_CATALOG_PATH and the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend songs similar to a catalog song
    ///
    /// Loads the catalog, builds the similarity index (audio feature
    /// vectors plus a TF-IDF model fitted on each song's genre/tag
    /// text), and prints the closest matches to the named song.
    ///
    /// Each result comes with a reason: songs matched mainly on audio
    /// features say so, and songs matched on genre/tags list the
    /// shared terms. Songs with a preview URL in the catalog print it
    /// alongside.
    ///
    /// The --weight flag blends the two similarity axes: 1.0 ranks by
    /// audio features alone, 0.0 by genre/tag text alone. Values
    /// outside that range are clamped.
    Recommend {
        /// Exact name of the song to start from
        song: String,

        /// Blend weight: 1.0 = audio only, 0.0 = genre/tags only
        #[arg(long)]
        weight: Option<f64>,

        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Show catalog statistics
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Create the config file with defaults if it doesn't exist
    Init,
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Show example configuration
    Example,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            song,
            weight,
            limit,
            json,
        } => {
            commands::run_recommend(cli.catalog, &song, weight, limit, json)?;
        }
        Commands::Status => {
            commands::show_status(cli.catalog)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::init_config()?,
            ConfigAction::Show => commands::show_config()?,
            ConfigAction::Path => commands::show_path()?,
            ConfigAction::Example => commands::show_example()?,
        },
    }

    Ok(())
}
