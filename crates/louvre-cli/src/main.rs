mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "louvre",
    version,
    about = "Selection tool for performance louvres: rain-defense classification and product recommendation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a project's required rain defense class (A-D)
    Classify {
        /// Path to a project profile JSON file
        profile: PathBuf,

        /// Path to a weather snapshot JSON file
        #[arg(short, long, value_name = "FILE", conflicts_with = "location")]
        weather: Option<PathBuf>,

        /// Resolve this location against the weather service instead
        #[arg(short, long)]
        location: Option<String>,

        /// Weather service base URL (overrides LOUVRE_WEATHER_URL)
        #[arg(long, value_name = "URL")]
        api: Option<String>,

        #[command(flatten)]
        overrides: commands::ProfileOverrides,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Recommend louvre models for a project (classification included)
    Recommend {
        /// Path to a project profile JSON file
        profile: PathBuf,

        /// Path to a weather snapshot JSON file
        #[arg(short, long, value_name = "FILE", conflicts_with = "location")]
        weather: Option<PathBuf>,

        /// Resolve this location against the weather service instead
        #[arg(short, long)]
        location: Option<String>,

        /// Weather service base URL (overrides LOUVRE_WEATHER_URL)
        #[arg(long, value_name = "URL")]
        api: Option<String>,

        /// Custom pattern set JSON file (default: the builtin "standard" set)
        #[arg(short, long = "patterns", value_name = "FILE")]
        patterns: Option<PathBuf>,

        /// Custom catalog CSV file (default: the builtin model catalog)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        overrides: commands::ProfileOverrides,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the decision trace
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect pattern sets
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
    /// Talk to the weather/geocoding service
    Weather {
        #[command(subcommand)]
        action: WeatherAction,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List predefined pattern sets
    List,
    /// Explain a pattern set in plain language
    Explain {
        /// Preset name (e.g., "standard")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom pattern set file
    Validate {
        /// Path to JSON pattern set file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum WeatherAction {
    /// Resolve a location and fetch its climate statistics
    Fetch {
        /// Free-text location, e.g. "Stockholm, Sweden"
        location: String,

        /// Weather service base URL (overrides LOUVRE_WEATHER_URL)
        #[arg(long, value_name = "URL")]
        api: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Check that a location geocodes, without fetching climate data
    Validate {
        location: String,

        #[arg(long, value_name = "URL")]
        api: Option<String>,
    },
    /// Probe the weather service's liveness
    Health {
        #[arg(long, value_name = "URL")]
        api: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            profile,
            weather,
            location,
            api,
            overrides,
            output,
        } => commands::classify::run(profile, weather, location, api, &overrides, &output),
        Commands::Recommend {
            profile,
            weather,
            location,
            api,
            patterns,
            catalog,
            overrides,
            output,
            verbose,
        } => commands::recommend::run(
            profile, weather, location, api, patterns, catalog, &overrides, &output, verbose,
        ),
        Commands::Patterns { action } => match action {
            PatternsAction::List => commands::patterns::list(),
            PatternsAction::Explain { preset } => commands::patterns::explain(&preset),
            PatternsAction::Schema => commands::patterns::schema(),
            PatternsAction::Validate { file } => commands::patterns::validate(&file),
        },
        Commands::Weather { action } => match action {
            WeatherAction::Fetch {
                location,
                api,
                output,
            } => commands::weather::fetch(&location, api, &output),
            WeatherAction::Validate { location, api } => {
                commands::weather::validate(&location, api)
            }
            WeatherAction::Health { api } => commands::weather::health(api),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
