use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pointlog", version, about = "Daily points ledger with a weekly heatmap")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record or inspect daily points
    Points {
        #[command(subcommand)]
        action: commands::points::PointsAction,
    },
    /// Render the weekly heatmap
    Week(commands::week::WeekArgs),
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Ledger integrity check
    Doctor,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Points { action } => commands::points::run(action),
        Commands::Week(args) => commands::week::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Doctor => commands::doctor::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
