//! CLI frontend for the combatsim character generator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cs_creation::CreationConfig;
use cs_creation::config::DEFAULT_MAX_RETRIES;

#[derive(Parser)]
#[command(
    name = "combatsim",
    about = "combatsim: roll up characters for a tabletop combat game",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible stat rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Invalid answers allowed per prompt (0 = keep asking forever)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Print the finished character as JSON instead of a sheet
    #[arg(long, global = true)]
    json: bool,

    /// Log rolls and assignments to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the New/Load/Quit menu (default)
    Play,

    /// Create a new character without the menu
    New,

    /// Roll one pool of ability scores and print it
    Roll,
}

impl Cli {
    fn creation_config(&self) -> CreationConfig {
        let mut config = CreationConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.max_retries == 0 {
            config.unbounded_retries()
        } else {
            config.with_max_retries(self.max_retries)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.creation_config();
    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(&config, cli.json),
        Commands::New => commands::new::run(&config, cli.json),
        Commands::Roll => commands::roll::run(cli.seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
