//! CLI command definitions and handlers

mod display;
mod menu;
mod predict;
mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

use progression::config::{AppConfig, ENV_HOST, ENV_PORT, ENV_TOLERANCE};
use progression::SequencePredictor;

/// Parse and validate a difference tolerance (finite, >= 0)
fn parse_tolerance(s: &str) -> Result<f64, String> {
    let t: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !t.is_finite() || t < 0.0 {
        Err("tolerance must be a finite number >= 0".to_string())
    } else {
        Ok(t)
    }
}

/// progression - predict the next term of an arithmetic sequence
#[derive(Parser, Debug)]
#[command(name = "progression")]
#[command(
    version,
    about = "Predict the next term of an arithmetic sequence, from a menu, the command line, or HTTP",
    after_help = "\
Examples:
  progression                          Interactive menu
  progression predict 3,6,9,12         Prints 15
  progression validate 1,2,4,8         Not arithmetic, exits 1
  progression test                     Run the built-in tests
  progression serve --port 8080        HTTP API on 127.0.0.1:8080"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Accept differences within this absolute tolerance (default: exact)
    #[arg(long, global = true, value_parser = parse_tolerance)]
    pub tolerance: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default when no command is given)
    Menu,

    /// Predict the next number of a sequence
    #[command(after_help = "\
Examples:
  progression predict 3,6,9,12
  progression predict 10 7 4 1
  progression predict --json -- -5,-3,-1
  progression predict demo")]
    Predict {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Comma-separated numbers, or `demo`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Check whether a sequence is arithmetic and report its difference
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Comma-separated numbers, or `demo`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Run the built-in tests
    Test {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API
    Serve {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, env = ENV_HOST)]
        host: Option<String>,

        /// Bind port (default: 3000)
        #[arg(long, env = ENV_PORT)]
        port: Option<u16>,
    },

    /// Manage configuration (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create the user config file with example settings
    Init,
    /// Show the effective config and its sources
    Show,
}

/// Load config and build the predictor; CLI `--tolerance` wins over config
fn setup(tolerance: Option<f64>) -> (AppConfig, SequencePredictor) {
    let config = AppConfig::load_or_default();
    let predictor = SequencePredictor::with_tolerance(tolerance.unwrap_or(config.tolerance()));
    (config, predictor)
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let (_, predictor) = setup(cli.tolerance);
            let mut menu = menu::Menu::new(io::stdin().lock(), io::stdout().lock(), predictor);
            menu.run()
        }

        Commands::Predict { json, numbers } => {
            let (_, mut predictor) = setup(cli.tolerance);
            predict::predict(&mut predictor, &numbers, json)
        }

        Commands::Validate { json, numbers } => {
            let (_, predictor) = setup(cli.tolerance);
            predict::validate(&predictor, &numbers, json)
        }

        Commands::Test { json } => predict::test(json),

        Commands::Serve { host, port } => {
            let (config, predictor) = setup(cli.tolerance);
            let host = host.unwrap_or_else(|| config.host().to_string());
            let port = port.unwrap_or_else(|| config.port());
            serve::run(&host, port, predictor)
        }

        Commands::Config { action } => run_config_action(&action),

        Commands::Version => {
            println!("progression {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_config_action(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = AppConfig::init_user_config()?;
            println!("✅ Config initialized at: {}", path.display());
            println!("\nOr set via environment:");
            println!("  export {}=\"0.0.0.0\"", ENV_HOST);
            println!("  export {}=\"8080\"", ENV_PORT);
            println!("  export {}=\"1e-9\"", ENV_TOLERANCE);
            Ok(())
        }
        ConfigAction::Show => show_config(),
    }
}

fn show_config() -> Result<()> {
    println!("📁 Config paths:");
    if let Some(user_path) = AppConfig::user_config_path() {
        let status = if user_path.exists() { "✓" } else { "(not found)" };
        println!("  User: {} {}", user_path.display(), status);
    }

    // Unlike other commands, a broken config is an error here
    let config = AppConfig::load()?;
    println!();
    println!("🌐 Server:    {}:{}", config.host(), config.port());
    let tolerance = config.tolerance();
    if tolerance == 0.0 {
        println!("🔢 Tolerance: exact");
    } else {
        println!("🔢 Tolerance: {}", tolerance);
    }
    Ok(())
}
