//! Pocket Pet - Entry Point
//!
//! Builds one pet from command-line options, applies the scripted care
//! actions in order and prints the pet's status after each one.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pocket_pet::command::{CareCommand, CommandExecutor};
use pocket_pet::core::config::{set_config, CareConfig};
use pocket_pet::core::error::Result;
use pocket_pet::entity::{Personality, Pet, Status};

/// Pocket Pet - look after a virtual pet from the command line
#[derive(Parser, Debug)]
#[command(name = "pocket_pet")]
#[command(about = "Feed and play with a virtual pet")]
struct Args {
    /// Pet name
    #[arg(long, default_value = "Pet")]
    name: String,

    /// Personality: balanced, energetic, chill, curious or grumpy
    #[arg(long, default_value = "balanced")]
    personality: String,

    /// Reject unknown personalities instead of falling back to balanced
    #[arg(long)]
    strict: bool,

    /// Starting hunger (clamped to the configured bounds)
    #[arg(long)]
    hunger: Option<f64>,

    /// Starting happiness (clamped to the configured bounds)
    #[arg(long)]
    happiness: Option<f64>,

    /// TOML file overriding care constants
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Action to apply: feed, feed:<amount>, play, play:<duration>, status
    #[arg(long = "action", short = 'a', allow_hyphen_values = true)]
    actions: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pocket_pet=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CareConfig::load(path)?,
        None => CareConfig::default(),
    };
    if set_config(config).is_err() {
        tracing::warn!("Care config already set, keeping existing values");
    }
    let config = pocket_pet::core::config::config();

    let personality = if args.strict {
        args.personality.parse::<Personality>()?
    } else {
        Personality::from_name(&args.personality)
    };

    let commands = args
        .actions
        .iter()
        .map(|a| a.parse::<CareCommand>())
        .collect::<Result<Vec<_>>>()?;

    let mut pet = Pet::with_config(
        args.name,
        personality,
        args.hunger.unwrap_or(config.initial_hunger),
        args.happiness.unwrap_or(config.initial_happiness),
        config,
    );
    tracing::info!(pet = %pet, "Pet created");

    for command in &commands {
        let status = CommandExecutor::execute(&mut pet, *command);
        tracing::debug!(?command, "Applied command");
        print_status(&pet, &status, args.format)?;
    }

    if commands.is_empty() {
        print_status(&pet, &pet.status(), args.format)?;
    }

    Ok(())
}

/// Text output is the pet's `Display` form; JSON output is the status record
fn print_status(pet: &Pet, status: &Status, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(status)?),
        OutputFormat::Text => println!("{}", pet),
    }
    Ok(())
}
