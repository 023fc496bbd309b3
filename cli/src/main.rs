//! `eurovision`: score a contest scenario from the command line.

mod config;
mod output;
mod scenario;

use anyhow::Context;
use clap::Parser;
use eurovision_types::AudiencePercent;
use eurovision_utils::LogFormat;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "eurovision", version, about = "Song contest scoring engine")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "EUROVISION_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "EUROVISION_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "EUROVISION_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct ScenarioArgs {
    /// Scenario file (TOML) with states, judges, votes and operations.
    #[arg(long, short)]
    scenario: PathBuf,

    /// Print JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Final ranking blending audience votes and judges.
    Contest {
        #[command(flatten)]
        args: ScenarioArgs,

        /// Audience share of the final score, 0-100.
        #[arg(long, short = 'p', env = "EUROVISION_AUDIENCE_PERCENT", allow_hyphen_values = true)]
        audience_percent: Option<i64>,
    },
    /// Ranking by audience votes alone.
    Audience {
        #[command(flatten)]
        args: ScenarioArgs,
    },
    /// Pairs of states that are each other's favourite.
    Friendly {
        #[command(flatten)]
        args: ScenarioArgs,
    },
    /// Run the scenario's scripted operations and print each query result.
    Script {
        #[command(flatten)]
        args: ScenarioArgs,
    },
    /// Write a default configuration file.
    InitConfig {
        /// Where to write it.
        #[arg(long, default_value = "eurovision.toml")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        log_format: cli.log_format.unwrap_or(file_config.log_format),
        log_level: cli.log_level.clone().unwrap_or(file_config.log_level.clone()),
        ..file_config
    };

    eurovision_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Contest {
            args,
            audience_percent,
        } => {
            let raw = audience_percent.unwrap_or(config.audience_percent);
            let percent = AudiencePercent::new(raw).context("invalid --audience-percent")?;
            let (contest, _) = Scenario::from_toml_file(&args.scenario)?.build()?;
            let standings = contest.contest_standings(percent)?;
            if args.json {
                println!(
                    "{}",
                    output::standings_json("contest", Some(raw), &standings)?
                );
            } else {
                print!("{}", output::standings_table(&standings));
            }
        }
        Command::Audience { args } => {
            let (contest, _) = Scenario::from_toml_file(&args.scenario)?.build()?;
            let standings = contest.audience_standings()?;
            if args.json {
                println!("{}", output::standings_json("audience", None, &standings)?);
            } else {
                print!("{}", output::standings_table(&standings));
            }
        }
        Command::Friendly { args } => {
            let (contest, _) = Scenario::from_toml_file(&args.scenario)?.build()?;
            let pairs = contest.run_friendly_states()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else {
                print!("{}", output::lines(&pairs));
            }
        }
        Command::Script { args } => {
            let (_, results) = Scenario::from_toml_file(&args.scenario)?.build()?;
            let rendered = output::script_results(&results, args.json)?;
            if args.json {
                println!("{rendered}");
            } else {
                print!("{rendered}");
            }
        }
        Command::InitConfig { path } => {
            CliConfig::write_default(&path)?;
            println!("Created config at {}", path.display());
        }
    }

    Ok(())
}
