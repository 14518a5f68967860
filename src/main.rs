use clap::{Parser, ValueEnum};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use netchaos::config_loader;

/// Output format for validated plans
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

/// Validate a network fault plan and print its normalized form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the fault plan YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Format used to print the validated plan
    #[arg(short, long, value_enum, default_value = "yaml")]
    format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let plans = config_loader::load_plans(&args.config)?;

    for plan in &plans {
        let schedule = if plan.is_one_shot() {
            "once".to_string()
        } else {
            format!("every {}", humantime::format_duration(plan.interval))
        };
        info!(
            "Fault '{}': {} for {} {}, {} port(s), {} target(s)",
            plan.name,
            plan.action,
            humantime::format_duration(plan.duration),
            schedule,
            plan.ports.len(),
            plan.targets.len()
        );
    }

    let output = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&plans)?,
        OutputFormat::Json => serde_json::to_string_pretty(&plans)?,
    };
    println!("{}", output);

    info!("Fault plan {:?} is valid", args.config);
    Ok(())
}
