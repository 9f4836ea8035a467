use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use restyle::{
    apply_fixups_with,
    diff::{line_stats, render_unified_diff},
    ConfigLoader, FixupConfig, CONFIRMATION_MESSAGE,
};

/// Applies the dashboard UI style fixups in place.
///
/// Without arguments the built-in rules are applied to the built-in target.
#[derive(Parser, Debug)]
#[command(name = "restyle", version, about)]
struct Args {
    /// File to rewrite instead of the configured target
    #[arg(long)]
    target: Option<PathBuf>,

    /// Load target and rules from a .toml, .yaml or .json file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print the diff instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// Keep a timestamped copy of the original next to the target
    #[arg(long)]
    backup: bool,

    /// Fail without writing if any rule matches nothing
    #[arg(long)]
    strict: bool,

    /// Print the rule table and exit
    #[arg(long)]
    list_rules: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, conflicts_with = "list_rules")]
    dump_config: bool,

    /// Print the run report as JSON instead of the confirmation line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    restyle::init_logging(std::io::stderr().is_terminal())?;

    let mut config = match &args.config {
        Some(path) => ConfigLoader::with_path(path)
            .load()
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => FixupConfig::default(),
    };
    if let Some(target) = args.target {
        config.target = target;
    }
    config.backup |= args.backup;
    config.strict |= args.strict;

    if args.dump_config {
        print!("{}", config.to_toml().context("Failed to serialize config")?);
        return Ok(());
    }

    if args.list_rules {
        for (i, rule) in config.rules.iter().enumerate() {
            println!("{:>2}. {} [{}]", i + 1, rule.name, rule.kind);
        }
        return Ok(());
    }

    let rules = config.rule_set().context("Invalid rule set")?;
    let mut options = config.options();
    options.dry_run = args.dry_run;

    info!(
        "restyle v{}: {} rule(s) on {}",
        restyle::version(),
        rules.len(),
        config.target.display()
    );

    let report = apply_fixups_with(&config.target, &rules, &options)
        .with_context(|| format!("Failed to apply fixups to {}", config.target.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.dry_run {
        print!(
            "{}",
            render_unified_diff(&report.path, &report.before, &report.after)
        );
        let stats = line_stats(&report.before, &report.after);
        println!(
            "Dry run: {} replacement(s), {} line(s) removed, {} added",
            report.total_matches(),
            stats.removed,
            stats.added
        );
        return Ok(());
    }

    println!("{}", CONFIRMATION_MESSAGE);
    Ok(())
}
