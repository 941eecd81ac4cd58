use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use household_gift_matcher::{has_complete_assignment, parse_seed, Assignment, MatchConfig};

#[derive(Parser, Debug)]
#[command(name = "household_gift_matcher")]
#[command(about = "Draws gift pairings where nobody gives within their own household", long_about = None)]
struct Args {
    /// Random seed (defaults to the config seed, or 2020)
    #[arg(value_parser = parse_seed)]
    seed: Option<u64>,

    /// JSON file with {"households": [[...], ...], "seed": N}
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Retry with later seeds until everyone gives and receives
    #[arg(long)]
    complete: bool,

    /// Retry limit for --complete
    #[arg(long, default_value_t = 100)]
    attempts: usize,

    /// Print the pairings as JSON
    #[arg(long)]
    json: bool,
}

fn print_assignment(assignment: &Assignment<String>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(assignment)?);
    } else {
        print!("{}", assignment);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let matcher = config.matcher().context("invalid households")?;
    info!(
        "{} people in {} households, seed {}",
        matcher.households().len(),
        matcher.households().num_households(),
        matcher.seed()
    );

    if args.complete {
        let outcome = matcher.assign_until_complete(args.attempts)?;
        if outcome.seed != matcher.seed() {
            info!("complete after {} attempts, seed {}", outcome.attempts, outcome.seed);
        }
        return print_assignment(&outcome.assignment, args.json);
    }

    let assignment = matcher.assign();
    print_assignment(&assignment, args.json)?;
    let coverage = assignment.coverage(matcher.households());
    if !coverage.is_complete() {
        warn!(
            "incomplete pairing: missing givers {:?}, missing receivers {:?}",
            coverage.missing_givers, coverage.missing_receivers
        );
        if has_complete_assignment(matcher.households()) {
            warn!("a complete pairing exists; try another seed or --complete");
        } else {
            warn!("no complete pairing exists for these households");
        }
    }
    Ok(())
}
