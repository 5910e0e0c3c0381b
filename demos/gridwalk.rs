//! Run the grid search strategies on a scenario and print the results.
//!
//! Run: cargo run --bin gridwalk -- [astar|bfs|dfs|ucs]... [--config FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use gridwalk_crossterm::TermPrinter;
use gridwalk_demos::scenario::DEFAULT_ENERGY;
use gridwalk_demos::{RunReport, Scenario, ScenarioConfig, ScenarioError, build_scenario, logger};
use gridwalk_paths::Strategy;
use gridwalk_paths::check::energy_profile;

#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(about = "Energy-aware path search on a 2D grid", long_about = None)]
struct Cli {
    /// Strategies to run (astar, bfs, dfs, ucs); all of them when omitted
    strategies: Vec<Strategy>,

    /// Load the scenario from a JSON file
    #[arg(short, long, conflicts_with = "random")]
    config: Option<PathBuf>,

    /// Generate a random scenario from this seed
    #[arg(short, long)]
    random: Option<u64>,

    /// Rows of a random scenario
    #[arg(long, default_value_t = 10, requires = "random")]
    rows: i32,

    /// Columns of a random scenario
    #[arg(long, default_value_t = 10, requires = "random")]
    cols: i32,

    /// Override the energy budget
    #[arg(short, long)]
    energy: Option<u32>,

    /// Also print the cost matrix and draw paths with weights
    #[arg(short, long)]
    weights: bool,

    /// Print one JSON report per strategy instead of drawing grids
    #[arg(long)]
    json: bool,

    /// Print the resolved scenario as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(cli: &Cli) -> Result<ScenarioConfig, ScenarioError> {
    let mut cfg = match (&cli.config, cli.random) {
        (Some(path), _) => ScenarioConfig::from_json_file(path)?,
        (None, Some(seed)) => ScenarioConfig::random(cli.rows, cli.cols, DEFAULT_ENERGY, seed),
        (None, None) => ScenarioConfig::default(),
    };
    if let Some(energy) = cli.energy {
        cfg.energy = energy;
    }
    Ok(cfg)
}

fn print_report<W: Write>(
    out: &mut W,
    printer: &TermPrinter,
    scenario: &Scenario,
    report: &RunReport,
    weights: bool,
) -> io::Result<()> {
    writeln!(out, "== {} ==", report.strategy)?;
    printer.print_verdict(out, report.found)?;
    if !report.found {
        writeln!(out, "expanded {} states", report.expanded)?;
        return Ok(());
    }
    printer.print_grid(out, &scenario.grid, Some(report.path.as_slice()), weights)?;
    writeln!(
        out,
        "{} steps, expanded {} states",
        report.steps(),
        report.expanded
    )?;
    if report.strategy.uses_energy() {
        if let Some(profile) = energy_profile(&scenario.grid, &report.path, scenario.energy) {
            let profile: Vec<String> = profile.iter().map(u32::to_string).collect();
            writeln!(out, "energy: {}", profile.join(" "))?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_config(cli)?;
    if cli.dump_config {
        println!("{}", cfg.to_json()?);
        return Ok(());
    }
    let scenario = build_scenario(&cfg)?;
    let strategies = if cli.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        cli.strategies.clone()
    };

    let mut out = io::stdout().lock();
    let printer = TermPrinter::new();
    if !cli.json {
        printer.print_grid(&mut out, &scenario.grid, None, false)?;
        if cli.weights {
            writeln!(out)?;
            printer.print_grid(&mut out, &scenario.grid, None, true)?;
        }
    }
    for strategy in strategies {
        let report = scenario.run(strategy)?;
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out)?;
            print_report(&mut out, &printer, &scenario, &report, cli.weights)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
