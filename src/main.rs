//! OAdvisor - Command Line Interface
//!
//! This is the main entry point for the account planning tool.
//! Run with `--help` to see all available options.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oadvisor::{
    data::{load_catalog, Catalog},
    display::{display_energy_matrix, display_points, display_production, display_queue, number_beautify},
    models::{AccountSnapshot, GrowthFactor, OptimizerConfig, PlasmaBase},
    optimizer::{account_queue, energy_matrix},
    points::account_points,
    production::account_production,
    trade::to_mse,
};

/// Production the plasma queue is valued against.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlasmaBaseArg {
    /// Mine output only
    Mine,
    /// Full output including base income and the current bonus
    Total,
}

impl From<PlasmaBaseArg> for PlasmaBase {
    fn from(arg: PlasmaBaseArg) -> Self {
        match arg {
            PlasmaBaseArg::Mine => PlasmaBase::MineOutput,
            PlasmaBaseArg::Total => PlasmaBase::TotalOutput,
        }
    }
}

/// Command-line arguments for OAdvisor.
#[derive(Parser, Debug)]
#[command(name = "oadvisor")]
#[command(author, version, about = "Plan the next upgrades of an OGame account", long_about = None)]
struct Args {
    /// Account snapshot (JSON)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Directory with catalog CSV files (defaults to the built-in catalog)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Number of entries in the account queue
    #[arg(short, long, default_value = "20")]
    queue: usize,

    /// Number of entries kept per planet before merging
    #[arg(long, default_value = "5")]
    planet_limit: usize,

    /// Levels evaluated ahead of the current one
    #[arg(long, default_value = "5")]
    lookahead: u32,

    /// Cost growth used for the deuterium synthesizer lookahead
    #[arg(long, default_value = "1.5")]
    deuterium_growth: f64,

    /// Production the plasma bonus is valued against
    #[arg(long, value_enum, default_value = "mine")]
    plasma_base: PlasmaBaseArg,

    /// Show the points breakdown
    #[arg(long, default_value = "false")]
    points: bool,

    /// Show hourly and daily production
    #[arg(long, default_value = "false")]
    production: bool,

    /// Show the fusion reactor / energy technology matrix
    #[arg(long, default_value = "false")]
    energy_matrix: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = OptimizerConfig {
        lookahead: args.lookahead,
        deuterium_growth: GrowthFactor::new(args.deuterium_growth)?,
        plasma_base: args.plasma_base.into(),
        planet_queue_limit: args.planet_limit,
        account_queue_limit: args.queue,
    };

    let catalog = match &args.data_dir {
        Some(dir) => load_catalog(dir)?,
        None => Catalog::embedded()?,
    };
    info!(items = catalog.len(), "Catalog ready");

    let json = fs::read_to_string(&args.snapshot)?;
    let account: AccountSnapshot = serde_json::from_str(&json)?;

    println!("OAdvisor - OGame Account Planner");
    println!("================================================================");
    println!();
    println!("Account:");
    println!("  Planets:         {}", account.planets.len());
    println!("  Universe Speed:  {}x", account.speed);
    println!(
        "  Trade Ratio:     {}:{}:{}",
        account.trade.metal, account.trade.crystal, account.trade.deuterium
    );
    println!("  Lookahead:       {} levels", config.lookahead);

    if args.production {
        let production = account_production(&account)?;
        display_production(&production);
        println!(
            "{:<12} {:>16}",
            "MSE",
            number_beautify(to_mse(production, &account.trade)?)
        );
    }

    let queue = account_queue(&catalog, &account, &config)?;
    display_queue(&queue);

    if args.points {
        let report = account_points(&catalog, &account)?;
        display_points(&report);
    }

    if args.energy_matrix {
        let matrix = energy_matrix(&catalog, &account, None, None, &config)?;
        display_energy_matrix(&matrix);
    }

    Ok(())
}
