//! Command-line driver emitting destination-table VHDL packages.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use trafficgen::{
    Banner, HotspotConfig, HotspotPattern, Package, PairCount, RemainderPolicy, RentConfig, RentPattern, VhdlPackage,
};

/// Define CLI arguments
#[derive(Parser, Debug, Clone)]
#[clap(name = "destgen", long_about = "Generate destination-table VHDL packages for the NoC testbench")]
struct Args {
    /// Output directory for the generated files
    #[clap(long, value_parser, default_value = "./build")]
    out_dir: PathBuf,

    /// Date recorded in the banner's `Last Changed` field (d/m/yyyy)
    #[clap(long, value_parser, default_value = CREATED)]
    date: String,

    #[clap(subcommand)]
    pattern: PatternArgs,
}

#[derive(Subcommand, Debug, Clone)]
enum PatternArgs {
    /// RENT locality pattern: per-source destination table
    Rent {
        #[clap(long, value_parser, default_value_t = 3)]
        radix: usize,
        #[clap(long, value_parser, default_value_t = 32768)]
        size: usize,
        #[clap(long, value_parser, default_value_t = 0.5)]
        exponent: f64,
        #[clap(long, value_enum, default_value_t)]
        pair_count: PairCountArg,
        #[clap(long, value_enum, default_value_t)]
        remainder: RemainderArg,
    },

    /// Hotspot pattern: one shared destination array
    Hotspot {
        #[clap(long, value_parser, default_value_t = 10)]
        radix: usize,
        #[clap(long, value_parser, default_value_t = 32768)]
        size: usize,
        #[clap(long, value_parser, default_value_t = 10)]
        hotspot_factor: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum PairCountArg {
    /// 2D square-root approximation of the same-distance pair count
    #[default]
    Approx,
    /// Exact enumeration of ordered pairs by Manhattan distance
    Exact,
}

impl From<PairCountArg> for PairCount {
    fn from(value: PairCountArg) -> Self {
        match value {
            PairCountArg::Approx => PairCount::SquareApprox,
            PairCountArg::Exact => PairCount::Exact3d,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum RemainderArg {
    /// Fill the truncation shortfall with consecutive node ids
    #[default]
    Consecutive,
    /// Hamilton's largest-remainder apportionment
    Hamilton,
}

impl From<RemainderArg> for RemainderPolicy {
    fn from(value: RemainderArg) -> Self {
        match value {
            RemainderArg::Consecutive => RemainderPolicy::ConsecutiveIds,
            RemainderArg::Hamilton => RemainderPolicy::LargestRemainder,
        }
    }
}

/// Creation date of the table format consumed by the testbench.
const CREATED: &str = "29/07/2020";

fn banner(file: &str, last_changed: &str) -> Banner {
    Banner {
        file: file.to_string(),
        created: CREATED.to_string(),
        last_changed: last_changed.to_string(),
        author: vec!["Mesh testbench generators".to_string()],
        notes: vec![
            String::new(),
            "Static destination table consumed by the traffic generators of the".to_string(),
            "mesh testbench. Generated file, do not edit.".to_string(),
            String::new(),
        ],
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let args = Args::parse();
    tracing::info!(?args, "user options");

    let mut package = Package::default();
    match args.pattern {
        PatternArgs::Rent { radix, size, exponent, pair_count, remainder } => {
            let config = RentConfig {
                radix,
                size,
                exponent,
                pair_count: pair_count.into(),
                remainder: remainder.into(),
            };
            let table = RentPattern::new(config).build().context("building RENT destination table")?;
            package.add(VhdlPackage::rent(&table, banner("destinations_rent_file.vhd", &args.date)));
        }
        PatternArgs::Hotspot { radix, size, hotspot_factor } => {
            let config = HotspotConfig::new(radix, size, hotspot_factor);
            let list = HotspotPattern::new(config).build().context("building hotspot destination array")?;
            package.add(VhdlPackage::hotspot(&list, banner("destinations_file.vhd", &args.date)));
        }
    }

    package.gen_vhdl(&args.out_dir).with_context(|| format!("writing packages to {}", args.out_dir.display()))?;
    Ok(())
}
