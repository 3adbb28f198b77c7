//! Compile LPBs into DNFs and show the variable ranking.
//!
//! ```bash
//! cargo run --example lpb2dnf -- "5 3 3 2 1 8" --split --dot
//! echo "9 7 6 4 4 1 15" | cargo run --example lpb2dnf
//! ```

use std::io::BufRead;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use lpb_rs::lpb::Lpb;
use lpb_rs::setting::VariableSetting;
use lpb_rs::tree::TreeContext;
use lpb_rs::types::Coefficient;
use num_bigint::BigInt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// 64-bit integers
    Int,
    /// 64-bit floats
    Float,
    /// Arbitrary-precision integers
    Big,
}

#[derive(Parser)]
#[command(author, version, about = "Compile linear pseudo-Boolean constraints into DNFs")]
struct Cli {
    /// LPBs as "a0 a1 ... d" (read from stdin if none are given)
    lpbs: Vec<String>,

    /// Numeric kind of the weights
    #[arg(short, long, value_enum, default_value = "int")]
    kind: Kind,

    /// Split the root of the splitting tree once
    #[arg(long)]
    split: bool,

    /// Print the splitting tree in DOT format
    #[arg(long)]
    dot: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let lines: Vec<String> = if cli.lpbs.is_empty() {
        std::io::stdin().lock().lines().collect::<std::io::Result<_>>()?
    } else {
        cli.lpbs.clone()
    };

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        match cli.kind {
            Kind::Int => process::<i64>(line, &cli)?,
            Kind::Float => process::<f64>(line, &cli)?,
            Kind::Big => process::<BigInt>(line, &cli)?,
        }
    }

    Ok(())
}

fn process<T>(line: &str, cli: &Cli) -> Result<()>
where
    T: Coefficient + FromStr,
{
    let lpb: Lpb<T> = line.parse()?;
    println!("lpb = {}", lpb);

    let dnf = lpb.try_to_dnf()?;
    println!("dnf = {}", dnf);
    log::info!("{} clauses, {} distinct", dnf.len(), dnf.to_set().len());

    let setting = VariableSetting::with_variables(&dnf, lpb.len())?;
    for (rank, pattern) in setting.occurrences().iter().enumerate() {
        println!("  #{} {}", rank, pattern);
    }

    let mut ctx = TreeContext::new(lpb.len());
    let root = ctx.add_main(dnf)?;
    if cli.split && !ctx.node(root).patterns().is_empty() {
        let (low, high) = ctx.split(root)?;
        println!("lower = {}", ctx.node(low).dnf());
        println!("upper = {}", ctx.node(high).dnf());
    }
    if cli.dot {
        print!("{}", ctx.to_dot()?);
    }

    Ok(())
}
