use anyhow::Result;
use log::info;
use structopt::StructOpt;

use rspops::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rspops",
    about = "Print the per-population report of a demonstration SNP."
)]
struct Opt {
    #[structopt(
        long,
        help = "Also add the EUR population, derived from the ALL table."
    )]
    with_eur: bool,
    #[structopt(short, long, help = "Log table construction to STDERR.")]
    verbose: bool,
}

fn setup_logger(verbose: bool) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    setup_logger(opt.verbose)?;

    let scores: Scores = (0.01, 0.001);
    let mut record = VariantRecord::new(
        "rs123456",
        scores.0,
        scores.1,
        vec![vec![1, 2], vec![3, 4], vec![5, 6]],
        "ALL",
    );

    if opt.with_eur {
        record.add_population("EUR", scores, &[10, 20, 100, 2000])?;
    }
    info!("rendering {} ({} populations)", record.id(), record.population_names().len());

    println!("{}", record);
    Ok(())
}
