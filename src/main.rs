use anyhow::Result;
use clap::Parser;
use safesubscripts::query::Query;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(log::LevelFilter::Off);
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!(
        "Running {} queries over {} elements",
        args.queries.len(),
        args.elements.len()
    );

    let mut elements = args.elements;
    let mut absent = 0;
    for query in &args.queries {
        let outcome = query.apply(&mut elements);
        if outcome.is_absent() {
            absent += 1;
        }
        println!("{} => {}", query, outcome);
    }
    println!("elements => [{}]", elements.join(", "));

    if args.strict && absent > 0 {
        anyhow::bail!(
            "{} of {} queries were out of bounds",
            absent,
            args.queries.len()
        );
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// Elements of the sequence
    #[clap(value_parser)]
    elements: Vec<String>,

    /// Query to run, in order: `2`, `1..3`, `0..=2`, `1=99` or `1=`
    #[clap(short, long = "query", value_parser)]
    queries: Vec<Query>,

    /// Exit with an error if any query was out of bounds
    #[clap(long)]
    strict: bool,

    /// Level of verbosity (spamming this increases verbosity)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
