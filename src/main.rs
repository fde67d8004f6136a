mod command_line_args;

use apriori::{Item, MiningReport, TransactionReader};
use command_line_args::{parse_args_or_exit, Arguments};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

fn print_report(report: &MiningReport) {
    for (size, count) in report.level_counts() {
        println!("Number of size-{} frequent patterns: {}", size, count);
    }
    println!(
        "Total number of frequent patterns with min_support = {}: {}",
        report.min_support,
        report.total()
    );
    for itemset in report.itemsets() {
        println!(
            "[{}] count={} support={}",
            Item::item_vec_to_string(&itemset.items),
            itemset.count,
            itemset.support
        );
    }
}

fn write_itemsets(report: &MiningReport, path: &str) -> Result<(), Box<dyn Error>> {
    let mut output = BufWriter::new(File::create(path)?);
    writeln!(output, "Itemset,Count,Support")?;
    for itemset in report.itemsets() {
        writeln!(
            output,
            "{},{},{}",
            Item::item_vec_to_string(&itemset.items),
            itemset.count,
            itemset.support
        )?;
    }
    output.flush()?;
    Ok(())
}

fn mine_apriori(args: &Arguments) -> Result<(), Box<dyn Error>> {
    let config = args.mining_config()?;

    info!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();
    let timer = Instant::now();
    let transactions = TransactionReader::open(&args.input_file_path)?
        .collect::<apriori::Result<Vec<Vec<u32>>>>()?;
    info!(
        "Loaded {} transactions in {} ms.",
        transactions.len(),
        timer.elapsed().as_millis()
    );

    let timer = Instant::now();
    let report = apriori::apriori(&transactions, &config)?;
    info!(
        "Apriori found {} frequent itemsets in {} ms.",
        report.total(),
        timer.elapsed().as_millis()
    );

    print_report(&report);

    if let Some(ref path) = args.output_itemsets_path {
        write_itemsets(&report, path)?;
        info!("Wrote frequent itemsets to {}", path);
    }

    info!("Total runtime: {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apriori=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
