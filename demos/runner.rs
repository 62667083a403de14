use std::env;
use std::process;

use lookup_rs::{BenchConfig, Corpus, Error, TimingRecord};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    // simple command line interface: a YAML config, or a word list with
    // the default settings
    let args: Vec<_> = env::args().collect();
    assert!(
        args.len() == 2,
        "usage: runner <word-list | config.yaml>"
    );
    let arg = &args[1];
    let cfg = if arg.ends_with(".yaml") || arg.ends_with(".yml") {
        BenchConfig::from_yaml_file(arg)?
    } else {
        BenchConfig::with_corpus(arg)
    };

    let corpus = Corpus::from_file(&cfg.corpus_path)?;
    let records = lookup_rs::run_benchmark(&cfg, corpus)?;
    print_table(&records);
    Ok(())
}

fn print_table(records: &[TimingRecord]) {
    println!(
        "{:<8} {:>12} {:>8}  {}",
        "Method", "Time(ms)", "Items", "Query"
    );
    for record in records {
        println!(
            "{:<8} {:>12.4} {:>8}  {}",
            record.method, record.elapsed_ms, record.match_count, record.query
        );
    }
}
