//! gen-art CLI — sample a script's parameter space into reproducible PNGs.
//!
//! ```text
//! gen-art sample SCRIPT [--count|-n INT] [--output|-o PATH] [--seed|-s INT]
//! ```
//!
//! Per-image progress and the final summary go to stdout; the resolved
//! base seed goes to stderr when it was not supplied explicitly, so that
//! every run can be reproduced after the fact.

mod commands;

use std::fs;
use std::path::PathBuf;
use std::process;

use genart_core::Error;
use genart_engine::{run_batch, BatchOptions, BaseSeed, RoutineRegistry, Script};

use commands::build_cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let exit_code = match matches.subcommand() {
        Some(("sample", sub)) => run_sample(sub),
        _ => unreachable!("subcommand required"),
    };
    process::exit(exit_code);
}

fn run_sample(matches: &clap::ArgMatches) -> i32 {
    let script_path = matches.get_one::<String>("SCRIPT").expect("required arg");
    let count = *matches.get_one::<u64>("count").expect("defaulted");
    let output_dir = PathBuf::from(matches.get_one::<String>("output").expect("defaulted"));
    let explicit_seed = matches.get_one::<u64>("seed").copied();

    match sample(script_path, count, output_dir, explicit_seed) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {}", render_chain(&e));
            1
        }
    }
}

fn sample(
    script_path: &str,
    count: u64,
    output_dir: PathBuf,
    explicit_seed: Option<u64>,
) -> Result<(), Error> {
    let script = Script::load(script_path)?;
    let registry = RoutineRegistry::with_builtins();

    // Resolve up front so the operator sees the seed before rendering
    // starts, not after a long batch.
    let base_seed = BaseSeed::resolve(explicit_seed);
    if !base_seed.is_explicit() {
        eprintln!("Base seed: {}", base_seed.value());
    }

    fs::create_dir_all(&output_dir)?;

    let options = BatchOptions {
        count,
        output_dir: output_dir.clone(),
    };
    let summary = run_batch(&script, &registry, &options, base_seed, |index, path| {
        println!("[{}/{}] {}", index + 1, count, path.display());
    })?;

    println!(
        "Generated {} image(s) in {}",
        summary.written.len(),
        output_dir.display()
    );
    Ok(())
}

/// Format an error with its source chain, innermost last.
fn render_chain(err: &Error) -> String {
    let mut out = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        out.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    out
}
