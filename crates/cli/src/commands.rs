//! Clap command tree definition.

use clap::{value_parser, Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("gen-art")
        .about("Deterministic parameter-space sampler for generative art scripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("sample")
                .about("Sample a script's parameter space and render images")
                .arg(
                    Arg::new("SCRIPT")
                        .help("Script file with an embedded parameter-space declaration")
                        .required(true),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of images to generate")
                        .value_parser(value_parser!(u64))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output directory")
                        .default_value("."),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .short('s')
                        .help("Base seed (default: drawn from OS entropy and reported)")
                        .value_parser(value_parser!(u64)),
                ),
        )
}
