/**
 * object-shorthand
 *
 * Rewrites object literal properties in place.
 */
use clap::Parser;
use object_shorthand_cli::cli::Args;
use object_shorthand_cli::runner::run_cli;
use object_shorthand_cli::tracing_config::init_tracing;
use std::process;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run_cli(args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}
