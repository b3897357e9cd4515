use std::{fs, sync::Once};

use clap::Parser;
use symcalc::interpreter::evaluator::core::{Context, ResolveMode};

/// symcalc evaluates calculator programs: arithmetic with units, tuples, free
/// symbols and symbolic derivatives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells symcalc to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Treats unbound symbols as errors instead of free symbols.
    #[arg(short, long)]
    strict: bool,

    contents: String,
}

static TRACING_INIT: Once = Once::new();

/// Installs a tracing subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                                        .with_writer(std::io::stderr))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mode = if args.strict { ResolveMode::Strict } else { ResolveMode::Free };
    match Context::with_mode(mode).evaluate(&script) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
