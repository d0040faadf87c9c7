use std::fs;

use clap::Parser;
use complexa::{Scope, resolve, run_script};
use tracing_subscriber::EnvFilter;

/// complexa evaluates complex-number expressions and solves one-variable
/// equations, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells complexa to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Resolves an equation before the script runs, e.g. `--bind "y = 2i"`.
    /// May be given several times; later bindings can use earlier ones.
    #[arg(short, long = "bind", value_name = "EQUATION")]
    bindings: Vec<String>,

    /// Logs every resolution and isolation step to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "complexa=trace" } else { "complexa=warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut scope = Scope::new();
    for binding in &args.bindings {
        if let Err(e) = resolve(binding, &mut scope) {
            eprintln!("Invalid binding '{binding}': {e}");
            std::process::exit(1);
        }
    }

    match run_script(&script, &mut scope) {
        Ok(resolutions) => {
            for resolution in resolutions {
                println!("{resolution}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
