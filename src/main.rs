use std::{fs, io, process::ExitCode};

use amython::{Interpreter, util::snippet};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// amython runs AMython programs: `PROGRAM name { ... }`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells amython to read the program from a file instead of taking it
    /// inline.
    #[arg(short, long)]
    file: bool,

    /// Raises the log level written to stderr (-v debug, -vv trace). Ignored
    /// when `RUST_LOG` is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(match verbose {
                                                          0 => "warn",
                                                          1 => "amython=debug",
                                                          _ => "amython=trace",
                                                      })
                                                  });

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut interpreter = Interpreter::new(io::stdout().lock());

    if let Err(e) = interpreter.interpret(&script) {
        if let Some(position) = e.position() {
            eprintln!("{}", snippet::render(&script, position));
        }
        eprintln!("{}: {e}", e.kind());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
