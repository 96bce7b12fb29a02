use std::{
    fs,
    path::PathBuf,
    process::ExitCode,
    time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;
use voidlang::{
    interpreter::evaluator::io::{StdConsole, paint_error},
    run_script, strip_after_end_marker,
};

/// Void is a small imperative scripting language; this driver runs a
/// single `.void` script end-to-end.
#[derive(Parser, Debug)]
#[command(name = "void", version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Path to the `.void` script to execute.
    script: PathBuf,

    /// Print version information.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.script.extension().and_then(|e| e.to_str()) != Some("void") {
        eprintln!("{}",
                  paint_error(&format!("'{}' is not a .void script.", args.script.display())));
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(&args.script) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("{}",
                      paint_error(&format!("Failed to read '{}'. Perhaps this file does not exist?",
                                           args.script.display())));
            return ExitCode::FAILURE;
        },
    };
    let source = strip_after_end_marker(&source);

    let mut console = StdConsole;
    if let Err(e) = run_script(source, &mut console, entropy_seed()) {
        eprintln!("{}", paint_error(&e.to_string()));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Seeds the interpreter's random source from the wall clock. Tests that
/// need reproducibility go through the library entry with a fixed seed.
fn entropy_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
                     .map_or(0x9E37_79B9_7F4A_7C15, |d| u64::try_from(d.as_nanos() & u128::from(u64::MAX)).unwrap_or(u64::MAX))
}
