//! HighBasic CLI

use hb_eval::stdout_handler;
use hbc::commands::{parse_file, run_file, CommandError, RunOptions};

fn main() {
    hbc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => run_command(&args[2..], "Usage: hb run [--debug] <file.hb>"),
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: hb parse <file.hb>");
                std::process::exit(1);
            }
            parse_file(&args[2], &stdout_handler())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("HighBasic {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // Anything else is `hb [--debug] <file>`.
        _ => run_command(&args[1..], "Usage: hb [--debug] <file.hb>"),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_command(args: &[String], usage: &str) -> Result<(), CommandError> {
    let (options, path) = match RunOptions::parse(args) {
        Ok(parsed) => parsed,
        Err(flag) => {
            eprintln!("error: unknown option '{flag}'");
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };
    let Some(path) = path else {
        eprintln!("error: missing file path");
        eprintln!("{usage}");
        std::process::exit(1);
    };
    run_file(path, options, stdout_handler())
}

fn print_usage() {
    println!("HighBasic interpreter");
    println!();
    println!("Usage: hb [--debug] <file.hb>");
    println!("       hb <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.hb>        Run a HighBasic program");
    println!("  parse <file.hb>      Print the parsed statements without running");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --debug, -d          Print the parsed statements before running");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Interpreter tracing, e.g. RUST_LOG=hb_eval=debug");
    println!();
    println!("Examples:");
    println!("  hb hello.hb");
    println!("  hb run --debug hello.hb");
    println!("  hb parse hello.hb");
}
