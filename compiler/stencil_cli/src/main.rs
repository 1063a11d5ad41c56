//! Stencil CLI
//!
//! Prints the items of a template scan, one per line.

use stencil_cli::{init_tracing, run_lex};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match run_lex(&args[2..]) {
            Ok(true) => {}
            // The error item has already been printed.
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("error: {e}");
                if e.is_usage() {
                    eprintln!();
                    print_lex_usage();
                }
                std::process::exit(2);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stencil {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Stencil template lexer");
    println!();
    println!("Usage: stencil <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <text>           Lex template text and print its items");
    println!("  lex --file <path>    Lex a file (use - for stdin)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG=stencil_lexer=trace to follow the scanner state by state.");
}

fn print_lex_usage() {
    eprintln!("Usage: stencil lex [options] <text>");
    eprintln!("       stencil lex [options] --file <path>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --name=<label>       Scanner name (default: number lexer)");
    eprintln!("  --spans              Print byte span and kind for each item");
    eprintln!("  --width=<n>          Characters shown per item (default: 10)");
    eprintln!("  --show-eof           Also print the end-of-input item");
    eprintln!("  --no-report          Skip the source report on scan errors");
    eprintln!("  --color=<mode>       Report colors: auto, always, never");
    eprintln!("  --                   Treat the next argument as text");
}
