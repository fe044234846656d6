//! Shapec CLI
//!
//! Compile a pattern, or match one against a value written in literal syntax.

use shapec::commands;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Usage: `RUST_LOG=shape_match=debug shapec check "[x, *]"`
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "check" => {
            if args.len() != 3 {
                eprintln!("Usage: shapec check <pattern>");
                std::process::exit(1);
            }
            commands::check(&args[2])
        }
        "test" => {
            if args.len() != 4 {
                eprintln!("Usage: shapec test <pattern> <value>");
                std::process::exit(1);
            }
            commands::test(&args[2], &args[3])
        }
        "extract" => {
            if args.len() != 4 {
                eprintln!("Usage: shapec extract <pattern> <value>");
                std::process::exit(1);
            }
            commands::extract(&args[2], &args[3])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(rendered) => {
            eprint!("{rendered}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Shapec - structural pattern matching");
    println!();
    println!("Usage: shapec <command> [args]");
    println!();
    println!("Commands:");
    println!("  check <pattern>            Compile a pattern and print its matcher tree");
    println!("  test <pattern> <value>     Print whether the value matches");
    println!("  extract <pattern> <value>  Print the captured bindings");
    println!();
    println!("Values use pattern literal syntax: [1, \"two\", :three, Point(4, 5)]");
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to trace compilation.");
}
