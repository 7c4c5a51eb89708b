//! Numbers toolchain CLI
//!
//! Compiles evaluator programs and canonicalizes solver output.

use numbersc::commands::{
    canon_solutions, compile_programs, compile_usage, diff_solutions, disasm_file,
    parse_canon_options, parse_compile_options, parse_diff_options, parse_disasm_options,
};
use numbersc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let rest = &args[2..];

    let result = match command.as_str() {
        "compile" => {
            if rest.is_empty() {
                eprint!("{}", compile_usage());
                std::process::exit(1);
            }
            parse_compile_options(rest).and_then(|options| {
                let path = compile_programs(&options)?;
                println!("wrote {}", path.display());
                Ok(())
            })
        }
        "canon" => parse_canon_options(rest).and_then(|options| canon_solutions(&options)),
        "diff" => {
            if rest.len() != 2 {
                eprintln!("Usage: numbers diff <left> <right>");
                std::process::exit(1);
            }
            parse_diff_options(rest).and_then(|options| {
                if diff_solutions(&options)? {
                    Ok(())
                } else {
                    std::process::exit(1);
                }
            })
        }
        "disasm" => {
            if rest.is_empty() {
                eprintln!("Usage: numbers disasm <file> [--values=<a,b,...>]");
                std::process::exit(1);
            }
            parse_disasm_options(rest).and_then(|options| disasm_file(&options))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("numbers {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::Usage(format!("unknown command '{command}'"))),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Numbers puzzle toolchain");
    println!();
    println!("Usage: numbers <command> [options]");
    println!();
    println!("Commands:");
    println!("  compile <N>          Write the packed program stream for N cards");
    println!("  canon [file]         Print solver output in canonical form (stdin if no file)");
    println!("  diff <left> <right>  Compare two solvers' solutions up to regrouping");
    println!("  disasm <file>        List the programs in a packed stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Canon options:");
    println!("  --target=<T>         Reject solutions that do not evaluate to T");
    println!("  --keys               Print each solution's canonical key");
    println!("  -u, --unique         Print each distinct solution once");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}
