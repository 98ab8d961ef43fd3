//! Li command-line interface.

use lic::commands::{parse_file, run_files};
use lic::options::DIALECT_ENV;
use lic::{init_tracing, Options};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "run" => {
            let (options, files) = options_or_exit(&args[2..]);
            if files.is_empty() {
                eprintln!("Usage: li run [--dialect=<name>] [--banner] <file.li>...");
                std::process::exit(1);
            }
            run_files(&files, &options)
        }
        "parse" => {
            let (options, files) = options_or_exit(&args[2..]);
            let [path] = files.as_slice() else {
                eprintln!("Usage: li parse [--dialect=<name>] [--compact] <file.li>");
                std::process::exit(1);
            };
            parse_file(path, &options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-v" => {
            println!("Li {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("li"))
            {
                let (options, files) = options_or_exit(&args[1..]);
                run_files(&files, &options)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                false
            }
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn options_or_exit(args: &[String]) -> (Options, Vec<String>) {
    let env_dialect = std::env::var(DIALECT_ENV).ok();
    match Options::parse(args, env_dialect.as_deref()) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Li interpreter");
    println!();
    println!("Usage: li <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.li>...     Run Li programs in order");
    println!("  parse <file.li>      Print the parsed program as JSON");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --dialect=<name>    Source dialect: english (default), french");
    println!("  --banner            Print the version banner before running");
    println!("  --compact           Single-line JSON output (parse)");
    println!();
    println!("Environment:");
    println!("  LI_DIALECT          Default dialect");
    println!("  LI_LOG              Log filter, e.g. li_eval=debug (falls back to RUST_LOG)");
    println!("  LI_LOG_TREE=1       Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  li run hello.li");
    println!("  li hello.li                      # same as run");
    println!("  li run --dialect=french salut.li");
    println!("  li parse --compact hello.li");
}
