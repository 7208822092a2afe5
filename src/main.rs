use std::{fs, io, process};

use clap::Parser;
use prefix_calc::{
    get_result,
    interpreter::parser::core::{DEFAULT_MAX_DEPTH, ParseOptions},
    util::num::format_real,
};
use tracing_subscriber::{EnvFilter, fmt};

/// prefix_calc builds an expression tree from a prefix expression, shows it
/// in prefix, postfix and parenthesized infix form, and evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells prefix_calc to read the expression from the file named by
    /// CONTENTS.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Rejects operator tokens longer than one character and tokens left
    /// over after a complete expression.
    #[arg(short, long)]
    strict: bool,

    /// Deepest nesting accepted before the expression is rejected. The limit
    /// protects the stack, so values above 4096 are lowered to 4096.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Prints only the value.
    #[arg(short, long)]
    quiet: bool,

    /// The expression, with all elements separated by blanks. Read from
    /// standard input when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls diagnostics; warnings are shown by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let source = read_source(&args);
    let options = ParseOptions { strict: args.strict,
                                 ..ParseOptions::default() }.with_max_depth(args.max_depth);

    match get_result(&source, &options) {
        Ok(report) if args.quiet => {
            report.log_warnings();
            println!("{}", format_real(report.value));
        },
        Ok(report) => {
            print!("\n{}", report.renderings());
            report.log_warnings();
            println!("{}", report.value_line());
        },
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

fn read_source(args: &Args) -> String {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                       process::exit(1);
                                   }),
        Some(expression) => {
            if !args.quiet {
                println!("Processing string {expression}");
            }
            expression.clone()
        },
        None => {
            if !args.quiet {
                println!("Prefix expression, with all elements separated by blanks");
            }
            let mut line = String::new();
            if let Err(e) = io::stdin().read_line(&mut line) {
                eprintln!("Failed to read standard input: {e}");
                process::exit(1);
            }
            line
        },
    }
}
