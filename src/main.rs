use std::{fs, io::BufReader, process::ExitCode};

use clap::Parser;
use log::debug;
use subscripta::Expression;

/// subscripta evaluates arithmetic expressions over integer scalars and
/// arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `expression` as the path of a file holding the expression.
    #[arg(short, long)]
    file: bool,

    /// File with variable values, one `name value` or
    /// `name size (index,value)...` record per line.
    #[arg(short, long, value_name = "PATH")]
    values: Option<String>,

    /// Print the discovered scalars and arrays before the result.
    #[arg(short, long)]
    list: bool,

    expression: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = if args.file {
        match fs::read_to_string(&args.expression) {
            Ok(text) => text.trim().to_string(),
            Err(_) => {
                eprintln!("Failed to read the expression file '{}'. Perhaps this file does not exist?",
                          &args.expression);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.expression
    };

    let mut expr = Expression::new(text);
    expr.discover();

    if let Some(path) = &args.values {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(_) => {
                eprintln!("Failed to read the values file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        };
        debug!("loading values from '{path}'");
        if let Err(e) = expr.load_values(BufReader::new(file)) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    if args.list {
        for scalar in expr.variables().scalars() {
            println!("{scalar}");
        }
        for array in expr.variables().arrays() {
            println!("{array}");
        }
    }

    match expr.evaluate() {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
