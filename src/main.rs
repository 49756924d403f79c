// ctree: parse a C-dialect source file and print its syntax tree as JSON

mod parser;

use std::fs;
use std::path::Path;
use std::process;

use parser::parse::Parser;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("ctree");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.c>", program_name);
        eprintln!();
        eprintln!("Parses the file and prints the syntax tree as JSON on stdout.");
        process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        process::exit(1);
    }

    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Could not read '{}': {}", input_file, err);
            process::exit(1);
        }
    };

    match Parser::new(&source).parse() {
        Ok(program) => match serde_json::to_string_pretty(&program.to_json()) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => {
                eprintln!("Error: Could not serialize tree: {}", err);
                process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
