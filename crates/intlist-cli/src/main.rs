//! Intlist CLI
//!
//! Command-line interface for the intlist op-script runner.

use clap::{Arg, Command};
use intlist_interpreter::Interpreter;
use intlist_parser::Parser;
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("intlist")
        .version("0.1.0")
        .about("Singly linked integer list op-script runner")
        .arg(
            Arg::new("command")
                .short('c')
                .long("command")
                .value_name("STRING")
                .help("Execute op-script string")
                .num_args(1),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Op-script file to execute")
                .index(1),
        )
        .get_matches();

    let result = matches.get_one::<String>("command").map_or_else(
        || {
            matches.get_one::<String>("file").map_or_else(
                // No file and no -c: read the script from stdin
                execute_stdin,
                |file_path| execute_file(file_path),
            )
        },
        // Execute command string
        |command_str| execute_string(command_str, "<input>"),
    );

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn execute_string(source: &str, filename: &str) -> Result<i32, anyhow::Error> {
    let parser = Parser::new_with_filename(source, filename)?;
    let program = parser.parse()?;

    let mut interpreter = Interpreter::new();
    let status = interpreter.execute(&program, parser.source_map(), parser.filename())?;

    // Print output
    if !status.stdout.is_empty() {
        print!("{}", status.stdout);
    }

    Ok(status.code)
}

fn execute_file(file_path: &str) -> Result<i32, anyhow::Error> {
    let content = std::fs::read_to_string(file_path)?;
    execute_string(&content, file_path)
}

fn execute_stdin() -> Result<i32, anyhow::Error> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    execute_string(&content, "<stdin>")
}
