//! CTX command-line tool for validating and reformatting CTX configuration files.
//!
//! Usage: ctx [OPTIONS] [FILE]
//!
//! Options:
//!   --check            Check if the file is valid (exit 0 if valid, 1 if invalid)
//!   -o, --output <FILE>    Write the reformatted document to the specified file
//!   -h, --help         Print help
//!   -V, --version      Print version
//!
//! With no FILE, or when FILE is `-`, reads standard input. By default the
//! parsed document is reformatted and printed to standard output.

use libctx::{encode, parse_with_filename};
use std::fs;
use std::io::{self, Read, Write};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut check_only = false;
    let mut output_file: Option<&str> = None;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("ctx {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--check" => {
                check_only = true;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "-" => {
                // Explicit stdin; input_path stays None.
            }
            arg => {
                if arg.starts_with('-') {
                    eprintln!("Error: Unknown option: {}", arg);
                    process::exit(1);
                }
                if input_path.is_some() {
                    eprintln!("Error: Multiple input files not supported");
                    process::exit(1);
                }
                input_path = Some(arg);
            }
        }
        i += 1;
    }

    let (content, filename) = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, Some(path.to_string())),
            Err(e) => {
                eprintln!("Error: {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut content = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut content) {
                eprintln!("Error: reading stdin: {}", e);
                process::exit(1);
            }
            (content, None)
        }
    };

    let block = match parse_with_filename(&content, filename.as_deref()) {
        Ok(block) => block,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if check_only {
        return;
    }

    let formatted = encode(&block);
    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &formatted) {
                eprintln!("Error: {}: {}", path, e);
                process::exit(1);
            }
        }
        None => {
            let mut stdout = io::stdout();
            if stdout.write_all(formatted.as_bytes()).is_err() {
                process::exit(1);
            }
        }
    }
}

fn print_help() {
    println!("ctx - validate and reformat CTX configuration files");
    println!();
    println!("Usage: ctx [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  --check            Check if the file is valid (exit 0 if valid, 1 if invalid)");
    println!("  -o, --output <FILE>    Write the reformatted document to the specified file");
    println!("  -h, --help         Print help");
    println!("  -V, --version      Print version");
    println!();
    println!("With no FILE, or when FILE is '-', reads standard input.");
}
