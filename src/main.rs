use std::{env, fs::read_to_string, process::exit, time::Instant};

use lyre::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: lyre <file> [--tokens]");
        exit(1);
    }

    let dump_tokens = args.len() == 3 && args[2] == "--tokens";
    let file_path: &str = &args[1];
    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(file_contents) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, file_path);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if dump_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, file_path);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    for stmt in &program {
        println!("{}", pretty_print(format!("{:?}", stmt)));
    }
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}
