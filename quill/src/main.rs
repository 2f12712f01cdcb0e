use clap::Parser;
use console::style;
use quill::{compile, Mode};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Lexes, parses, evaluates or compiles quill programs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File to run. Starts an interactive session if omitted.
    path: Option<PathBuf>,

    /// One of `lex`, `eval`, `compile` or `ast`. Anything else prints the AST.
    #[arg(short, long, default_value = "ast")]
    mode: String,
}

fn report(output: &str) {
    if output.starts_with("Error: ") {
        eprintln!("{}", style(output).red());
    } else {
        println!("{}", output);
    }
}

fn repl(mode: Mode) -> io::Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        print!("{} ", style(">").dim());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!();
            return Ok(()); // EOF
        }
        report(&compile(&input, mode));
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let mode = Mode::from(cli.mode.as_str());

    match cli.path {
        Some(path) => {
            let source = fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!(
                    "{} {}: {}",
                    style("Failed to read").red(),
                    path.display(),
                    err
                );
                process::exit(1);
            });
            report(&compile(&source, mode));
            Ok(())
        }
        None => repl(mode),
    }
}
