use clap::Parser;
use console::style;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use walle::interp::{Interpreter, RecordingCanvas};
use walle::parser::printer::print_program;
use walle::source::{Error, Source};

#[derive(Parser)]
#[command(name = "walle")]
#[command(about = "Runs a Wall-E drawing program", version)]
struct Cli {
    /// Program to run
    input: PathBuf,

    /// Side length of the square canvas
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(i64).range(1..))]
    canvas_size: i64,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree
    #[arg(long)]
    ast: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let content = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(err) => {
            eprintln!(
                "{} cannot read {}: {}",
                style("ERROR:").red().bold(),
                cli.input.display(),
                err
            );
            process::exit(2);
        }
    };

    let source = Source::new(&content);
    if let Err(err) = run(&cli, &content) {
        eprint!("{}", style(source.report(&err)).red());
        process::exit(1);
    }
}

fn run(cli: &Cli, content: &str) -> Result<(), Error> {
    if cli.tokens {
        for token in walle::parser::scan(content)? {
            println!("{:>4} {:?}", token.line, token.kind);
        }
    }

    let program = walle::compile(content)?;
    if cli.ast {
        print!("{}", print_program(&program));
    }

    let mut canvas = RecordingCanvas::new(cli.canvas_size);
    let mut interpreter = Interpreter::new(&mut canvas);
    let result = interpreter.execute(&program);
    let machine = interpreter.into_machine();

    for stroke in canvas.strokes() {
        println!("{:?}", stroke);
    }
    println!(
        "cursor ({}, {}), brush {} size {}",
        machine.cursor.x, machine.cursor.y, machine.brush.color, machine.brush.size
    );
    let mut variables: Vec<_> = machine.variables.iter().collect();
    variables.sort_by(|a, b| a.0.cmp(b.0));
    for (ident, value) in variables {
        println!("{} = {}", ident, value);
    }

    result
}
