use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use simplelog::LevelFilter;

use truth_table::Session;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Write tables to this file instead of the terminal.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Variables, separated by spaces. Skips the interactive prompts.
    #[arg(long, value_name = "NAMES")]
    vars: Option<String>,

    /// Formula to tabulate (with `--vars`), can be repeated.
    #[arg(short = 'e', long = "formula", value_name = "TEXT", requires = "vars")]
    formulas: Vec<String>,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

const USAGE: &str = "
Very little error checking has been built into this so
do try to follow these simple conventions:

-----------------------------------------------------
AND: ^ OR: v NOT: ~ XOR: x
Implication: > Biconditional: =

The following letters are not allowed as variables:
x v i d
You may use the uppercase versions
-----------------------------------------------------
";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut out: Box<dyn Write> = match &args.file {
        Some(path) => {
            info!("writing tables to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout()),
    };

    let mut session = Session::new();

    if let Some(vars) = &args.vars {
        session.register_variables(vars.split_whitespace())?;
        for formula in &args.formulas {
            session.add_formula(formula.trim())?;
        }
        session.generate_table().render(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    println!("TruthTable version: {}", env!("CARGO_PKG_VERSION"));
    println!("{}", USAGE);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt("Enter the single-character variables you will use\nseparated by spaces or press return to quit:\n> ")?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            break;
        }

        if let Err(e) = session.register_variables(line.split_whitespace()) {
            println!("{}", e);
            continue;
        }

        println!("\nNow enter your propositions one at a time\nPress the return key to print the table:");
        loop {
            prompt("> ")?;
            let formula = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let formula = formula.trim();
            if formula.is_empty() {
                break;
            }
            if let Err(e) = session.add_formula(formula) {
                println!("{}", e);
            }
        }

        session.generate_table().render(&mut out)?;
        out.flush()?;

        if let Some(path) = &args.file {
            println!("\nTable written to: {}\n", path.display());
        }

        session.reset();
    }

    Ok(())
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}
