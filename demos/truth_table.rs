//! Truth table for a formula given as a token sequence.
//!
//! Each argument is one token; quote the operators your shell would eat.
//!
//! Run with: `cargo run --example truth_table -- P '&&' '(' Q '->' R ')'`
//! With options: `cargo run --example truth_table -- --max-depth 16 -v '!' '!' P`
//! Commands instead of tokens: `cargo run --example truth_table -- --commands add_p add_xor add_q solve_formula`

use clap::Parser;
use color_eyre::eyre::eyre;
use truth_rs::command::{Command, Outcome};
use truth_rs::engine::Engine;
use truth_rs::formula::Formula;
use truth_rs::limits::Limits;

#[derive(Parser, Debug)]
#[command(name = "truth_table")]
#[command(about = "Print the truth table of a propositional formula")]
struct Args {
    /// Formula tokens (or command tags with --commands)
    #[arg(required = true, allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Treat arguments as command tags (add_and, add_p, solve_formula, ...)
    #[arg(long)]
    commands: bool,

    /// Maximum nesting depth of groups, negations and implication chains
    #[arg(long, default_value_t = Limits::default().max_depth)]
    max_depth: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut formula = Formula::new();

    if args.commands {
        for tag in &args.tokens {
            let command = Command::from_tag(tag).ok_or_else(|| eyre!("unknown command '{}'", tag))?;
            match command.apply(&mut formula)? {
                Outcome::Edited => log::info!("{} -> {}", command, formula),
                Outcome::Solved(Some(table)) => print!("{}", table),
                Outcome::Solved(None) => println!("(empty formula)"),
            }
        }
        return Ok(());
    }

    formula.extend(args.tokens.iter().map(String::as_str));
    println!("Formula: {}", formula);

    let engine = Engine::with_limits(formula.tokens(), Limits::new(args.max_depth));
    println!("Variables: {}", engine.variables().join(", "));
    println!();

    let table = engine.truth_table()?;
    print!("{}", table);

    let satisfying = table.rows().iter().filter(|row| row.value).count();
    println!();
    println!("Satisfying assignments: {} of {}", satisfying, table.rows().len());

    Ok(())
}
