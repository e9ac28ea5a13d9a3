use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand};
use stackviz::{
    Associativity, ConvertOptions, Converter, EvaluationResult, evaluate, to_postfix_string,
    util::num::{format_number, format_stack},
};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// stackviz shows how a stack machine evaluates postfix expressions, one
/// push or operation at a time, and converts infix expressions to postfix.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increases log output on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates a postfix expression and prints every step.
    Eval {
        /// Tells stackviz to read the expression from a file.
        #[arg(short, long)]
        file: bool,

        /// Prints the result and steps as JSON.
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Prints only the final value.
        #[arg(short, long)]
        quiet: bool,

        contents: String,
    },
    /// Converts an infix expression to postfix.
    Convert {
        /// Tells stackviz to read the expression from a file.
        #[arg(short, long)]
        file: bool,

        /// Rejects unknown characters and unbalanced parentheses.
        #[arg(short, long)]
        strict: bool,

        /// Groups chained `^` from the right: `2 ^ 3 ^ 2` is `2 ^ 9`.
        #[arg(long)]
        right_assoc_power: bool,

        /// Also evaluates the converted expression and prints its steps.
        #[arg(short, long)]
        eval: bool,

        contents: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = match args.command {
        Command::Eval { file,
                        json,
                        quiet,
                        contents, } => read_source(&contents, file).and_then(|source| {
                                                                       run_eval(&source, json, quiet)
                                                                   }),
        Command::Convert { file,
                           strict,
                           right_assoc_power,
                           eval,
                           contents, } => {
            let power = if right_assoc_power {
                Associativity::Right
            } else {
                Associativity::Left
            };
            let options = ConvertOptions { strict, power };
            read_source(&contents, file).and_then(|source| run_convert(&source, options, eval))
        },
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn read_source(contents: &str, file: bool) -> Result<String, String> {
    if !file {
        return Ok(contents.to_string());
    }
    fs::read_to_string(contents).map_err(|e| {
                                    error!(path = contents, error = %e, "failed to read input");
                                    format!("Failed to read the input file '{contents}'. Perhaps this file does not exist?")
                                })
}

fn run_eval(source: &str, json: bool, quiet: bool) -> Result<(), String> {
    if source.trim().is_empty() {
        return Err("Please enter a postfix expression".to_string());
    }

    let result = evaluate(source).map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{text}");
    } else if quiet {
        println!("{}", format_number(result.value));
    } else {
        print_steps(&result);
    }
    Ok(())
}

fn run_convert(source: &str, options: ConvertOptions, eval: bool) -> Result<(), String> {
    if source.trim().is_empty() {
        return Err("Please enter an infix expression".to_string());
    }

    let tokens = Converter::new(options).convert(source)
                                        .map_err(|e| format!("Invalid infix expression: {e}"))?;
    let postfix = to_postfix_string(&tokens);
    println!("{postfix}");

    if eval {
        let result = evaluate(&postfix).map_err(|e| e.to_string())?;
        println!();
        print_steps(&result);
    }
    Ok(())
}

fn print_steps(result: &EvaluationResult) {
    let token_width = result.steps
                            .iter()
                            .map(|s| s.lexeme.len())
                            .max()
                            .unwrap_or(0)
                            .max("Token".len());
    let action_width = result.steps
                             .iter()
                             .map(|s| s.description.len())
                             .max()
                             .unwrap_or(0)
                             .max("Action".len());

    println!("{:>4}  {:<token_width$}  {:<action_width$}  Stack", "Step", "Token", "Action");
    for step in &result.steps {
        println!("{:>4}  {:<token_width$}  {:<action_width$}  {}",
                 step.index,
                 step.lexeme,
                 step.description,
                 format_stack(&step.stack));
    }
    println!();
    println!("Result: {}", format_number(result.value));
}
