use anyhow::Result;
use clap::Parser;
use expression_converter::converter::syntax::expression_tree::ExpressionTree;
use log::debug;
use std::io;
use std::io::{BufRead, Write};

/// Converts an arithmetic expression between infix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert; prompts interactively when omitted
    expression: Option<String>,

    /// Interpret the expression as postfix instead of infix
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.expression {
        Some(expression) => {
            let tree = if args.postfix {
                ExpressionTree::from_postfix(&expression)?
            } else {
                ExpressionTree::from_infix(&expression)?
            };
            print_conversions(&tree);
            Ok(())
        }
        None => run_interactive(),
    }
}

/// Prompts for a notation and an expression until a conversion succeeds.
///
/// An unrecognized notation selector or an unparsable expression is reported
/// and the prompts start over.
fn run_interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let notation = match prompt(&mut lines, "Do you want to input infix or postfix? (i/p): ")? {
            Some(notation) => notation,
            None => return Ok(()),
        };
        if notation != "i" && notation != "p" {
            println!("You must input i or p.");
            continue;
        }

        let expression = match prompt(&mut lines, "Enter expression: ")? {
            Some(expression) => expression,
            None => return Ok(()),
        };

        let tree = if notation == "p" {
            ExpressionTree::from_postfix(&expression)
        } else {
            ExpressionTree::from_infix(&expression)
        };
        match tree {
            Ok(tree) => {
                print_conversions(&tree);
                return Ok(());
            }
            Err(error) => println!("Could not parse the expression: {}", error),
        }
    }
}

/// Reads the next input line, or `None` once the input is exhausted.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn print_conversions(tree: &ExpressionTree) {
    debug!("parsed tree:\n{}", tree);
    println!("Infix:   {}", tree.to_infix());
    println!("Postfix: {}", tree.to_postfix());
}
