//! Kestrel demo CLI
//!
//! Small programs built on the dispatch engine.

mod coerce;
mod render;
mod stupid;

use std::process::ExitCode;
use std::sync::{Arc, Once};

use kestrel_match::{DispatchError, Dispatcher};
use kestrel_value::TypeTable;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];
    tracing::debug!(command = command.as_str(), "run command");

    let result = match command.as_str() {
        "expr" => {
            if args.len() < 3 {
                eprintln!("Usage: kestrel expr <word>...");
                return ExitCode::FAILURE;
            }
            run_expr(&args[2..])
        }
        "explain" => stupid::build().map(|expr| print!("{}", expr.explain())),
        "render" => run_render(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_expr(words: &[String]) -> Result<(), DispatchError> {
    let values = words.iter().map(|word| coerce::coerce(word)).collect();
    let expr = stupid::build()?;
    println!("{}", expr.apply(values)?);
    Ok(())
}

fn run_render() -> Result<(), DispatchError> {
    let mut types = TypeTable::new();
    let kinds = render::NodeTypes::declare(&mut types)
        .map_err(|err| DispatchError::raised("render", err.to_string()))?;
    let renderer = render::renderer(Arc::new(types), kinds)?;
    println!("{}", render::render_tree(&renderer, &render::sample_tree(kinds))?);
    Ok(())
}

fn print_usage() {
    println!("Kestrel dispatch demos");
    println!();
    println!("Usage: kestrel <command> [args]");
    println!();
    println!("Commands:");
    println!("  expr <word>...   Evaluate a silly expression, e.g. `kestrel expr 1 + 1`");
    println!("  explain          List the expression cases in match order");
    println!("  render           Render a small syntax tree back to source");
    println!("  help             Show this message");
    println!();
    println!("Set RUST_LOG=kestrel_match=trace to watch dispatch decisions.");
}
