use clap::Parser;
use est::{Engine, EngineOptions, Evaluator, EvaluatorOptions, parse, render_error};
use miette::{IntoDiagnostic, Result};
use std::io::BufRead;
use std::io::BufReader;
use tracing::debug;

/// est - evaluate arithmetic expressions over numbers and vectors
#[derive(Parser, Debug)]
#[command(name = "est")]
#[command(about = "Evaluate est expressions", long_about = None)]
struct Args {
    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the optimised expression (for debugging)
    #[arg(long)]
    debug_optimise: bool,

    /// Evaluate the parsed tree as is, without sharing or inlining
    #[arg(long)]
    no_optimise: bool,

    /// Maximum evaluation depth
    #[arg(long, default_value_t = 10_000)]
    max_depth: usize,

    /// Source name used in error positions
    #[arg(long, default_value = "input")]
    name: String,

    /// Expression to evaluate (if not provided, reads each line of stdin)
    expression: Option<String>,
}

fn interpret_input(engine: &Engine, args: &Args, input: &str) {
    let parsed = match parse(&args.name, input) {
        Ok(expr) => expr,
        Err(e) => {
            render_error(&e.into(), input);
            return;
        }
    };

    if args.debug_parse {
        println!("=== Parsed AST ===");
        println!("{:#?}", parsed);
        println!();
    }

    let expr = if engine.options().optimise {
        parsed.optimise()
    } else {
        parsed
    };

    if args.debug_optimise {
        println!("=== Optimised Expression ===");
        println!("{}", expr);
        println!();
    }

    let mut evaluator = Evaluator::new(engine.options().evaluator.clone());
    match evaluator.eval(&expr, engine.environment()) {
        Ok(value) => println!("{}", value),
        Err(e) => render_error(&e.into(), input),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use EST_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("EST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = EngineOptions {
        optimise: !args.no_optimise,
        evaluator: EvaluatorOptions {
            max_depth: args.max_depth,
        },
    };
    let engine = Engine::new(options, |_| {});

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, &args, expr);
        return Ok(());
    }

    // Pipe/stdin mode
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        debug!(len = line.len(), "evaluating line");
        interpret_input(&engine, &args, &line);
    }

    Ok(())
}
