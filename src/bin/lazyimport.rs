//! CLI wrapper around the lazy importer.
//!
//! Usage:
//!   lazyimport inspect <module>                   # List a module's attributes
//!   lazyimport get <module> <attr>                # Print one attribute
//!   lazyimport call <module> <function> [args]... # Call a module function
//!   lazyimport -I ./modules --stats get a.b name  # Extra search dir, print counters

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use lazyimport::logging;
use lazyimport::{
    AttributeSource, EvalContext, ImportConfig, Importer, LazyModule, ModuleName,
    SharedImporter, Value,
};

#[derive(Parser)]
#[command(name = "lazyimport")]
#[command(about = "Load modules on first use and inspect them")]
struct Cli {
    /// Path to a TOML importer configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra directory to search for modules (repeatable)
    #[arg(short = 'I', long = "include")]
    include: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print per-module import counters when done
    #[arg(long)]
    stats: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the attributes of a module
    Inspect { module: String },
    /// Print one attribute of a module
    Get { module: String, attr: String },
    /// Call a function exported by a module
    Call {
        module: String,
        function: String,
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = load_config(&cli)?;
    debug!(search_path = ?config.effective_search_path(), "importer configured");
    let importer = Importer::from_config(&config).into_shared();

    let outcome = run(&cli.command, &importer);
    // Module prints come out even when the command itself failed.
    echo_output(&importer);
    outcome?;

    if cli.stats {
        print_stats(&importer);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ImportConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ImportConfig::load(path)
                .with_context(|| format!("cannot use config '{}'", path.display()))?
        }
        None => ImportConfig::default(),
    }
    .with_env_overrides();

    for dir in &cli.include {
        config = config.with_search_dir(dir);
    }
    Ok(config)
}

fn run(command: &Command, importer: &SharedImporter) -> Result<()> {
    match command {
        Command::Inspect { module } => {
            let name = ModuleName::new(module.as_str());
            let loaded = Importer::import_shared(importer, &name)?;
            echo_output(importer);
            for attr in loaded.dir() {
                let value = loaded.get_attr(&attr)?;
                println!("{:<20} {:<10} {}", attr, value.type_name(), value);
            }
        }
        Command::Get { module, attr } => {
            let proxy = LazyModule::with_importer(module.as_str(), importer.clone());
            let value = proxy.get_attr(attr)?;
            echo_output(importer);
            println!("{}", value);
        }
        Command::Call {
            module,
            function,
            args,
        } => {
            let proxy = LazyModule::with_importer(module.as_str(), importer.clone());
            let callee = proxy.get_attr(function)?;
            echo_output(importer);
            if !callee.is_callable() {
                bail!("'{}.{}' is a {}, not a function", module, function, callee.type_name());
            }

            let mut ctx = EvalContext::new();
            let result = callee.call(&mut ctx, args.iter().map(|a| parse_arg(a)).collect());
            for line in ctx.take_output() {
                println!("{}", line);
            }
            println!("{}", result?);
        }
    }
    Ok(())
}

/// Command line arguments become ints, floats, `True`/`False`/`None` or strings.
fn parse_arg(raw: &str) -> Value {
    match raw {
        "None" => Value::None,
        "True" => Value::Bool(true),
        "False" => Value::Bool(false),
        _ => {
            if let Ok(i) = raw.parse::<i64>() {
                Value::Int(i)
            } else if let Ok(f) = raw.parse::<f64>() {
                Value::Float(f)
            } else {
                Value::str(raw)
            }
        }
    }
}

fn echo_output(importer: &SharedImporter) {
    for line in importer.borrow_mut().take_output() {
        println!("{}", line);
    }
}

fn print_stats(importer: &SharedImporter) {
    let importer = importer.borrow();
    eprintln!("{:<30} {:>8} {:>10}", "module", "requests", "executions");
    for name in importer.loaded_modules() {
        let stats = importer.stats(&name);
        eprintln!("{:<30} {:>8} {:>10}", name, stats.requests, stats.executions);
    }
}
