//! tplmath CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tplmath_runtime::{Repl, eval_input, render_file};
use tplmath_stdlib::FunctionTable;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    eval: Vec<String>,
    log: Option<String>,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    const fn is_batch(&self) -> bool {
        !self.files.is_empty() || !self.eval.is_empty()
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-e" | "--eval" => {
                let text = args.next().ok_or("--eval requires a value")?;
                config.eval.push(text);
            }
            "--log" => {
                let level = args.next().ok_or("--log requires a value")?;
                config.log = Some(level);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn init_logging(level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_env("TPLMATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string().into())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tplmath {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.log.as_deref())?;

    if !config.is_batch() {
        let mut repl = Repl::new()?;
        repl.run()?;
        return Ok(());
    }

    let table = FunctionTable::standard();
    for text in &config.eval {
        println!("{}", eval_input(&table, text)?);
    }
    for file in &config.files {
        print!("{}", render_file(&table, file)?);
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mtplmath\x1b[0m - Numeric template functions

\x1b[1mUSAGE:\x1b[0m
    tplmath [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Template files to render to stdout

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -e, --eval TEXT     Evaluate an action or template and print the result
    --log LEVEL         Log filter (overrides TPLMATH_LOG), e.g. debug

\x1b[1mEXAMPLES:\x1b[0m
    tplmath                              Start interactive REPL
    tplmath -e 'add 1 2.5'               Print 3.5
    tplmath -e '{{{{ 3 | add 1 2 }}}} items'   Print 6 items
    tplmath report.tmpl                  Render report.tmpl

Without files or --eval, an interactive REPL starts."
    );
}
