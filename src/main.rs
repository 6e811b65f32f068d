mod config;
mod console;
mod error;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use quill_rope::{Buffer, DirectBuffer};

use config::ConsoleConfig;
use error::{CliError, CliResult};

const USAGE: &str = "usage: quill [--direct-mode] <file>";

struct Args {
    file: PathBuf,
    direct_mode: bool,
}

fn parse_args(raw: &[String]) -> CliResult<Option<Args>> {
    let mut file = None;
    let mut direct_mode = false;
    for arg in raw {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(None);
            }
            "--version" => {
                println!("quill {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--direct-mode" | "-d" => direct_mode = true,
            other if other.starts_with('-') => {
                return Err(CliError::ArgParse(other.to_string()));
            }
            other => {
                if file.is_some() {
                    return Err(CliError::ArgParse(other.to_string()));
                }
                file = Some(PathBuf::from(other));
            }
        }
    }
    let Some(file) = file else {
        return Err(CliError::ArgParse("<file>".to_string()));
    };
    Ok(Some(Args { file, direct_mode }))
}

fn run() -> CliResult<()> {
    let raw: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&raw)? else {
        return Ok(());
    };

    let config = ConsoleConfig::default();
    if args.direct_mode {
        let mut backend = DirectBuffer::open(&args.file)?;
        console::run(&mut backend, &config)?;
    } else {
        let mut backend = Buffer::open(&args.file)?;
        console::run_insertable(&mut backend, &config)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", USAGE, e);
            ExitCode::FAILURE
        }
    }
}
