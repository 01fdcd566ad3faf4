use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use log::debug;

use rdgen::io_utils::fatal_message;
use rdgen::{Config, RleCodec};

/// Compress an NVM image into an RLE encoded RAM-disk C source file.
#[derive(Parser)]
#[command(name = "rdgen", version)]
struct Args {
    /// Raw NVM image to embed
    input: PathBuf,
    /// C source file to generate
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("rdgen: Compress NVM image into RLE encoded RamDisk format\n");

    let args = match parse_args(std::env::args_os().collect()) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            let prog = std::env::args_os()
                .next()
                .map_or_else(|| "rdgen".into(), |p| p.to_string_lossy().into_owned());
            println!("Usage: {prog} <nvm> <img>");
            return ExitCode::SUCCESS;
        }
    };

    match rdgen::run(&RleCodec, &Config::default(), &args.input, &args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?} failure", e.kind());
            eprintln!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Two arguments are always the input and output paths, even when they look
/// like flags. Anything else goes through the parser as usual.
fn parse_args(mut argv: Vec<OsString>) -> Result<Args, clap::Error> {
    if argv.len() == 3 {
        argv.insert(1, "--".into());
    }
    Args::try_parse_from(argv)
}
