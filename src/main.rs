use clap::Parser;
use clap::error::ErrorKind;
use std::io;
use std::process;

use yamlvalid::cli::{Cli, USAGE};
use yamlvalid::lint::{self, EXIT_FAILURE, EXIT_USAGE};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", USAGE);
                process::exit(EXIT_USAGE);
            }
        },
    };

    cli.init_logging();
    let config = cli.config();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = match lint::run(&cli.file, &config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    };

    process::exit(code);
}
