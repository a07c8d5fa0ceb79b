use std::io::Write;
use std::process::ExitCode;

use log::{debug, error, info};
use lox_eval::Command;

const USAGE: &str = "Usage: lox-eval <tokenize|parse|evaluate|run> <filename>";

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let args = std::env::args().collect::<Vec<String>>();
    let (Some(command), Some(file_path)) = (args.get(1), args.get(2)) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(1);
    };

    let command = match command.parse::<Command>() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    info!("Read from file {}", file_path);
    let contents = match std::fs::read(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error reading file: {}", err);
            return ExitCode::from(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = lox_eval::run_command(command, &contents, &mut out);
    if let Err(err) = out.flush() {
        error!("flushing stdout failed with error {}", err);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.kind().exit_code())
        }
    }
}

