use std::process::ExitCode;

use ls8::{Console, Machine};
use tracing::debug;

const USAGE: &str = "usage: ls8-cli [-v] PROGRAM";

/// Writes each `PRN` value to stdout, one decimal per line. This is the
/// program's result stream; diagnostics and the trace go elsewhere.
struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&mut self, value: u8) {
        println!("{value}");
    }
}

struct Invocation {
    program_path: String,
    verbose: bool,
}

/// Parses `[-v] PROGRAM`. Anything else is an invalid invocation, and
/// nothing gets executed.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Invocation, String> {
    let mut verbose = false;
    let mut program_path = None;
    for arg in args {
        if arg == "-v" {
            verbose = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown flag {arg}"));
        } else if program_path.is_some() {
            return Err("expected exactly one program file".to_string());
        } else {
            program_path = Some(arg);
        }
    }
    match program_path {
        Some(program_path) => Ok(Invocation {
            program_path,
            verbose,
        }),
        None => Err("expected exactly one program file".to_string()),
    }
}

fn main() -> ExitCode {
    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("ls8-cli: {message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if invocation.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let image = match ls8_loader::load_file(&invocation.program_path) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("ls8-cli: {}: {error}", invocation.program_path);
            return ExitCode::FAILURE;
        }
    };

    let mut machine = Machine::new();
    if let Err(fault) = machine.load_program(&image) {
        eprintln!("ls8-cli: {fault}");
        return ExitCode::FAILURE;
    }

    let mut console = StdoutConsole;
    while machine.is_running() {
        debug!("{}", machine.trace());
        if let Err(fault) = machine.step(&mut console) {
            eprintln!("ls8-cli: {fault}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_single_program_argument() {
        let invocation = parse_args(args(&["demos/print8.ls8"])).unwrap();
        assert_eq!(invocation.program_path, "demos/print8.ls8");
        assert!(!invocation.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let invocation = parse_args(args(&["-v", "demos/print8.ls8"])).unwrap();
        assert!(invocation.verbose);
        let invocation = parse_args(args(&["demos/print8.ls8", "-v"])).unwrap();
        assert!(invocation.verbose);
    }

    #[test]
    fn test_zero_arguments_rejected() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["-v"])).is_err());
    }

    #[test]
    fn test_two_program_arguments_rejected() {
        assert!(parse_args(args(&["a.ls8", "b.ls8"])).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(parse_args(args(&["--trace", "a.ls8"])).is_err());
    }
}
