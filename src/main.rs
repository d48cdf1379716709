//! Lox CLI - prints the tokens of a script, or of each line typed at the prompt

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lox::errors::{StreamSink, print_errors};
use lox::{LoxError, LoxResult, Scanner, Token};

const USAGE: &str = "lox [--pretty] [SCRIPT]";

const HELP: &str = "\
    lox - the Lox scanner

    USAGE:
        lox [--pretty] [SCRIPT]

    OPTIONS:
        --pretty            Render lexical errors with source context.
        -h, --help          Print this help.

    ARGS:
        SCRIPT              The Lox file to scan. Without it, an interactive prompt scans each
                            line as it is entered.
";

#[derive(Debug, Eq, PartialEq)]
struct LoxArgs {
    pretty: bool,
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let result = parse_args().and_then(|args| match &args.script {
        Some(path) => run_file(path, args.pretty),
        None => run_prompt(),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Lexical errors have already been reported one by one.
            if !matches!(e, LoxError::Scan { .. }) {
                eprintln!("{}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn parse_args() -> LoxResult<LoxArgs> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let pretty = pargs.contains("--pretty");

    let mut free = pargs.finish();
    if free.len() > 1 || free.iter().any(|arg| arg.to_string_lossy().starts_with("--")) {
        return Err(LoxError::Usage(USAGE.to_string()));
    }

    Ok(LoxArgs {
        pretty,
        script: free.pop().map(PathBuf::from),
    })
}

fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()
}

/// Scan a whole file, failing if any lexical error was found
fn run_file(path: &Path, pretty: bool) -> LoxResult<()> {
    let source = fs::read_to_string(path)?;
    let (tokens, errors) = lox::scan(&source);

    print_tokens(&tokens)?;

    if errors.is_empty() {
        return Ok(());
    }

    if pretty {
        print_errors(&source, &path.display().to_string(), &errors);
    } else {
        for error in &errors {
            eprintln!("{}", error);
        }
    }

    Err(LoxError::Scan {
        count: errors.len(),
    })
}

/// Scan each line typed at the prompt on its own
///
/// Errors on one line are reported and the session carries on.
fn run_prompt() -> LoxResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']);
        let mut sink = StreamSink::stderr();
        let tokens = Scanner::new(input).scan_tokens(&mut sink);
        sink.flush()?;

        print_tokens(&tokens)?;
    }

    Ok(())
}
