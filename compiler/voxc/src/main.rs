//! `vox` — tokenize a Vox source file and print the token stream.
//!
//! Exit codes: 0 on clean input, 1 when the input produced diagnostics,
//! 2 on usage or I/O errors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

use vox_chars::{Language, Registry};
use vox_lexer::CleanToken;

const USAGE: &str = "usage: vox <file> [--emit-preprocessed <path>] [--quiet]";

struct Args {
    input: PathBuf,
    emit_preprocessed: Option<PathBuf>,
    quiet: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut emit_preprocessed = None;
    let mut quiet = false;
    let mut args = std::env::args_os().skip(1);
    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--emit-preprocessed") => {
                let path = args
                    .next()
                    .ok_or_else(|| "--emit-preprocessed needs a path".to_owned())?;
                emit_preprocessed = Some(PathBuf::from(path));
            }
            Some("--quiet") => quiet = true,
            Some(flag) if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}"));
            }
            _ => {
                if input.replace(PathBuf::from(&arg)).is_some() {
                    return Err("expected exactly one input file".to_owned());
                }
            }
        }
    }
    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(Args {
        input,
        emit_preprocessed,
        quiet,
    })
}

static INIT_TRACING: Once = Once::new();

/// Opt-in logging: a subscriber is installed only when `RUST_LOG` is set,
/// so normal runs print nothing but tokens and diagnostics.
fn init_tracing() {
    INIT_TRACING.call_once(|| {
        if std::env::var_os("RUST_LOG").is_some() {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
    });
}

fn render(token: &CleanToken) -> String {
    let language = token.language.map_or("-", Language::code);
    let mut out = format!(
        "{:>5}  {:<14} {:<4} {:?}",
        token.line,
        token.kind,
        language,
        String::from_utf8_lossy(&token.text),
    );
    if token.newlines > 0 {
        out.push_str(&format!("  newlines={}", token.newlines));
    }
    if token.is_literal_escape {
        out.push_str("  literal");
    }
    if token.in_quote {
        out.push_str("  quoted");
    }
    out
}

fn run(args: &Args) -> ExitCode {
    let registry = Registry::standard();
    let output = match vox_lexer::tokenize_file(registry, &args.input) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("vox: {err}");
            return ExitCode::from(2);
        }
    };

    if let Some(path) = &args.emit_preprocessed {
        if let Err(err) = std::fs::write(path, &output.preprocessed) {
            eprintln!("vox: cannot write {}: {err}", path.display());
            return ExitCode::from(2);
        }
    }

    if !args.quiet {
        for token in &output.tokens {
            println!("{}", render(token));
        }
    }
    for diagnostic in &output.diagnostics {
        eprintln!("error: {diagnostic}");
    }

    if output.diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn main() -> ExitCode {
    init_tracing();
    match parse_args() {
        Ok(args) => run(&args),
        Err(message) => {
            eprintln!("vox: {message}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}
