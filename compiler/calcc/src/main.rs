//! Calc lexer CLI
//!
//! Scans an expression and prints one line per token.

use std::io::{self, Write};
use std::sync::Once;

use calc_lexer::{LexError, Scanner};

/// Input scanned when no expression is given.
const DEFAULT_SOURCE: &str = "1 + 2 + 3 +4";

/// Failure while dumping tokens.
#[derive(Debug, thiserror::Error)]
enum DumpError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Enable with `RUST_LOG=calc_lexer=trace` to see every token.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = match args.as_slice() {
        [] => DEFAULT_SOURCE,
        [flag] if flag == "-h" || flag == "--help" => {
            print_usage();
            return;
        }
        [expr] => expr.as_str(),
        _ => {
            eprintln!("error: expected at most one expression");
            print_usage();
            std::process::exit(2);
        }
    };

    tracing::debug!(len = source.len(), "scanning");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = dump_tokens(&mut out, source) {
        // Flush whatever was printed before the failure so it precedes the diagnostic.
        let _ = out.flush();
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Write `source`, then one `\t<kind>, <value>` line per token.
///
/// Tokens are written as they are scanned, so a [`LexError`] leaves every
/// token before it in `out`.
fn dump_tokens(out: &mut impl Write, source: &str) -> Result<(), DumpError> {
    writeln!(out, "{source}")?;
    for token in Scanner::new(source) {
        writeln!(out, "\t{}", token?)?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: calc-lex [EXPR]");
    eprintln!();
    eprintln!("Scans EXPR (default: {DEFAULT_SOURCE:?}) and prints its tokens.");
    eprintln!("Set RUST_LOG=calc_lexer=trace for scanner tracing.");
}

#[cfg(test)]
mod tests;
