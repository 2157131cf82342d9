#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn dump(source: &str) -> (String, Result<(), DumpError>) {
    let mut out = Vec::new();
    let result = dump_tokens(&mut out, source);
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn dumps_default_source() {
    let (out, result) = dump(DEFAULT_SOURCE);
    assert!(result.is_ok());
    assert_eq!(
        out,
        "1 + 2 + 3 +4\n\
         \tint, 1\n\
         \tplus, None\n\
         \tint, 2\n\
         \tplus, None\n\
         \tint, 3\n\
         \tplus, None\n\
         \tint, 4\n\
         \teof, None\n"
    );
}

#[test]
fn dumps_empty_source() {
    let (out, result) = dump("");
    assert!(result.is_ok());
    assert_eq!(out, "\n\teof, None\n");
}

#[test]
fn keeps_tokens_before_error() {
    let (out, result) = dump("9 - $");
    assert_eq!(out, "9 - $\n\tint, 9\n\tminus, None\n");
    let err = result.unwrap_err();
    assert!(matches!(err, DumpError::Lex(LexError { ch: '$', .. })));
    assert_eq!(err.to_string(), "can't tokenize '$' at 4..5");
}

#[test]
fn write_failure_is_reported() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = dump_tokens(&mut Broken, "1").unwrap_err();
    assert!(matches!(err, DumpError::Io(_)));
    assert!(err.to_string().starts_with("failed to write output"));
}
