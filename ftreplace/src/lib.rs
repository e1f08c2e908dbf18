//! File text replace
//!
//! Copies an input text file to an output file, replacing every occurrence
//! of a find string with a replacement string on the way. Without `-i` the
//! output file is edited in place; without `-f`/`-r` the file is just copied.

pub mod args;
pub mod error;
pub mod fileio;
pub mod replace;
pub mod report;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use args::{Arguments, Mode};
pub use error::{FtError, Result};
pub use replace::{replace_text, Replaced};

pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

// =============================================================================
// Tracing Initialization
// =============================================================================

/// Default log filter; `--debug` raises it to `ftreplace=debug`.
pub fn log_filter(debug: bool) -> &'static str {
    if debug {
        "ftreplace=debug"
    } else {
        "ftreplace=warn"
    }
}

/// Initialize tracing/logging with the given filter level.
///
/// Logs go to stderr; stdout belongs to usage, errors and the debug dump.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// =============================================================================
// Execution
// =============================================================================

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub mode: Mode,
    /// Final text, only kept when a substitution happened.
    pub text: Option<String>,
    pub count: usize,
}

/// Validates the arguments, then reads, transforms and writes the file.
///
/// Nothing is read or written when validation fails.
pub fn run(args: &Arguments) -> Result<Outcome> {
    args.validate()?;

    let (Some(input), Some(output)) = (args.input_path(), args.output.as_deref()) else {
        return Err(FtError::Validation(
            "Destination filename was not specified.".to_string(),
        ));
    };

    tracing::debug!(?input, ?output, mode = ?args.mode(), "Resolved arguments");

    match args.mode() {
        Mode::Copy => {
            let bytes = fileio::load_bytes(input)?;
            fileio::save(output, &bytes)?;
            tracing::info!("Copied {:?} to {:?}", input, output);

            Ok(Outcome {
                mode: Mode::Copy,
                text: None,
                count: 0,
            })
        }
        Mode::Substitute => {
            let text = fileio::load_text(input)?;
            let replaced = replace_text(&text, &args.find, &args.replace, args.ignore_case)?;
            fileio::save(output, &replaced.text)?;
            tracing::info!(
                "Replaced {} occurrence(s) of {:?} while writing {:?}",
                replaced.count,
                args.find,
                output
            );

            Ok(Outcome {
                mode: Mode::Substitute,
                text: Some(replaced.text),
                count: replaced.count,
            })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn arguments(input: Option<PathBuf>, output: Option<PathBuf>, find: &str, replace: &str) -> Arguments {
        Arguments {
            input,
            output,
            find: find.to_string(),
            replace: replace.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(false), "ftreplace=warn");
        assert_eq!(log_filter(true), "ftreplace=debug");
    }

    #[test]
    fn test_run_substitutes_into_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("config.template");
        let output = dir.path().join("app.config");
        fs::write(&input, "<user>{{USER}}</user>\n").unwrap();

        let outcome = run(&arguments(
            Some(input.clone()),
            Some(output.clone()),
            "{{USER}}",
            "Guest",
        ))
        .unwrap();

        assert_eq!(outcome.mode, Mode::Substitute);
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.text.as_deref(), Some("<user>Guest</user>\n"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "<user>Guest</user>\n");
        assert_eq!(fs::read_to_string(&input).unwrap(), "<user>{{USER}}</user>\n");
    }

    #[test]
    fn test_run_copy_mode_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        let bytes: Vec<u8> = vec![0xEF, 0xBB, 0xBF, b'h', b'i', 0xFF, 0x00, b'\r', b'\n'];
        fs::write(&input, &bytes).unwrap();

        let outcome = run(&arguments(Some(input), Some(output.clone()), "", "")).unwrap();

        assert_eq!(outcome.mode, Mode::Copy);
        assert_eq!(outcome.text, None);
        assert_eq!(fs::read(&output).unwrap(), bytes);
    }

    #[test]
    fn test_run_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oranges.txt");
        fs::write(&path, "a frog, another frog").unwrap();

        let outcome = run(&arguments(None, Some(path.clone()), "frog", "orange")).unwrap();

        assert_eq!(outcome.count, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a orange, another orange");
    }

    #[test]
    fn test_run_validation_happens_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("untouched.txt");
        fs::write(&output, "original").unwrap();

        let err = run(&arguments(None, Some(output.clone()), "frog", "")).unwrap_err();

        assert!(matches!(err, FtError::Validation(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "original");
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("out.txt");

        let err = run(&arguments(Some(input), Some(output.clone()), "", "")).unwrap_err();

        assert!(matches!(err, FtError::Read { .. }));
        assert!(!output.exists());
    }
}
