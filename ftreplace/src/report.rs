//! `--debug` dump printed after a run, whatever its outcome.

use std::fmt;

use crate::args::{Arguments, Mode};
use crate::Outcome;

/// Resolved values and result of one run, displayed as the debug dump.
pub struct DebugDump<'a> {
    pub args: &'a Arguments,
    pub outcome: Option<&'a Outcome>,
    pub exit_code: i32,
}

impl fmt::Display for DebugDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args;

        match &args.input {
            Some(path) => writeln!(f, "IN: {}", path.display())?,
            None => writeln!(f, "IN: (same as OUT)")?,
        }
        let output = match &args.output {
            Some(path) => path.display().to_string(),
            None => "(not specified)".to_string(),
        };
        writeln!(f, "OUT: {output}")?;

        // A finished run knows its mode; a failed one only has the arguments.
        let mode = self.outcome.map_or_else(|| args.mode(), |o| o.mode);
        match mode {
            Mode::Substitute => {
                let case = if args.ignore_case { " (case-insensitive)" } else { "" };
                let text = self
                    .outcome
                    .and_then(|o| o.text.as_deref())
                    .unwrap_or_default();
                writeln!(f, "FIND{case}: {}", args.find)?;
                writeln!(f, "REPLACE: {}", args.replace)?;
                writeln!(f, "TEXT: {text}")?;
                if let Some(outcome) = self.outcome {
                    writeln!(f, "REPLACED: {}", outcome.count)?;
                }
            }
            Mode::Copy => {
                writeln!(f, "FIND: (nothing, just copy)")?;
                writeln!(f, "REPLACE: (nothing, just copy)")?;
                writeln!(f, "TEXT: (unchanged contents of {output})")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "EXIT CODE: {}", self.exit_code)
    }
}

pub fn render(args: &Arguments, outcome: Option<&Outcome>, exit_code: i32) -> String {
    DebugDump {
        args,
        outcome,
        exit_code,
    }
    .to_string()
}

pub fn print(args: &Arguments, outcome: Option<&Outcome>, exit_code: i32) {
    print!("{}", render(args, outcome, exit_code));
}
