use std::ffi::{OsStr, OsString};
use std::fmt::Display;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use text_colorizer::Colorize;

use crate::error::{FtError, Result};

const TOOL: &str = "ftreplace";
const HELP_FLAG: &str = "--help";
const DEBUG_FLAG: &str = "--debug";
const IGNORE_CASE_FLAG: &str = "--ignore-case";

/// Raw command line as clap sees it.
#[derive(Parser, Debug)]
#[command(name = "ftreplace", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(short = 'i', value_name = "FILENAME")]
    input: Option<PathBuf>,

    #[arg(short = 'o', value_name = "FILENAME")]
    output: Option<PathBuf>,

    #[arg(short = 'f', value_name = "STRING", allow_hyphen_values = true)]
    find: Option<String>,

    #[arg(short = 'r', value_name = "STRING", allow_hyphen_values = true)]
    replace: Option<String>,

    #[arg(long)]
    ignore_case: bool,

    #[arg(long)]
    debug: bool,

    #[arg(long)]
    help: bool,
}

/// What a run does with the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Both find and replace are empty: copy the file as-is.
    Copy,
    Substitute,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub find: String,
    pub replace: String,
    pub ignore_case: bool,
    pub debug: bool,
    pub help: bool,
}

impl Arguments {
    /// Parses a full argument vector, program name first.
    pub fn parse_from<I, T>(args: I) -> Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let cli = Cli::try_parse_from(&args).map_err(usage_error)?;

        // Switches count wherever they appear, even as the value of -f/-r.
        Ok(Arguments {
            input: cli.input,
            output: cli.output,
            find: cli.find.unwrap_or_default(),
            replace: cli.replace.unwrap_or_default(),
            ignore_case: cli.ignore_case || has_switch(&args, IGNORE_CASE_FLAG),
            debug: cli.debug || has_switch(&args, DEBUG_FLAG),
            help: cli.help || has_switch(&args, HELP_FLAG),
        })
    }

    /// `--help` wins over everything else, even a malformed command line.
    pub fn wants_help<S: AsRef<OsStr>>(args: &[S]) -> bool {
        has_switch(args, HELP_FLAG)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.is_none() {
            return Err(FtError::Validation(
                "Destination filename was not specified.".to_string(),
            ));
        }

        // Find and replace come as a pair or not at all.
        if self.find.is_empty() && !self.replace.is_empty() {
            return Err(FtError::Validation(
                "Text to find was not specified.".to_string(),
            ));
        }
        if self.replace.is_empty() && !self.find.is_empty() {
            return Err(FtError::Validation(
                "Replacement text was not specified.".to_string(),
            ));
        }

        Ok(())
    }

    /// The file to read: `-i` if given, otherwise the output file (in-place edit).
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().or(self.output.as_deref())
    }

    pub fn mode(&self) -> Mode {
        if self.find.is_empty() && self.replace.is_empty() {
            Mode::Copy
        } else {
            Mode::Substitute
        }
    }
}

fn has_switch<S: AsRef<OsStr>>(args: &[S], switch: &str) -> bool {
    args.iter().skip(1).any(|arg| arg.as_ref() == switch)
}

fn usage_error(err: clap::Error) -> FtError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    FtError::Usage(message)
}

/// Prints the usage screen, colored only when stdout is a terminal.
pub fn print_usage() {
    print!("{}", usage_text(std::io::stdout().is_terminal()));
}

fn paint<D, F>(text: &'static str, color: bool, style: F) -> String
where
    D: Display,
    F: Fn(&'static str) -> D,
{
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn usage_text(color: bool) -> String {
    let tool = paint(TOOL, color, |s| s.green());
    let options = paint("[options]", color, |s| s.blue());
    let arg = |s: &'static str| paint(s, color, |s| s.yellow());

    format!(
        "{tool} - replaces text from input to output text file.

Usage: {tool} {options}

  -i <FILENAME>   File to process, optional.
  -o <FILENAME>   File to produce (output file).
  -f <STRING>     Text to find, optional together with -r.
  -r <STRING>     Replacement text, optional together with -f.
  --ignore-case   Performs case-insensitive string comparisons.
  --help          Displays how the tool is supposed to be used.
  --debug         Displays all values (filenames and strings).

Examples:
- Replace any frogs to oranges in the 'oranges.txt':
  {tool} -o oranges.txt -f {frog} -r {orange}

- Set the user to 'Guest' in the 'app.config':
  {tool} -i config.template -o app.config -f {user_placeholder} -r {guest}

- Just copy and rename the file:
  {tool} -i config.template -o app.config

- Replace 'user', 'USER', 'UsEr' etc. into 'User':
  {tool} -o a.txt -f {user} -r {user_cap} --ignore-case
",
        frog = arg("frog"),
        orange = arg("orange"),
        user_placeholder = arg("{{USER}}"),
        guest = arg("Guest"),
        user = arg("user"),
        user_cap = arg("User"),
    )
}
