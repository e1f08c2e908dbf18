//! The substitution pass.
//!
//! Matching is always literal. With `ignore_case` the find string is escaped
//! and compiled into a case-insensitive regex; the replacement is inserted
//! verbatim, so `$1` or `${name}` in it are not expanded.

use regex::{NoExpand, RegexBuilder};

use crate::error::Result;

/// Text after substitution together with how many matches were replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub text: String,
    pub count: usize,
}

/// Replaces every non-overlapping occurrence of `find` in `text`, left to right.
pub fn replace_text(text: &str, find: &str, replace: &str, ignore_case: bool) -> Result<Replaced> {
    if !ignore_case {
        return Ok(Replaced {
            count: text.matches(find).count(),
            text: text.replace(find, replace),
        });
    }

    let matcher = RegexBuilder::new(&regex::escape(find))
        .case_insensitive(true)
        .build()?;

    let count = matcher.find_iter(text).count();
    let text = matcher.replace_all(text, NoExpand(replace)).into_owned();

    Ok(Replaced { text, count })
}
