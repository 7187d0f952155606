//! Reduces untrusted student submissions to a constrained, canonical subset
//! of the MSX86 teaching dialect. Every line that does not match a
//! whitelisted shape is dropped, so free text never reaches the grading
//! prompt.

mod classify;
mod normalize;
mod vocabulary;

pub use classify::{classify, LineClass};
pub use vocabulary::{DIRECTIVES, MNEMONICS};

use regex::Regex;

lazy_static! {
    static ref RE_BLANK_RUN: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Sanitizes assembly source: strips comments and blank lines, keeps labels,
/// ORG/DB/DW/EQU directives and whitelisted instructions in their original
/// order, normalizes each kept line, and drops everything else.
///
/// Never fails; an empty result means the input contained no sanitizable
/// content and the submission should be rejected by the caller.
pub fn sanitize(input: &str) -> String {
    let mut kept = Vec::new();

    for raw in physical_lines(input) {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(normalized) = classify::apply(line) {
            kept.push(normalized);
        }
    }

    // Kept lines are never blank, so the collapse is a second safety net in
    // case the rule list ever emits one.
    let joined = kept.join("\n");
    RE_BLANK_RUN.replace_all(&joined, "\n").trim().to_owned()
}

/// CR, LF and CRLF all terminate a physical line. A CRLF pair yields one
/// extra empty line, which is discarded with every other blank line.
fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c| c == '\r' || c == '\n')
}

fn strip_comment(line: &str) -> &str {
    // Ignore everything after comment
    match line.find(';') {
        Some(i) => line.split_at(i).0,
        None => line,
    }
}
