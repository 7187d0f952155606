use regex::Regex;

lazy_static! {
    static ref RE_COMMA_SPACING: Regex = Regex::new(r"\s*,\s*").unwrap();
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonical form of a line: every comma is followed by exactly one space,
/// every other whitespace run collapses to a single space, and the line is
/// ASCII-uppercased. Operand text is otherwise preserved verbatim. The
/// transform is a projection: canonical lines map to themselves.
pub(super) fn normalize_line(line: &str) -> String {
    let line = RE_COMMA_SPACING.replace_all(line, ", ");
    let line = RE_WHITESPACE_RUN.replace_all(&line, " ");
    line.trim().to_ascii_uppercase()
}
