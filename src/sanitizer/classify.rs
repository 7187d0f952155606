use super::normalize::normalize_line;
use super::vocabulary::MNEMONICS;
use regex::Regex;

/// What a comment-stripped line turned out to be. Classification is
/// stateless, looks only at the line itself, and happens on the line's
/// canonical form, so spacing and case never affect the outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineClass {
    Blank,
    Label,
    Directive,
    Instruction,
    Unrecognized,
}

// Character classes are ASCII-explicit on purpose: `\w` would admit
// non-ASCII identifiers into the whitelist. Directive tokens must be
// followed by whitespace or end of line; a glued comma or other punctuation
// would survive into the output as part of the leading token.
lazy_static! {
    static ref RE_LABEL: Regex = Regex::new(r"^[A-Za-z_][0-9A-Za-z_]*:$").unwrap();
    static ref RE_ORG: Regex = Regex::new(r"(?i)^ORG(\s|$)").unwrap();
    static ref RE_EQU: Regex = Regex::new(r"(?i)^[A-Za-z_][0-9A-Za-z_]*\s+EQU(\s|$)").unwrap();
    static ref RE_LABELED_DATA: Regex =
        Regex::new(r"(?i)^[A-Za-z_][0-9A-Za-z_]*\s+(DB|DW)(\s|$)").unwrap();
    static ref RE_BARE_DATA: Regex = Regex::new(r"(?i)^(DB|DW)(\s|$)").unwrap();
}

struct Rule {
    class: LineClass,
    matches: fn(&str) -> bool,
}

/// The classification contract, first match wins. The order is part of the
/// contract: a line like `DB:` is a label, not a data directive, because the
/// label rule comes first.
static RULES: &[Rule] = &[
    Rule {
        class: LineClass::Label,
        matches: is_label,
    },
    Rule {
        class: LineClass::Directive,
        matches: is_org,
    },
    Rule {
        class: LineClass::Directive,
        matches: is_equ,
    },
    Rule {
        class: LineClass::Directive,
        matches: is_labeled_data,
    },
    Rule {
        class: LineClass::Directive,
        matches: is_bare_data,
    },
    Rule {
        class: LineClass::Instruction,
        matches: is_instruction,
    },
];

fn is_label(line: &str) -> bool {
    RE_LABEL.is_match(line)
}

fn is_org(line: &str) -> bool {
    RE_ORG.is_match(line)
}

fn is_equ(line: &str) -> bool {
    RE_EQU.is_match(line)
}

fn is_labeled_data(line: &str) -> bool {
    RE_LABELED_DATA.is_match(line)
}

fn is_bare_data(line: &str) -> bool {
    RE_BARE_DATA.is_match(line)
}

fn is_instruction(line: &str) -> bool {
    let first = line.split_whitespace().next().unwrap_or("");
    MNEMONICS.contains(first.to_ascii_uppercase().as_str())
}

/// Classifies a line that already had its comment stripped. The line is
/// brought into canonical form first: `mov ,al` normalizes to `MOV, AL`,
/// whose leading token `MOV,` is outside the mnemonic set, so comma-glued
/// lines are unrecognized rather than kept in a shape that would not
/// survive a second pass.
pub fn classify(line: &str) -> LineClass {
    classify_canonical(&normalize_line(line))
}

fn classify_canonical(line: &str) -> LineClass {
    if line.is_empty() {
        return LineClass::Blank;
    }

    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map(|rule| rule.class)
        .unwrap_or(LineClass::Unrecognized)
}

/// Runs the rule list over the canonical form of a line: the canonical text
/// if some rule claims it, `None` for blank and unrecognized lines. Kept
/// lines are fixed points of this function by construction.
pub(super) fn apply(line: &str) -> Option<String> {
    let canonical = normalize_line(line);

    match classify_canonical(&canonical) {
        LineClass::Blank | LineClass::Unrecognized => None,
        _ => Some(canonical),
    }
}
