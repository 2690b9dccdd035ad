//! Flake8-compatible `# noqa` directives.
//!
//! Supports the two forms flake8 understands:
//! ```text
//! x = QVariant()  # noqa
//! x = QVariant()  # noqa: QGS410, QGS4
//! ```
//!
//! Listed codes are matched as prefixes, so `QGS4` covers every `QGS4xx`.

/// Parsed `# noqa` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Noqa {
    /// Bare `# noqa`: every code on the line is suppressed.
    All,
    /// `# noqa: CODE, ...`: only matching codes are suppressed.
    Codes(Vec<String>),
}

impl Noqa {
    /// Returns true if this directive suppresses `code`.
    #[must_use]
    pub fn suppresses(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Codes(codes) => codes.iter().any(|prefix| code.starts_with(prefix.as_str())),
        }
    }
}

/// Checks whether the physical `line` (1-indexed) of `content` suppresses `code`.
#[must_use]
pub fn is_suppressed(content: &str, line: usize, code: &str) -> bool {
    line.checked_sub(1)
        .and_then(|index| content.lines().nth(index))
        .and_then(parse_noqa)
        .is_some_and(|noqa| noqa.suppresses(code))
}

/// Parses a `# noqa` directive from a physical source line.
///
/// The directive may follow code on the same line. `noqa` is matched
/// case-insensitively; a colon with no codes behaves like a bare `# noqa`.
#[must_use]
pub fn parse_noqa(line: &str) -> Option<Noqa> {
    let hash = line.find('#')?;
    let comment = line[hash..].to_ascii_lowercase();

    let mut rest = comment.as_str();
    loop {
        let start = rest.find("noqa")?;
        let before = rest[..start].trim_end();
        let after = &rest[start + 4..];
        if before.ends_with('#') {
            return Some(parse_codes(&line_suffix(line, after)));
        }
        rest = after;
    }
}

// Recovers the original-case tail of `line` that `lowered_tail` was taken from.
fn line_suffix(line: &str, lowered_tail: &str) -> String {
    line.get(line.len() - lowered_tail.len()..)
        .unwrap_or(lowered_tail)
        .to_string()
}

fn parse_codes(after: &str) -> Noqa {
    let Some(list) = after.trim_start().strip_prefix(':') else {
        return Noqa::All;
    };

    let codes: Vec<String> = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .take_while(|s| s.is_empty() || looks_like_code(s))
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();

    if codes.is_empty() {
        Noqa::All
    } else {
        Noqa::Codes(codes)
    }
}

fn looks_like_code(s: &str) -> bool {
    let letters = s.chars().take_while(char::is_ascii_alphabetic).count();
    letters > 0 && s.len() > letters && s[letters..].chars().all(|c| c.is_ascii_digit())
}
