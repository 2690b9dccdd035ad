//! Near-miss string matching.

/// Returns true if `a` can be turned into `b` with at most one substitution,
/// insertion or deletion.
///
/// Works on Unicode scalar values rather than bytes.
#[must_use]
pub fn is_within_one_edit(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > 1 {
        return false;
    }

    if a.len() == b.len() {
        return a.iter().zip(&b).filter(|(x, y)| x != y).count() <= 1;
    }

    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };
    let (mut i, mut j) = (0, 0);
    let mut skipped = false;
    while i < longer.len() && j < shorter.len() {
        if longer[i] == shorter[j] {
            i += 1;
            j += 1;
            continue;
        }
        if skipped {
            return false;
        }
        skipped = true;
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        assert!(is_within_one_edit("", ""));
        assert!(is_within_one_edit("TEMPORARY_OUTPUT", "TEMPORARY_OUTPUT"));
    }

    #[test]
    fn substitution() {
        assert!(is_within_one_edit("TEMPORARY_0UTPUT", "TEMPORARY_OUTPUT"));
        assert!(!is_within_one_edit("TEMPORARY_0UTPTT", "TEMPORARY_OUTPUT"));
    }

    #[test]
    fn insertion_and_deletion() {
        assert!(is_within_one_edit("TEMPORARY_OUTPT", "TEMPORARY_OUTPUT"));
        assert!(is_within_one_edit("TEMPORARY_OUTPUTS", "TEMPORARY_OUTPUT"));
        assert!(is_within_one_edit("XTEMPORARY_OUTPUT", "TEMPORARY_OUTPUT"));
        assert!(!is_within_one_edit("TEMPORARY_OUTPUT", "TEMPRARY_OUTPT"));
        assert!(!is_within_one_edit("TEMPORARYOUTPT", "TEMPORARY_OUTPUT"));
    }

    #[test]
    fn length_gap_over_one() {
        assert!(!is_within_one_edit("TEMP", "TEMPORARY_OUTPUT"));
        assert!(!is_within_one_edit("ab", ""));
    }

    #[test]
    fn symmetric() {
        let pairs = [("abc", "abd"), ("abc", "ab"), ("abc", "xbcd"), ("", "a")];
        for (a, b) in pairs {
            assert_eq!(is_within_one_edit(a, b), is_within_one_edit(b, a), "{a} {b}");
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(is_within_one_edit("TEMPORÄRY_OUTPUT", "TEMPORARY_OUTPUT"));
        assert!(is_within_one_edit("é", ""));
    }
}
