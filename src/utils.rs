use std::borrow::Cow;

fn has_whitespace_runs(text: &str) -> bool {
    let mut previous_was_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if previous_was_space || ch != ' ' {
                return true;
            }
            previous_was_space = true;
        } else {
            previous_was_space = false;
        }
    }
    false
}

/// Strips whitespace from both ends and squashes every inner run of whitespace into a single space
///
/// # Examples
/// ```
/// assert_eq!(songlist::utils::trim_text("  Johann   Sebastian\tBach "), "Johann Sebastian Bach");
/// assert_eq!(songlist::utils::trim_text("Bach"), "Bach");
/// assert_eq!(songlist::utils::trim_text("   "), "");
/// ```
#[must_use]
pub fn trim_text(text: &str) -> Cow<str> {
    let trimmed = text.trim();
    if has_whitespace_runs(trimmed) {
        let mut out = String::with_capacity(trimmed.len());
        for word in trimmed.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        Cow::Owned(out)
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Uppercases the first character. Only used for display, never stored.
///
/// # Examples
/// ```
/// assert_eq!(songlist::utils::uc_first("bach"), "Bach");
/// assert_eq!(songlist::utils::uc_first("éclair"), "Éclair");
/// assert_eq!(songlist::utils::uc_first(""), "");
/// ```
#[must_use]
pub fn uc_first(text: &str) -> Cow<str> {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.to_uppercase().next() != Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_text_borrows_when_nothing_to_collapse() {
        assert!(matches!(trim_text("  Fugue No.2  "), Cow::Borrowed("Fugue No.2")));
        assert!(matches!(trim_text("Fugue  No.2"), Cow::Owned(_)));
    }

    #[test]
    fn trim_text_is_idempotent() {
        let once = trim_text(" \n Well-Tempered \t Clavier  ").into_owned();
        assert_eq!(once, "Well-Tempered Clavier");
        assert_eq!(trim_text(&once), once);
    }

    #[test]
    fn uc_first_leaves_non_letters_alone() {
        assert_eq!(uc_first("1st suite"), "1st suite");
        assert_eq!(uc_first("Bach"), "Bach");
        assert_eq!(uc_first("бах"), "Бах");
    }
}
