use url::Url;

pub const AUTHOR_REQUIRED: &str = "Enter the composer";
pub const TITLE_REQUIRED: &str = "Enter the title";
pub const LINK_INVALID: &str = "Enter a valid link, e.g. https://www.youtube.com/watch?v=...";

/// One message slot per form field. An empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub error_author: String,
    pub error_title: String,
    pub error_link: String,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error_author.is_empty() && self.error_title.is_empty() && self.error_link.is_empty()
    }
}

/// Whether `link` looks like something a browser could open: an `http`/`https` URL with a host
///
/// # Examples
/// ```
/// use songlist::validation::is_valid_link;
///
/// assert!(is_valid_link("https://www.youtube.com/watch?v=Zj_psrTUW_w"));
/// assert!(is_valid_link("http://youtu.be/Zj_psrTUW_w"));
/// assert!(!is_valid_link("not-a-url"));
/// assert!(!is_valid_link("ftp://example.com/song.mp3"));
/// assert!(!is_valid_link("https://you\ntu.be/x"));
/// ```
#[must_use]
pub fn is_valid_link(link: &str) -> bool {
    // the parser silently drops tabs and newlines, which would then be stored as typed
    if link.trim().chars().any(char::is_control) {
        log::debug!("rejecting link {link:?}: contains control characters");
        return false;
    }

    match Url::parse(link) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(err) => {
            log::debug!("rejecting link {link:?}: {err}");
            false
        }
    }
}

/// Checks the three song fields. Callers pass `author` and `title` already trimmed;
/// `link` is checked as-is, and a missing or empty link is allowed.
#[must_use]
pub fn validate(author: &str, title: &str, link: Option<&str>) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if author.is_empty() {
        errors.error_author = String::from(AUTHOR_REQUIRED);
    }
    if title.is_empty() {
        errors.error_title = String::from(TITLE_REQUIRED);
    }
    if let Some(link) = link.filter(|link| !link.is_empty()) {
        if !is_valid_link(link) {
            errors.error_link = String::from(LINK_INVALID);
        }
    }

    errors
}
