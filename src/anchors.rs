/// Anchors whose `href` starts with `#` are intercepted.
pub const SAME_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id referenced by a same-document `href`.
///
/// Returns `None` for `#` alone and for anything that is not a bare fragment,
/// so a lookup is only attempted for a real id.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// What a click on a same-page anchor does once the default navigation is
/// prevented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// `#` alone, not a fragment, or no element carries the id.
    Ignore,
    ScrollAndFocus(&'a str),
}

/// Resolve `href` against the document; `exists` reports whether an element
/// with the given id is present.
pub fn resolve(href: &str, exists: impl Fn(&str) -> bool) -> AnchorAction<'_> {
    match fragment_id(href) {
        Some(id) if exists(id) => AnchorAction::ScrollAndFocus(id),
        _ => AnchorAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_hash() {
        assert_eq!(fragment_id("#meriendas"), Some("meriendas"));
        assert_eq!(fragment_id("#a#b"), Some("a#b"));
    }

    #[test]
    fn bare_hash_and_other_urls_yield_nothing() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/page#x"), None);
        assert_eq!(fragment_id("https://example.org/#x"), None);
    }

    #[test]
    fn present_target_is_scrolled_to() {
        let action = resolve("#meriendas", |id| id == "meriendas");
        assert_eq!(action, AnchorAction::ScrollAndFocus("meriendas"));
    }

    #[test]
    fn missing_target_does_nothing() {
        assert_eq!(resolve("#no-such-section", |_| false), AnchorAction::Ignore);
    }

    #[test]
    fn bare_hash_never_looks_anything_up() {
        let action = resolve("#", |_| panic!("no lookup for a bare hash"));
        assert_eq!(action, AnchorAction::Ignore);
    }
}
