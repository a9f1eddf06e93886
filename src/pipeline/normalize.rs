//! Text normalisation: pure, stateless transforms applied to specific
//! resume fields during rendering.
//!
//! Two transforms come from the source document's conventions:
//!
//! - **Inline-link conversion** — `[label](target)` becomes an HTML anchor.
//!   Applied to most free-text fields so authors can write links in the
//!   familiar bracket syntax.
//! - **Date-separator normalisation** — each plain hyphen becomes a
//!   typographic en-dash. Applied *only* to date-range fields; company
//!   names, titles and descriptions may legitimately contain hyphens that
//!   must survive untouched.
//!
//! The escaping contract lives here too, and it is one rule applied
//! everywhere: escape raw text first, then run link conversion over the
//! escaped text. Generated markup is never re-escaped. [`html_field`] is the
//! only function the HTML renderer uses for link-bearing fields, so the rule
//! cannot drift per call site.

use once_cell::sync::Lazy;
use regex::Regex;

/// `[label](target)` where the label contains no `]` and the target no `)`.
static RE_INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Replace every non-overlapping `[label](target)` with an HTML anchor.
///
/// Matches are found left-to-right, case-sensitively, and all occurrences
/// are replaced. Non-matching text passes through unchanged; empty input
/// returns empty output.
pub fn convert_inline_links(text: &str) -> String {
    RE_INLINE_LINK
        .replace_all(text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Replace every plain hyphen with an en-dash (U+2013).
///
/// Only date-range fields (role dates, award dates, graduation dates) are
/// run through this; the renderer is responsible for that selectivity.
pub fn normalize_date_separators(text: &str) -> String {
    text.replace('-', "\u{2013}")
}

/// Escape the HTML special characters in raw scalar text.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// The single escaping rule for link-bearing fields: escape the raw text,
/// then convert inline links over the escaped text.
///
/// Brackets and parentheses are not HTML-escapable characters, so the link
/// pattern still matches after escaping — and both the visible label and the
/// `href` value come out escaped exactly once.
pub fn html_field(text: &str) -> String {
    convert_inline_links(&escape_html(text))
}

/// Rewrite inline-link markup for plain-text output.
///
/// The paginated output is plain text runs with no link annotations, so the
/// target must survive in the text itself: `[label](target)` becomes
/// `label (target)`. When the target is just the label re-spelled with a
/// scheme (`[example.org](https://example.org)`, a `mailto:` address), only
/// the label is kept; printing it twice helps nobody.
pub fn link_with_target(text: &str) -> String {
    RE_INLINE_LINK
        .replace_all(text, |caps: &regex::Captures| {
            let label = &caps[1];
            let target = &caps[2];
            let bare = target
                .strip_prefix("mailto:")
                .or_else(|| target.strip_prefix("https://"))
                .or_else(|| target.strip_prefix("http://"))
                .unwrap_or(target);
            if bare == label || bare.strip_suffix('/') == Some(label) {
                label.to_string()
            } else {
                format!("{label} ({target})")
            }
        })
        .into_owned()
}
