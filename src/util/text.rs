use std::borrow::Cow;

/// The five characters that are reserved in HTML markup.
const RESERVED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escapes free text for insertion into HTML element content.
///
/// Rewrites the five reserved markup characters (`& < > " '`) to their
/// entity forms so feed-supplied text cannot inject markup.
///
/// Returns `Cow::Borrowed` when the input contains nothing to escape,
/// avoiding an allocation on the common clean-title path.
///
/// # Examples
///
/// ```
/// use feedcards::util::escape_html;
///
/// assert_eq!(escape_html("Ship it"), "Ship it");
/// assert_eq!(
///     escape_html("<script>alert(1)</script>"),
///     "&lt;script&gt;alert(1)&lt;/script&gt;"
/// );
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(RESERVED) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escapes text for insertion into a double-quoted HTML attribute value.
///
/// The element-content entity set already covers the quoting characters an
/// attribute position needs, so this shares [`escape_html`]'s table; the
/// separate name marks the call sites that sit in attribute context (link
/// `href`s, mainly).
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_html(s)
}
