/// Resolve a scraped href against `origin`.
///
/// Hrefs starting with `http` are returned as is, anything else gets the
/// origin prepended without any normalization. Links are the identity of a
/// stored project, so they must stay byte-for-byte stable.
pub fn join_url(origin: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_owned()
    } else {
        format!("{}{}", origin, href)
    }
}

/// Escape the characters that are significant inside HTML text and
/// double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_href_gets_origin() {
        assert_eq!(
            join_url("https://wokwi.com", "/projects/123"),
            "https://wokwi.com/projects/123"
        );
    }

    #[test]
    fn relative_href_is_prefixed_verbatim() {
        let origin = "https://wokwi.com";
        assert_eq!(join_url(origin, "/projects/Contrôle"), "https://wokwi.com/projects/Contrôle");
        assert_eq!(join_url(origin, "/projects/a b"), "https://wokwi.com/projects/a b");
        assert_eq!(join_url(origin, "/a/../projects/2"), "https://wokwi.com/a/../projects/2");
        assert_eq!(join_url(origin, "//cdn.example.com/x"), "https://wokwi.com//cdn.example.com/x");
        assert_eq!(join_url(origin, "projects/1"), "https://wokwi.comprojects/1");
    }

    #[test]
    fn absolute_href_is_unchanged() {
        assert_eq!(
            join_url("https://wokwi.com", "https://example.com/x"),
            "https://example.com/x"
        );
        assert_eq!(
            join_url("https://wokwi.com", "http://example.com/x?y=1#z"),
            "http://example.com/x?y=1#z"
        );
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Contrôleur"), "Contrôleur");
    }
}
