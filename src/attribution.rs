//! Attribution strings: an HTML and a Markdown citation for this tool,
//! copyable to the clipboard.
//!
//! The title and URL come from the package metadata unless overridden on
//! the command line. Escaping matters here: an arbitrary title must not
//! be able to break out of the anchor tag or the Markdown link.

/// The citation source: a title and a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    title: String,
    url: String,
}

impl Attribution {
    /// Create an attribution from an explicit title and URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// The default attribution, from the package metadata.
    pub fn from_package() -> Self {
        Self::new(
            concat!("Gradian - ", env!("CARGO_PKG_DESCRIPTION")),
            env!("CARGO_PKG_REPOSITORY"),
        )
    }

    /// The title, verbatim.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The URL, verbatim.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTML citation: an anchor tag wrapping the escaped title.
    pub fn html(&self) -> String {
        format!(
            "Attribution: <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&self.url),
            escape_html(&self.title)
        )
    }

    /// Markdown citation: a link with the escaped title as its label.
    pub fn markdown(&self) -> String {
        format!(
            "[{}]({})",
            escape_markdown_label(&self.title),
            escape_markdown_url(&self.url)
        )
    }
}

/// Escape HTML metacharacters.
fn escape_html(s: &str) -> String {
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

/// Escape the bracket characters that would end a Markdown link label.
fn escape_markdown_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape the parentheses that would end a Markdown link target.
fn escape_markdown_url(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_embeds_title_and_url_verbatim() {
        let a = Attribution::new("Slope Calculator", "https://example.org/slope");
        assert_eq!(
            a.html(),
            "Attribution: <a href=\"https://example.org/slope\" target=\"_blank\" \
             rel=\"noopener noreferrer\">Slope Calculator</a>"
        );
    }

    #[test]
    fn html_metacharacters_cannot_break_the_anchor() {
        let a = Attribution::new("<script>\"&'", "https://example.org/");
        let html = a.html();
        assert!(html.contains("&lt;script&gt;&quot;&amp;&#39;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn markdown_link_survives_brackets_and_parens() {
        let a = Attribution::new("A [tool] here", "https://example.org/a(b)");
        assert_eq!(a.markdown(), "[A \\[tool\\] here](https://example.org/a%28b%29)");
    }

    #[test]
    fn package_attribution_uses_the_repository_url() {
        let a = Attribution::from_package();
        assert_eq!(a.url(), env!("CARGO_PKG_REPOSITORY"));
        assert!(a.title().starts_with("Gradian"));
    }
}
