//! Math typesetting for narration and summary text.
//!
//! The engine emits plain markup (`x_1`, `theta`, `sqrt(`, `^2`, ...).
//! The Unicode notation renders it as mathematical text; the ASCII
//! notation passes the raw markup through unchanged, so a terminal
//! without Unicode support degrades to readable formulas instead of
//! failing.

/// Which notation to render markup in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Unicode mathematical text (subscripts, Greek letters, radicals).
    #[default]
    Unicode,
    /// Raw markup, unchanged.
    Ascii,
}

/// Renders display markup into one of the two notations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Typesetter {
    /// The active notation.
    pub notation: Notation,
}

/// Ordered markup replacements; longer tokens first so that, e.g.,
/// `atan(` is rewritten before `tan(` could be considered.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("Delta x", "\u{0394}x"),
    ("Delta y", "\u{0394}y"),
    ("atan(", "tan\u{207b}\u{00b9}("),
    ("sqrt(", "\u{221a}("),
    ("theta", "\u{03b8}"),
    ("x_1", "x\u{2081}"),
    ("y_1", "y\u{2081}"),
    ("x_2", "x\u{2082}"),
    ("y_2", "y\u{2082}"),
    ("^2", "\u{00b2}"),
    (" deg", "\u{00b0}"),
    (" * ", " \u{00b7} "),
];

impl Typesetter {
    /// A Unicode typesetter.
    pub fn unicode() -> Self {
        Self {
            notation: Notation::Unicode,
        }
    }

    /// An ASCII (raw markup) typesetter.
    pub fn ascii() -> Self {
        Self {
            notation: Notation::Ascii,
        }
    }

    /// Render one markup string.
    pub fn render(&self, markup: &str) -> String {
        match self.notation {
            Notation::Ascii => markup.to_string(),
            Notation::Unicode => {
                let mut out = markup.to_string();
                for (from, to) in REPLACEMENTS {
                    out = out.replace(from, to);
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_renders_subscripts_and_greek() {
        let ts = Typesetter::unicode();
        assert_eq!(
            ts.render("m = (y_2 - y_1) / (x_2 - x_1)"),
            "m = (y\u{2082} - y\u{2081}) / (x\u{2082} - x\u{2081})"
        );
        assert_eq!(ts.render("theta = atan(m)"), "\u{03b8} = tan\u{207b}\u{00b9}(m)");
        assert_eq!(ts.render("45.00 deg"), "45.00\u{00b0}");
        assert_eq!(
            ts.render("Delta x = d / sqrt(1 + m^2)"),
            "\u{0394}x = d / \u{221a}(1 + m\u{00b2})"
        );
    }

    #[test]
    fn ascii_passes_markup_through() {
        let ts = Typesetter::ascii();
        let markup = "theta = atan(m) = 45.00 deg";
        assert_eq!(ts.render(markup), markup);
    }
}
