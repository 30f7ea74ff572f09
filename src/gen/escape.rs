use std::{borrow::Cow, fmt};

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Replaces `& < > " '` with their entities. Nothing else is touched.
pub fn encode_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| entity(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut encoded = String::with_capacity(text.len() + 16);
    encoded.push_str(&text[..first]);
    for c in text[first..].chars() {
        match entity(c) {
            Some(entity) => encoded.push_str(entity),
            None => encoded.push(c),
        }
    }
    Cow::Owned(encoded)
}

/// [encode_html], with a missing value encoding to the empty string.
pub fn encode_optional_html(text: Option<&str>) -> Cow<'_, str> {
    text.map(encode_html).unwrap_or_default()
}

/// Writes the [fmt::Display] output of the wrapped value with HTML special characters encoded.
pub struct Escaped<T>(pub T);

impl<T: fmt::Display> fmt::Display for Escaped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::write(&mut EncodingWriter(f), format_args!("{}", self.0))
    }
}

struct EncodingWriter<'a, 'b>(&'a mut fmt::Formatter<'b>);

impl fmt::Write for EncodingWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(&encode_html(s))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn encodes_the_five_special_characters() {
        assert_eq!(
            encode_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_everything_else_alone() {
        let text = "Squats — 3 x 12 / 90s rest; ✓ ümlaut\n\t";
        assert!(matches!(encode_html(text), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn encodes_existing_entities_again() {
        assert_eq!(encode_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn missing_is_empty() {
        assert_eq!(encode_optional_html(None), "");
        assert_eq!(encode_optional_html(Some("'")), "&#39;");
    }

    #[test]
    fn display_adapter() {
        assert_eq!(Escaped("<b>").to_string(), "&lt;b&gt;");
        assert_eq!(Escaped(12).to_string(), "12");
        assert_eq!(format!("[{}]", Escaped("\"q\"")), "[&quot;q&quot;]");
    }
}
