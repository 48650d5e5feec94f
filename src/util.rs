//! Utility functions for md2page

/// Escapes HTML special characters for text and attribute values.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        // Arrange
        let text = r#"<a href="x">Tom & 'Jerry'</a>"#;

        // Act
        let escaped = escape_html(text);

        // Assert
        assert_eq!(
            escaped,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        // Arrange & Act & Assert
        assert_eq!(escape_html("目录 plain"), "目录 plain");
    }

    #[test]
    fn test_capitalize() {
        // Arrange & Act & Assert
        assert_eq!(capitalize("note"), "Note");
        assert_eq!(capitalize("Warning"), "Warning");
        assert_eq!(capitalize(""), "");
    }
}
