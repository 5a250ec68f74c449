//! Placeholder parser for `${name}` syntax
//!
//! Parses strings to extract placeholder references with their positions.
//! Parsing is permissive: malformed syntax yields no reference and the text
//! is left for the caller to pass through verbatim.

use std::ops::Range;

/// A parsed placeholder reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRef {
    /// The referenced property name (without `${` `}`).
    ///
    /// Names are opaque key strings; no trimming or charset restriction is
    /// applied.
    pub name: String,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

impl PlaceholderRef {
    /// Creates a new placeholder reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A syntax condition that [`parse_placeholders`] tolerates silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxIssue {
    /// A `${` with no closing `}`.
    Unterminated,
    /// A `${}` with no name between the braces.
    EmptyName,
}

/// Parses a string and extracts all placeholder references.
///
/// Scans left to right. A `${` without a closing `}` terminates the scan and
/// the remainder stays literal; an empty `${}` yields no reference.
///
/// # Examples
///
/// ```
/// use strata_application::resolver::parser::parse_placeholders;
///
/// let refs = parse_placeholders("jdbc://${db.host}:${db.port}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "db.host");
/// assert_eq!(refs[1].name, "db.port");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<PlaceholderRef> {
    let mut references = Vec::new();
    let mut cursor = 0;

    while let Some(open) = input[cursor..].find("${") {
        let start = cursor + open;
        let name_start = start + 2;

        // Unterminated reference: the rest of the value is literal text.
        let Some(close) = input[name_start..].find('}') else {
            break;
        };

        let name_end = name_start + close;
        let end = name_end + 1;
        let name = &input[name_start..name_end];
        if !name.is_empty() {
            references.push(PlaceholderRef::new(name, start..end));
        }
        cursor = end;
    }

    references
}

/// Reports the first syntax condition in the input that resolution would
/// silently pass through, if any.
///
/// Used by the opt-in verification path; resolution never consults this.
#[must_use]
pub fn find_syntax_issue(input: &str) -> Option<SyntaxIssue> {
    let mut cursor = 0;

    while let Some(open) = input[cursor..].find("${") {
        let name_start = cursor + open + 2;

        let Some(close) = input[name_start..].find('}') else {
            return Some(SyntaxIssue::Unterminated);
        };

        if close == 0 {
            return Some(SyntaxIssue::EmptyName);
        }
        cursor = name_start + close + 1;
    }

    None
}

/// Returns true if the input may contain a placeholder reference.
#[must_use]
pub fn has_placeholders(input: &str) -> bool {
    input.contains("${") && input.contains('}')
}

/// Extracts just the referenced names from the input without span info.
#[must_use]
pub fn extract_placeholder_names(input: &str) -> Vec<String> {
    parse_placeholders(input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_placeholder() {
        let refs = parse_placeholders("${name}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "name");
        assert_eq!(refs[0].span, 0..7);
    }

    #[test]
    fn test_parse_multiple_placeholders() {
        let refs = parse_placeholders("${key2} ${key3}");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "key2");
        assert_eq!(refs[1].name, "key3");
    }

    #[test]
    fn test_parse_embedded_in_text() {
        let refs = parse_placeholders("Value of key1 is ${key1}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "key1");
    }

    #[test]
    fn test_no_placeholders() {
        let refs = parse_placeholders("Hello, World!");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_unterminated_placeholder() {
        let refs = parse_placeholders("${name");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_unterminated_after_valid() {
        let refs = parse_placeholders("${a} and ${b");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "a");
    }

    #[test]
    fn test_empty_placeholder() {
        let refs = parse_placeholders("${}");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_adjacent_placeholders() {
        let refs = parse_placeholders("${a}${b}${c}");
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].name, "a");
        assert_eq!(refs[1].name, "b");
        assert_eq!(refs[2].name, "c");
    }

    #[test]
    fn test_bare_dollar_and_braces() {
        assert!(parse_placeholders("$name").is_empty());
        assert!(parse_placeholders("{name}").is_empty());
        assert!(parse_placeholders("$ {name}").is_empty());
    }

    #[test]
    fn test_dotted_property_name() {
        let refs = parse_placeholders("${jdbc.url.template}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "jdbc.url.template");
    }

    #[test]
    fn test_name_is_not_trimmed() {
        let refs = parse_placeholders("${ name }");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, " name ");
    }

    #[test]
    fn test_span_positions() {
        let input = "Reference ${key4} here";
        let refs = parse_placeholders(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(&input[refs[0].span.clone()], "${key4}");
    }

    #[test]
    fn test_find_syntax_issue_clean() {
        assert_eq!(find_syntax_issue("no placeholders"), None);
        assert_eq!(find_syntax_issue("${a} then ${b}"), None);
    }

    #[test]
    fn test_find_syntax_issue_unterminated() {
        assert_eq!(
            find_syntax_issue("${a} then ${b"),
            Some(SyntaxIssue::Unterminated)
        );
    }

    #[test]
    fn test_find_syntax_issue_empty_name() {
        assert_eq!(find_syntax_issue("oops ${}"), Some(SyntaxIssue::EmptyName));
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("${name}"));
        assert!(has_placeholders("prefix ${name} suffix"));
        assert!(!has_placeholders("plain text"));
        assert!(!has_placeholders("${incomplete"));
    }

    #[test]
    fn test_extract_placeholder_names() {
        let names = extract_placeholder_names("${a} and ${b} and ${c}");
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
