//! Verbatim escaping of LaTeX special characters
//!
//! A symbol name like `\alpha` or `x_1` must be escaped before it can be
//! shown literally inside `\texttt{...}`, otherwise the LaTeX engine would
//! interpret it instead of printing it.

/// Escape a symbol string for literal display inside `\texttt{...}`.
///
/// Single pass over the characters:
/// - `\` becomes `\textbackslash{}`
/// - `{` and `}` become `\{` and `\}`
/// - `^` becomes `\^{}` (plain `\^` would consume the next character as an
///   accent argument)
/// - `_` becomes `\_`
///
/// Everything else passes through unchanged.
pub fn escape_verbatim(symbol: &str) -> String {
    let mut out = String::with_capacity(symbol.len());
    for c in symbol.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '^' => out.push_str("\\^{}"),
            '_' => out.push_str("\\_"),
            _ => out.push(c),
        }
    }
    out
}

/// Invert [`escape_verbatim`], recovering the original symbol string.
///
/// Longest escape sequences are tried first so `\textbackslash{}` is never
/// misread as `\t` followed by plain text.
pub fn unescape_verbatim(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while !rest.is_empty() {
        if let Some(r) = rest.strip_prefix("\\textbackslash{}") {
            out.push('\\');
            rest = r;
        } else if let Some(r) = rest.strip_prefix("\\^{}") {
            out.push('^');
            rest = r;
        } else if let Some(r) = rest.strip_prefix("\\{") {
            out.push('{');
            rest = r;
        } else if let Some(r) = rest.strip_prefix("\\}") {
            out.push('}');
            rest = r;
        } else if let Some(r) = rest.strip_prefix("\\_") {
            out.push('_');
            rest = r;
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape_verbatim("\\alpha"), "\\textbackslash{}alpha");
    }

    #[test]
    fn test_escape_braces() {
        assert_eq!(escape_verbatim("\\frac{}{}"), "\\textbackslash{}frac\\{\\}\\{\\}");
    }

    #[test]
    fn test_escape_caret_and_underscore() {
        assert_eq!(escape_verbatim("x^2"), "x\\^{}2");
        assert_eq!(escape_verbatim("x_1"), "x\\_1");
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_verbatim("abc 123"), "abc 123");
    }

    #[test]
    fn test_escape_each_special_exactly_once() {
        let escaped = escape_verbatim("\\hat{x}_i^2");
        assert_eq!(escaped.matches("\\textbackslash{}").count(), 1);
        assert_eq!(escaped.matches("\\{").count(), 1);
        assert_eq!(escaped.matches("\\_").count(), 1);
        assert_eq!(escaped.matches("\\^{}").count(), 1);
    }

    #[test]
    fn test_unescape_round_trip() {
        let symbols = ["\\alpha", "x_1", "x^2", "\\hat{x}", "\\sum_{i=1}^{n}", "plain"];
        for symbol in symbols {
            assert_eq!(unescape_verbatim(&escape_verbatim(symbol)), symbol);
        }
    }
}
