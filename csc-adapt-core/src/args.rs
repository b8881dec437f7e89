//! Flattened compiler argument line

use std::borrow::Cow;
use std::fmt;

/// Ordered compiler arguments.
///
/// Order is load-bearing for the compiler: tokens are never reordered or
/// deduplicated. `Display` renders the flattened form handed to the
/// compiler, each token followed by a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentLine {
    tokens: Vec<String>,
}

impl ArgumentLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ArgumentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{} ", quote_arg(token))?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentLine {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ArgumentLine {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}

/// Quote one argument using the Windows command-line convention.
///
/// Plain tokens are returned unchanged. Empty tokens and tokens with
/// whitespace or double quotes are wrapped in quotes; backslashes are
/// doubled only where they precede a quote.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    let needs_quotes = arg.is_empty() || arg.contains([' ', '\t', '\n', '\u{b}', '"']);
    if !needs_quotes {
        return Cow::Borrowed(arg);
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                quoted.extend(std::iter::repeat('\\').take(backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }
    // 结尾的反斜杠要翻倍，否则会吞掉收尾引号
    quoted.extend(std::iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_order_and_trailing_space() {
        let line: ArgumentLine = ["/out:app.exe", "/src/a.cs", "/src/b.cs"].into_iter().collect();
        assert_eq!(line.to_string(), "/out:app.exe /src/a.cs /src/b.cs ");
    }

    #[test]
    fn test_duplicates_survive() {
        let mut line = ArgumentLine::new();
        line.push("/debug");
        line.push("/debug");
        assert_eq!(line.len(), 2);
        assert_eq!(line.to_string(), "/debug /debug ");
    }

    #[test]
    fn test_empty_line_renders_empty() {
        assert_eq!(ArgumentLine::new().to_string(), "");
        assert!(ArgumentLine::new().is_empty());
    }

    #[test]
    fn test_quote_plain_token_is_borrowed() {
        assert!(matches!(quote_arg("/target:exe"), Cow::Borrowed("/target:exe")));
    }

    #[test]
    fn test_quote_whitespace() {
        assert_eq!(quote_arg("C:\\My Sources\\a.cs"), "\"C:\\My Sources\\a.cs\"");
        assert_eq!(quote_arg(""), "\"\"");
    }

    #[test]
    fn test_quote_embedded_quotes_and_trailing_backslash() {
        assert_eq!(quote_arg("/define:\"X\""), "\"/define:\\\"X\\\"\"");
        assert_eq!(quote_arg("C:\\out dir\\"), "\"C:\\out dir\\\\\"");
    }
}
