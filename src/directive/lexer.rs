//! Line-oriented tokenizer for directive sources.

use crate::directive::DirectiveError;

/// A single token and the 1-based line it appeared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
}

/// Split `src` into tokens.
///
/// Tokens are separated by whitespace. A double-quoted token may contain
/// whitespace and `\"`. A `#` at the start of a token comments out the rest
/// of the line.
pub fn tokenize(src: &str) -> Result<Vec<Token>, DirectiveError> {
    let mut tokens = Vec::new();

    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;
        let mut chars = line.chars().peekable();

        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }
            if c == '#' {
                break;
            }

            let mut text = String::new();
            if c == '"' {
                chars.next();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' if chars.peek() == Some(&'"') => {
                            text.push('"');
                            chars.next();
                        }
                        '"' => {
                            closed = true;
                            break;
                        }
                        other => text.push(other),
                    }
                }
                if !closed {
                    return Err(DirectiveError::UnterminatedQuote { line: line_no });
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }
            }

            tokens.push(Token { text, line: line_no });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<String> {
        tokenize(src).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_whitespace_and_lines() {
        let tokens = tokenize("restrict_prefix  .\n\n  other\ta b").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Token { text: "restrict_prefix".into(), line: 1 });
        assert_eq!(tokens[2], Token { text: "other".into(), line: 3 });
    }

    #[test]
    fn test_quotes() {
        assert_eq!(texts(r#"restrict_prefix "a b""#), vec!["restrict_prefix", "a b"]);
        assert_eq!(texts(r#"x "say \"hi\"""#), vec!["x", "say \"hi\""]);
        assert_eq!(texts(r#"x """#), vec!["x", ""]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(texts("# all comment\nrestrict_prefix _ # trailing"), vec!["restrict_prefix", "_"]);
        // Only a leading '#' starts a comment.
        assert_eq!(texts("restrict_prefix a#b"), vec!["restrict_prefix", "a#b"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = tokenize("ok\nrestrict_prefix \"open").unwrap_err();
        assert_eq!(err, DirectiveError::UnterminatedQuote { line: 2 });
    }
}
