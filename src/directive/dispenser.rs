//! Token cursor used by handler unmarshallers.

use crate::directive::lexer::{tokenize, Token};
use crate::directive::DirectiveError;

/// Walks a token stream. The cursor starts before the first token.
#[derive(Debug, Clone)]
pub struct Dispenser {
    tokens: Vec<Token>,
    cursor: Option<usize>,
}

impl Dispenser {
    /// Tokenize `src` and position the cursor before the first token.
    pub fn new(src: &str) -> Result<Self, DirectiveError> {
        Ok(Self::from_tokens(tokenize(src)?))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: None,
        }
    }

    fn peek(&self) -> Option<&Token> {
        let next = self.cursor.map_or(0, |c| c + 1);
        self.tokens.get(next)
    }

    fn current(&self) -> Option<&Token> {
        self.cursor.and_then(|c| self.tokens.get(c))
    }

    /// Advance to the next token, regardless of line.
    pub fn next(&mut self) -> bool {
        if self.peek().is_some() {
            self.cursor = Some(self.cursor.map_or(0, |c| c + 1));
            true
        } else {
            false
        }
    }

    /// Advance only if the next token is on the current line.
    pub fn next_arg(&mut self) -> bool {
        match (self.current(), self.peek()) {
            (Some(cur), Some(next)) if cur.line == next.line => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Fill every slot from consecutive arguments on the current line.
    /// Returns false if the line runs out first.
    pub fn args(&mut self, targets: &mut [&mut String]) -> bool {
        for target in targets.iter_mut() {
            if !self.next_arg() {
                return false;
            }
            **target = self.val().to_string();
        }
        true
    }

    /// Text of the current token, empty before the first `next`.
    pub fn val(&self) -> &str {
        self.current().map(|t| t.text.as_str()).unwrap_or_default()
    }

    /// Line of the current token, 0 before the first `next`.
    pub fn line(&self) -> usize {
        self.current().map(|t| t.line).unwrap_or(0)
    }

    /// Argument-count error naming the directive on the current line.
    pub fn arg_err(&self) -> DirectiveError {
        let line = self.line();
        let directive = self
            .tokens
            .iter()
            .find(|t| t.line == line)
            .map(|t| t.text.clone())
            .unwrap_or_default();
        DirectiveError::ArgumentCount { directive, line }
    }

    /// Split the stream into one dispenser per directive line.
    pub fn segments(self) -> Vec<Dispenser> {
        let mut segments: Vec<Vec<Token>> = Vec::new();
        for token in self.tokens {
            match segments.last_mut() {
                Some(seg) if seg[0].line == token.line => seg.push(token),
                _ => segments.push(vec![token]),
            }
        }
        segments.into_iter().map(Dispenser::from_tokens).collect()
    }
}
