use std::{iter::Peekable, str::Chars};

use crate::error::LionError;

/// One raw token together with the line it started on.
#[derive(Clone, Debug, PartialEq)]
pub struct Lexeme {
    pub value: String,
    pub line: usize,
}

impl Lexeme {
    fn new(value: &str, line: usize) -> Self {
        Lexeme {
            value: value.to_string(),
            line,
        }
    }

    pub fn is_string_literal(&self) -> bool {
        self.value.len() >= 2 && self.value.starts_with('"') && self.value.ends_with('"')
    }
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || c == '"' || c == '#'
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Reads a string literal, keeping the delimiters and escapes intact.
    fn string_literal(&mut self) -> Result<Lexeme, LionError> {
        let line = self.line;
        let mut value = String::new();
        if let Some(open) = self.bump() {
            value.push(open);
        }
        loop {
            match self.bump() {
                Some('"') => {
                    value.push('"');
                    return Ok(Lexeme { value, line });
                }
                Some('\\') => {
                    value.push('\\');
                    match self.bump() {
                        Some(escaped) => value.push(escaped),
                        None => break,
                    }
                }
                Some(c) => value.push(c),
                None => break,
            }
        }
        Err(LionError::syntax(line, "unterminated string"))
    }

    fn bare_word(&mut self) -> Lexeme {
        let line = self.line;
        let mut value = String::new();
        while let Some(&c) = self.chars.peek() {
            if is_delimiter(c) {
                break;
            }
            value.push(c);
            self.bump();
        }
        Lexeme { value, line }
    }

    fn run(mut self) -> Result<Vec<Lexeme>, LionError> {
        let mut lexemes = Vec::new();
        while let Some(&c) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.bump();
                }
                '#' => self.skip_comment(),
                '(' | ')' => {
                    lexemes.push(Lexeme::new(&c.to_string(), self.line));
                    self.bump();
                }
                '"' => lexemes.push(self.string_literal()?),
                _ => lexemes.push(self.bare_word()),
            }
        }
        Ok(lexemes)
    }
}

/// Splits source text into raw tokens. Comments and whitespace are dropped,
/// parentheses always stand alone, and string literals keep their quotes.
pub fn lex(input: &str) -> Result<Vec<Lexeme>, LionError> {
    let lexemes = Lexer::new(input).run()?;
    log::trace!("lexed {} lexemes", lexemes.len());
    Ok(lexemes)
}
