use crate::{
    config::MAX_PARSE_DEPTH,
    error::LionError,
    lexer::{self, Lexeme},
    word::{Quote, Word},
};

/// Parses source text into the root quote of a program.
pub fn parse(input: &str) -> Result<Quote, LionError> {
    let lexemes = lexer::lex(input)?;
    let quote = parse_lexemes(&lexemes)?;
    log::debug!("parsed {} top-level words", quote.len());
    Ok(quote)
}

/// Assembles nested quotes from a flat lexeme sequence. Each open paren
/// starts a new frame; the matching close paren folds it into its parent.
/// Nesting deeper than [`MAX_PARSE_DEPTH`] is rejected.
pub fn parse_lexemes(lexemes: &[Lexeme]) -> Result<Quote, LionError> {
    let mut frames: Vec<(usize, Vec<Word>)> = vec![(0, Vec::new())];

    for lexeme in lexemes {
        match lexeme.value.as_str() {
            "(" => {
                if frames.len() > MAX_PARSE_DEPTH {
                    return Err(LionError::syntax(lexeme.line, "quotes nested too deeply"));
                }
                frames.push((lexeme.line, Vec::new()));
            }
            ")" => {
                if frames.len() == 1 {
                    return Err(LionError::syntax(lexeme.line, "unmatched close paren"));
                }
                if let Some((_, words)) = frames.pop() {
                    push_word(&mut frames, Word::Quote(Quote::new(words)));
                }
            }
            _ => push_word(&mut frames, classify(lexeme)),
        }
    }

    match frames.pop() {
        Some((_, words)) if frames.is_empty() => Ok(Quote::new(words)),
        Some((line, _)) => Err(LionError::syntax(line, "unclosed paren")),
        None => Ok(Quote::default()),
    }
}

fn push_word(frames: &mut Vec<(usize, Vec<Word>)>, word: Word) {
    if let Some((_, words)) = frames.last_mut() {
        words.push(word);
    }
}

fn classify(lexeme: &Lexeme) -> Word {
    let value = lexeme.value.as_str();
    match value {
        "true" => Word::Boolean(true),
        "false" => Word::Boolean(false),
        _ if lexeme.is_string_literal() => {
            Word::String(unescape_literal(&value[1..value.len() - 1]))
        }
        _ => match parse_number(value) {
            Some(num) => Word::Number(num),
            None => Word::Symbol(value.to_string()),
        },
    }
}

/// Parses a decimal float: optional sign, digits with an optional fraction,
/// optional exponent. Words such as `inf` or `nan` are not numbers here.
pub fn parse_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }
    token.parse().ok()
}

/// Resolves the escapes a string literal needs to contain its own delimiter:
/// `\"` and `\\`. Other backslash sequences are kept for `print`.
fn unescape_literal(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Expands the backslash escapes `print` understands.
pub fn expand_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
