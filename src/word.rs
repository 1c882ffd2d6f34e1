//! The value model: every runtime value is a [`Word`].

use std::{fmt, rc::Rc};

#[derive(Clone, Debug, PartialEq)]
pub enum Word {
    Number(f64),
    String(String),
    Boolean(bool),
    Symbol(String),
    Quote(Quote),
}

/// Variant tag of a [`Word`], used by `type` and by the typed stack guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordType {
    Number,
    String,
    Boolean,
    Symbol,
    Quote,
}

pub const ANY: &[WordType] = &[
    WordType::Number,
    WordType::String,
    WordType::Boolean,
    WordType::Symbol,
    WordType::Quote,
];

impl WordType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Number => "num",
            Self::String => "str",
            Self::Boolean => "bool",
            Self::Symbol => "symb",
            Self::Quote => "block",
        }
    }

    /// Renders a set of accepted types as `{num, str}`.
    pub fn describe(types: &[WordType]) -> String {
        let tags: Vec<&str> = types.iter().map(WordType::tag).collect();
        format!("{{{}}}", tags.join(", "))
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Word {
    pub fn word_type(&self) -> WordType {
        match self {
            Self::Number(_) => WordType::Number,
            Self::String(_) => WordType::String,
            Self::Boolean(_) => WordType::Boolean,
            Self::Symbol(_) => WordType::Symbol,
            Self::Quote(_) => WordType::Quote,
        }
    }

    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }

    pub fn string(value: &str) -> Self {
        Self::String(value.to_string())
    }

    /// Text form used by the `string` builtin: strings are taken verbatim,
    /// everything else is rendered as it would be printed.
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Symbol(s) => f.write_str(s),
            Self::Quote(q) => write!(f, "{}", q),
        }
    }
}

impl From<f64> for Word {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Word {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Quote> for Word {
    fn from(value: Quote) -> Self {
        Self::Quote(value)
    }
}

/// An immutable sequence of words. Cloning shares the underlying storage;
/// every "modifying" operation builds a new quote.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Quote(Rc<Vec<Word>>);

impl Quote {
    pub fn new(words: Vec<Word>) -> Self {
        Quote(Rc::new(words))
    }

    pub fn words(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }

    pub fn cons(&self, head: Word) -> Quote {
        let mut words = Vec::with_capacity(self.len() + 1);
        words.push(head);
        words.extend(self.iter().cloned());
        Quote::new(words)
    }

    pub fn uncons(&self) -> Option<(Word, Quote)> {
        let (head, tail) = self.0.split_first()?;
        Some((head.clone(), Quote::new(tail.to_vec())))
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &Quote) -> Quote {
        let mut words = Vec::with_capacity(self.len() + other.len());
        words.extend(self.iter().cloned());
        words.extend(other.iter().cloned());
        Quote::new(words)
    }

    /// The symbol name if this quote is exactly one symbol, as `def` expects.
    pub fn single_symbol(&self) -> Option<&str> {
        match self.words() {
            [Word::Symbol(name)] => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<Vec<Word>> for Quote {
    fn from(words: Vec<Word>) -> Self {
        Quote::new(words)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("(")?;
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", word)?;
        }
        f.write_str(")")
    }
}
