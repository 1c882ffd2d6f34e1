//! User definitions. A [`Vocabulary`] clones in O(1) by sharing its map and
//! copies the map only when a shared instance is written to, so a
//! function-style call gets an independent copy without paying for one up
//! front.

use std::{collections::HashMap, fmt, rc::Rc};

use crate::{error::LionError, word::Quote};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionKind {
    /// Body runs against a private copy of the caller's vocabulary.
    Function,
    /// Body runs against the caller's own vocabulary.
    Macro,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Function => f.write_str("function"),
            Self::Macro => f.write_str("macro"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    pub kind: DefinitionKind,
    pub body: Quote,
}

impl Definition {
    pub fn is_function(&self) -> bool {
        self.kind == DefinitionKind::Function
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    entries: Rc<HashMap<String, Definition>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a new entry. Existing names are never overwritten.
    pub fn define(&mut self, name: &str, kind: DefinitionKind, body: Quote) -> Result<(), LionError> {
        if self.contains(name) {
            return Err(LionError::Definition(format!("{} is already defined", name)));
        }
        log::debug!("defining {} {} as {}", kind, name, body);
        Rc::make_mut(&mut self.entries).insert(name.to_string(), Definition { kind, body });
        Ok(())
    }

    /// Names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// True when both handles share the same storage.
    #[cfg(test)]
    pub fn shares_storage_with(&self, other: &Vocabulary) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}
