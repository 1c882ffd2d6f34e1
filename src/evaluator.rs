use std::{
    fmt,
    io::{self, Write},
};

use crate::{
    builtins::Builtin,
    config::Config,
    error::LionError,
    vocabulary::{DefinitionKind, Vocabulary},
    word::{Quote, Word, WordType, ANY},
};

/// Executes quotes against a value stack. The vocabulary is supplied by the
/// caller on every call, so the evaluator itself holds no definitions.
pub struct Evaluator {
    stack: Vec<Word>,
    config: Config,
    depth: usize,
    output: Box<dyn Write>,
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("stack", &self.stack)
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            stack: Vec::new(),
            config,
            depth: 0,
            output: Box::new(io::stdout()),
        }
    }

    /// Redirects program output (`print`, `.s`) away from stdout.
    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.output = output;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stack(&self) -> &[Word] {
        &self.stack
    }

    /// A copy of the stack a host can hand back to [`Evaluator::restore`].
    pub fn snapshot(&self) -> Vec<Word> {
        self.stack.clone()
    }

    pub fn restore(&mut self, stack: Vec<Word>) {
        self.stack = stack;
        self.depth = 0;
    }

    pub fn push(&mut self, word: Word) {
        self.stack.push(word);
    }

    /// Pops the top word if its type is one of `allowed`. On a mismatch the
    /// word stays on the stack.
    pub fn take_type(&mut self, allowed: &[WordType]) -> Result<Word, LionError> {
        match self.stack.last() {
            Some(word) if allowed.contains(&word.word_type()) => {}
            top => return Err(mismatch(allowed, top)),
        }
        self.stack.pop().ok_or_else(|| mismatch(allowed, None))
    }

    pub fn take_any(&mut self) -> Result<Word, LionError> {
        self.take_type(ANY)
    }

    pub fn take_number(&mut self) -> Result<f64, LionError> {
        match self.take_type(&[WordType::Number])? {
            Word::Number(num) => Ok(num),
            other => Err(mismatch(&[WordType::Number], Some(&other))),
        }
    }

    pub fn take_string(&mut self) -> Result<String, LionError> {
        match self.take_type(&[WordType::String])? {
            Word::String(s) => Ok(s),
            other => Err(mismatch(&[WordType::String], Some(&other))),
        }
    }

    pub fn take_boolean(&mut self) -> Result<bool, LionError> {
        match self.take_type(&[WordType::Boolean])? {
            Word::Boolean(b) => Ok(b),
            other => Err(mismatch(&[WordType::Boolean], Some(&other))),
        }
    }

    pub fn take_quote(&mut self) -> Result<Quote, LionError> {
        match self.take_type(&[WordType::Quote])? {
            Word::Quote(q) => Ok(q),
            other => Err(mismatch(&[WordType::Quote], Some(&other))),
        }
    }

    /// Runs every word of `quote` in order against `vocabulary`.
    pub fn evaluate(&mut self, quote: &Quote, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
        if self.depth >= self.config.max_depth {
            return Err(LionError::DepthExceeded(self.config.max_depth));
        }
        self.depth += 1;
        let result = self.run(quote, vocabulary);
        self.depth -= 1;
        result
    }

    fn run(&mut self, quote: &Quote, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
        for word in quote.iter() {
            match word {
                Word::Symbol(name) => self.call(name, vocabulary)?,
                other => self.stack.push(other.clone()),
            }
        }
        Ok(())
    }

    /// Builtins shadow user definitions. A function body gets its own copy
    /// of the vocabulary; a macro body shares the caller's.
    fn call(&mut self, name: &str, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
        if let Some(builtin) = Builtin::from_name(name) {
            return builtin.eval(self, vocabulary);
        }

        let definition = match vocabulary.get(name) {
            Some(definition) => definition.clone(),
            None => return Err(LionError::UnknownWord(name.to_string())),
        };
        log::trace!("calling {} {} at depth {}", definition.kind, name, self.depth);

        match definition.kind {
            DefinitionKind::Function => {
                let mut private = vocabulary.clone();
                self.evaluate(&definition.body, &mut private)
            }
            DefinitionKind::Macro => self.evaluate(&definition.body, vocabulary),
        }
    }

    pub fn write_output(&mut self, text: &str) -> Result<(), LionError> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|err| LionError::io("<stdout>", &err))
    }

    /// The stack on one line, bottom first.
    pub fn render_stack(&self) -> String {
        let words: Vec<String> = self.stack.iter().map(Word::to_string).collect();
        format!("[{}]", words.join(" "))
    }
}

fn mismatch(allowed: &[WordType], found: Option<&Word>) -> LionError {
    LionError::Type {
        expected: WordType::describe(allowed),
        found: match found {
            Some(word) => word.word_type().tag().to_string(),
            None => "empty stack".to_string(),
        },
    }
}
