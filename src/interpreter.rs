use std::fs;

use crate::{
    config::Config,
    error::LionError,
    evaluator::Evaluator,
    parser::parse,
    vocabulary::Vocabulary,
    word::Word,
};

/// A stack and vocabulary that persist across inputs. Each input either
/// runs to completion or leaves both exactly as they were.
#[derive(Debug, Default)]
pub struct Interpreter {
    evaluator: Evaluator,
    vocabulary: Vocabulary,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_evaluator(Evaluator::with_config(config))
    }

    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            vocabulary: Vocabulary::new(),
        }
    }

    pub fn stack(&self) -> &[Word] {
        self.evaluator.stack()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn render_stack(&self) -> String {
        self.evaluator.render_stack()
    }

    pub fn eval(&mut self, input: &str) -> Result<(), LionError> {
        let saved_stack = self.evaluator.snapshot();
        let saved_vocabulary = self.vocabulary.clone();

        let result = match parse(input) {
            Ok(quote) => self.evaluator.evaluate(&quote, &mut self.vocabulary),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            log::debug!("rolling back after {} error: {}", err.kind(), err);
            self.evaluator.restore(saved_stack);
            self.vocabulary = saved_vocabulary;
        }
        result
    }

    pub fn run_file(&mut self, path: &str) -> Result<(), LionError> {
        let source = fs::read_to_string(path).map_err(|err| LionError::io(path, &err))?;
        log::debug!("running {}", path);
        self.eval(&source)
    }
}
