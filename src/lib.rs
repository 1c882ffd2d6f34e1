//! Lion: a small concatenative language.
//!
//! Source text is parsed into a [`Quote`] and run by an [`Evaluator`]
//! against a value stack and a caller-supplied [`Vocabulary`].
//!
//! ```
//! use lion::{parse, Evaluator, Vocabulary, Word};
//!
//! let program = parse("(dup *) (square) def 3 square").unwrap();
//! let mut evaluator = Evaluator::new();
//! evaluator.evaluate(&program, &mut Vocabulary::new()).unwrap();
//! assert_eq!(&[Word::Number(9.0)], evaluator.stack());
//! ```

pub mod builtins;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod vocabulary;
pub mod word;

pub use config::Config;
pub use error::{ErrorKind, LionError};
pub use evaluator::Evaluator;
pub use interpreter::Interpreter;
pub use parser::parse;
pub use vocabulary::{Definition, DefinitionKind, Vocabulary};
pub use word::{Quote, Word, WordType};
