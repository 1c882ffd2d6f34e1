use std::{convert::TryFrom, fs};

use crate::{
    error::LionError,
    evaluator::Evaluator,
    parser::{expand_escapes, parse, parse_number},
    vocabulary::{DefinitionKind, Vocabulary},
    word::{Quote, Word, WordType},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The deeper operand is the left-hand side.
    pub fn eval(&self, evaluator: &mut Evaluator) -> Result<(), LionError> {
        let right = evaluator.take_number()?;
        let left = evaluator.take_number()?;
        let result = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    return Err(LionError::Domain("division by zero".to_string()));
                }
                left / right
            }
        };
        evaluator.push(Word::Number(result));
        Ok(())
    }
}

impl TryFrom<&str> for Operator {
    type Error = LionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            v => Err(LionError::UnknownWord(v.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Builtin {
    Arithmetic(Operator),
    And,
    Cat,
    Cons,
    Def,
    Defm,
    Dip,
    Drop,
    Dup,
    Eq,
    Eval,
    Exit,
    Ifte,
    Join,
    Not,
    Number,
    Or,
    Over,
    Parse,
    Print,
    Quote,
    Read,
    Show,
    Split,
    String,
    Swap,
    Symbol,
    Type,
    Uncons,
    Unwrap,
    Write,
}

/// Every name that resolves to a builtin, aliases included.
pub const NAMES: &[&str] = &[
    "+", "-", "*", "/", "and", "apply", "cat", "cons", "def", "defm", "defmacro", "defun", "dip",
    "drop", "dup", "eq?", "eval", "exit", "ifte", "join", "not", "number", "or", "over", "parse",
    "print", "quote", ".s", "read", "split", "string", "swap", "symbol", "type", "uncons",
    "unwrap", "wrap", "write",
];

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        if let Ok(operator) = Operator::try_from(name) {
            return Some(Self::Arithmetic(operator));
        }
        let builtin = match name {
            "and" => Self::And,
            "cat" => Self::Cat,
            "cons" => Self::Cons,
            "def" | "defun" => Self::Def,
            "defm" | "defmacro" => Self::Defm,
            "dip" => Self::Dip,
            "drop" => Self::Drop,
            "dup" => Self::Dup,
            "eq?" => Self::Eq,
            "eval" | "apply" => Self::Eval,
            "exit" => Self::Exit,
            "ifte" => Self::Ifte,
            "join" => Self::Join,
            "not" => Self::Not,
            "number" => Self::Number,
            "or" => Self::Or,
            "over" => Self::Over,
            "parse" => Self::Parse,
            "print" => Self::Print,
            "quote" | "wrap" => Self::Quote,
            "read" => Self::Read,
            ".s" => Self::Show,
            "split" => Self::Split,
            "string" => Self::String,
            "swap" => Self::Swap,
            "symbol" => Self::Symbol,
            "type" => Self::Type,
            "uncons" => Self::Uncons,
            "unwrap" => Self::Unwrap,
            "write" => Self::Write,
            _ => return None,
        };
        Some(builtin)
    }

    /// Keep every arm a single call: this frame sits on the host stack once
    /// per nested evaluation.
    pub fn eval(&self, evaluator: &mut Evaluator, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
        match self {
            Self::Arithmetic(operator) => operator.eval(evaluator),
            Self::Dup => dup(evaluator),
            Self::Drop => evaluator.take_any().map(|_| ()),
            Self::Swap => swap(evaluator),
            Self::Over => over(evaluator),
            Self::Dip => dip(evaluator, vocabulary),
            Self::Eval => eval_quote(evaluator, vocabulary),
            Self::Quote => wrap(evaluator),
            Self::Unwrap => splice(evaluator),
            Self::Cat => cat(evaluator),
            Self::Cons => cons(evaluator),
            Self::Uncons => uncons(evaluator),
            Self::Def => define(evaluator, vocabulary, DefinitionKind::Function),
            Self::Defm => define(evaluator, vocabulary, DefinitionKind::Macro),
            Self::Parse => parse_source(evaluator),
            Self::Type => type_tag(evaluator),
            Self::String => stringify(evaluator),
            Self::Number => to_number(evaluator),
            Self::Symbol => to_symbol(evaluator),
            Self::Print => print(evaluator),
            Self::Show => show(evaluator),
            Self::Read => read(evaluator),
            Self::Write => write(evaluator),
            Self::Split => split(evaluator),
            Self::Join => join(evaluator),
            Self::Ifte => ifte(evaluator, vocabulary),
            Self::And => logic(evaluator, |left, right| left && right),
            Self::Or => logic(evaluator, |left, right| left || right),
            Self::Not => not(evaluator),
            Self::Eq => equal(evaluator),
            Self::Exit => Err(LionError::Exit),
        }
    }
}

impl TryFrom<&str> for Builtin {
    type Error = LionError;

    fn try_from(input: &str) -> Result<Builtin, Self::Error> {
        Self::from_name(input).ok_or_else(|| LionError::UnknownWord(input.into()))
    }
}

/// Joins two quotes or two strings, deeper operand first.
fn cat(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let joined = match evaluator.take_type(&[WordType::Quote, WordType::String])? {
        Word::Quote(top) => Word::Quote(evaluator.take_quote()?.concat(&top)),
        Word::String(top) => {
            let mut below = evaluator.take_string()?;
            below.push_str(&top);
            Word::String(below)
        }
        other => {
            return Err(LionError::Type {
                expected: WordType::describe(&[WordType::Quote, WordType::String]),
                found: other.word_type().tag().to_string(),
            })
        }
    };
    evaluator.push(joined);
    Ok(())
}

/// `body (name) def`: the name must be a quote holding a single symbol that
/// is neither a builtin nor already defined.
fn define(evaluator: &mut Evaluator, vocabulary: &mut Vocabulary, kind: DefinitionKind) -> Result<(), LionError> {
    let name_quote = evaluator.take_quote()?;
    let body = evaluator.take_quote()?;
    let name = name_quote.single_symbol().ok_or_else(|| {
        LionError::Definition(format!(
            "word for new vocabulary entry must be a single symbol, got {}",
            name_quote
        ))
    })?;
    if Builtin::try_from(name).is_ok() {
        return Err(LionError::Definition(format!("{} is a builtin", name)));
    }
    vocabulary.define(name, kind, body)
}

fn dup(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let word = evaluator.take_any()?;
    evaluator.push(word.clone());
    evaluator.push(word);
    Ok(())
}

fn swap(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let top = evaluator.take_any()?;
    let below = evaluator.take_any()?;
    evaluator.push(top);
    evaluator.push(below);
    Ok(())
}

fn over(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let top = evaluator.take_any()?;
    let below = evaluator.take_any()?;
    evaluator.push(below.clone());
    evaluator.push(top);
    evaluator.push(below);
    Ok(())
}

/// `W (Q) dip`: runs Q with W set aside, then puts W back on top.
fn dip(evaluator: &mut Evaluator, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
    let quote = evaluator.take_quote()?;
    let saved = evaluator.take_any()?;
    evaluator.evaluate(&quote, vocabulary)?;
    evaluator.push(saved);
    Ok(())
}

fn eval_quote(evaluator: &mut Evaluator, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
    let quote = evaluator.take_quote()?;
    evaluator.evaluate(&quote, vocabulary)
}

fn wrap(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let word = evaluator.take_any()?;
    evaluator.push(Word::Quote(Quote::new(vec![word])));
    Ok(())
}

fn splice(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let quote = evaluator.take_quote()?;
    for word in quote.iter() {
        evaluator.push(word.clone());
    }
    Ok(())
}

fn cons(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let quote = evaluator.take_quote()?;
    let head = evaluator.take_any()?;
    evaluator.push(Word::Quote(quote.cons(head)));
    Ok(())
}

fn uncons(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let quote = evaluator.take_quote()?;
    let (head, tail) = quote
        .uncons()
        .ok_or_else(|| LionError::Domain("cannot uncons an empty quote".to_string()))?;
    evaluator.push(head);
    evaluator.push(Word::Quote(tail));
    Ok(())
}

fn parse_source(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let source = evaluator.take_string()?;
    evaluator.push(Word::Quote(parse(&source)?));
    Ok(())
}

fn type_tag(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let word = evaluator.take_any()?;
    evaluator.push(Word::string(word.word_type().tag()));
    Ok(())
}

fn stringify(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let word = evaluator.take_any()?;
    evaluator.push(Word::String(word.to_text()));
    Ok(())
}

fn to_number(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let text = evaluator.take_string()?;
    let num = parse_number(text.trim())
        .ok_or_else(|| LionError::Domain(format!("cannot convert {:?} to a number", text)))?;
    evaluator.push(Word::Number(num));
    Ok(())
}

fn to_symbol(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let name = evaluator.take_string()?;
    if name.is_empty() {
        return Err(LionError::Domain("cannot make a symbol from an empty string".to_string()));
    }
    evaluator.push(Word::Symbol(name));
    Ok(())
}

fn print(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let text = evaluator.take_string()?;
    evaluator.write_output(&expand_escapes(&text))
}

fn show(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let line = format!("{}\n", evaluator.render_stack());
    evaluator.write_output(&line)
}

fn read(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let path = evaluator.take_string()?;
    let contents = fs::read_to_string(&path).map_err(|err| LionError::io(path.as_str(), &err))?;
    evaluator.push(Word::String(contents));
    Ok(())
}

/// `content path write`: creates or truncates the file.
fn write(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let path = evaluator.take_string()?;
    let contents = evaluator.take_string()?;
    fs::write(&path, contents).map_err(|err| LionError::io(path.as_str(), &err))
}

fn split(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let text = evaluator.take_string()?;
    let chars = text.chars().map(|c| Word::String(c.to_string())).collect();
    evaluator.push(Word::Quote(Quote::new(chars)));
    Ok(())
}

fn join(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let quote = evaluator.take_quote()?;
    let mut joined = String::new();
    for word in quote.iter() {
        match word {
            Word::String(s) => joined.push_str(s),
            other => {
                return Err(LionError::Type {
                    expected: WordType::describe(&[WordType::String]),
                    found: other.word_type().tag().to_string(),
                })
            }
        }
    }
    evaluator.push(Word::String(joined));
    Ok(())
}

/// `cond (then) (else) ifte`: the chosen branch gets a private vocabulary.
fn ifte(evaluator: &mut Evaluator, vocabulary: &mut Vocabulary) -> Result<(), LionError> {
    let otherwise = evaluator.take_quote()?;
    let then = evaluator.take_quote()?;
    let condition = evaluator.take_boolean()?;
    let branch = if condition { then } else { otherwise };
    evaluator.evaluate(&branch, &mut vocabulary.clone())
}

fn logic(evaluator: &mut Evaluator, op: fn(bool, bool) -> bool) -> Result<(), LionError> {
    let right = evaluator.take_boolean()?;
    let left = evaluator.take_boolean()?;
    evaluator.push(Word::Boolean(op(left, right)));
    Ok(())
}

fn not(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let value = evaluator.take_boolean()?;
    evaluator.push(Word::Boolean(!value));
    Ok(())
}

fn equal(evaluator: &mut Evaluator) -> Result<(), LionError> {
    let right = evaluator.take_any()?;
    let left = evaluator.take_any()?;
    evaluator.push(Word::Boolean(left == right));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::evaluator::test::{run, run_in, SharedBuffer};

    fn num(n: f64) -> Word {
        Word::Number(n)
    }

    fn quote(words: Vec<Word>) -> Word {
        Word::Quote(Quote::new(words))
    }

    fn type_error(expected: &str, found: &str) -> LionError {
        LionError::Type {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    fn printed(input: &str) -> Result<String, LionError> {
        let buffer = SharedBuffer::default();
        let mut evaluator = Evaluator::new().with_output(Box::new(buffer.clone()));
        run_in(&mut evaluator, &mut Vocabulary::new(), input)?;
        Ok(buffer.contents())
    }

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert!(Builtin::from_name(name).is_some(), "{} should be a builtin", name);
        }
        assert_eq!(Err(LionError::UnknownWord("nope".into())), Builtin::try_from("nope"));
        assert_eq!(Ok(Builtin::Arithmetic(Operator::Divide)), Builtin::try_from("/"));
    }

    #[test]
    fn stack_shuffling() {
        assert_eq!(Ok(vec![num(1.0), num(1.0)]), run("1 dup"));
        assert_eq!(Ok(vec![num(1.0)]), run("1 2 drop"));
        assert_eq!(Ok(vec![num(2.0), num(1.0)]), run("1 2 swap"));
        assert_eq!(Ok(vec![num(1.0), num(2.0), num(1.0)]), run("1 2 over"));
        assert_eq!(Err(type_error("{num, str, bool, symb, block}", "empty stack")), run("dup"));
    }

    #[test]
    fn dup_copies_any_word() {
        for literal in &["1", "\"s\"", "true", "(a (b))"] {
            let stack = run(&format!("{} dup", literal)).unwrap();
            assert_eq!(2, stack.len());
            assert_eq!(stack[0], stack[1]);
        }
    }

    #[test]
    fn swap_twice_is_identity() {
        for pair in &["1 2", "\"a\" (b)", "true sym", "(1) (2)"] {
            assert_eq!(run(pair), run(&format!("{} swap swap", pair)));
        }
    }

    #[test]
    fn dip_runs_under_top() {
        assert_eq!(Ok(vec![num(3.0), num(10.0)]), run("1 2 10 (+) dip"));
    }

    #[test]
    fn eval_and_apply() {
        assert_eq!(Ok(vec![num(6.0)]), run("(2 3 *) eval"));
        assert_eq!(Ok(vec![num(6.0)]), run("(2 3 *) apply"));
        assert_eq!(Err(type_error("{block}", "num")), run("1 eval"));
    }

    #[test]
    fn quote_wrap_unwrap() {
        assert_eq!(Ok(vec![quote(vec![num(1.0)])]), run("1 quote"));
        assert_eq!(Ok(vec![quote(vec![quote(vec![])])]), run("() wrap"));
        assert_eq!(Ok(vec![num(1.0), Word::symbol("dup")]), run("(1 dup) unwrap"));
    }

    #[test]
    fn cat_appends_top_after_below() {
        assert_eq!(
            Ok(vec![quote(vec![num(1.0), num(2.0), num(3.0), num(4.0)])]),
            run("(1 2) (3 4) cat")
        );
        assert_eq!(Ok(vec![Word::string("abcd")]), run(r#""ab" "cd" cat"#));
        assert_eq!(Err(type_error("{block}", "str")), run(r#""ab" (cd) cat"#));
        assert_eq!(Err(type_error("{block, str}", "num")), run("(1) 2 cat"));
    }

    #[test]
    fn cons_and_uncons() {
        let tail = quote(vec![num(2.0), num(3.0)]);
        assert_eq!(Ok(vec![num(1.0), tail.clone()]), run("(1 2 3) uncons"));
        assert_eq!(
            Ok(vec![quote(vec![num(1.0), num(2.0), num(3.0)])]),
            run("1 (2 3) cons")
        );
        assert_eq!(Ok(vec![num(1.0), tail]), run("1 (2 3) cons uncons"));
        assert_eq!(Ok(vec![quote(vec![]), quote(vec![])]), run("() () cons uncons"));
        assert_eq!(
            Err(LionError::Domain("cannot uncons an empty quote".into())),
            run("() uncons")
        );
    }

    #[test]
    fn cons_does_not_touch_shared_quote() {
        assert_eq!(
            Ok(vec![quote(vec![num(2.0)]), quote(vec![num(1.0), num(2.0)])]),
            run("(2) dup 1 swap cons")
        );
    }

    #[test]
    fn def_rejects_bad_names() {
        assert_eq!(
            Err(LionError::Definition(
                "word for new vocabulary entry must be a single symbol, got (a b)".into()
            )),
            run("(1) (a b) def")
        );
        assert_eq!(
            Err(LionError::Definition(
                "word for new vocabulary entry must be a single symbol, got (\"a\")".into()
            )),
            run(r#"(1) ("a") defm"#)
        );
        assert_eq!(Err(LionError::Definition("dup is a builtin".into())), run("(1) (dup) def"));
        assert_eq!(Err(type_error("{block}", "num")), run("(1) 5 def"));
    }

    #[test]
    fn redefinition_leaves_vocabulary_unchanged() {
        let mut evaluator = Evaluator::new();
        let mut vocabulary = Vocabulary::new();
        run_in(&mut evaluator, &mut vocabulary, "(1) (one) def").unwrap();
        let before = vocabulary.clone();
        assert_eq!(
            Err(LionError::Definition("one is already defined".into())),
            run_in(&mut evaluator, &mut vocabulary, "(2) (one) defm")
        );
        assert_eq!(before, vocabulary);
        assert_eq!(Ok(vec![num(1.0)]), run_in(&mut evaluator, &mut vocabulary, "one"));
    }

    #[test]
    fn long_form_definitions() {
        let mut vocabulary = Vocabulary::new();
        run_in(&mut Evaluator::new(), &mut vocabulary, "(1) (f) defun (2) (m) defmacro").unwrap();
        assert!(vocabulary.get("f").unwrap().is_function());
        assert!(!vocabulary.get("m").unwrap().is_function());
    }

    #[test]
    fn parse_builtin() {
        assert_eq!(
            Ok(vec![quote(vec![num(1.0), num(2.0), Word::symbol("+")])]),
            run(r#""1 2 +" parse"#)
        );
        assert_eq!(Ok(vec![num(3.0)]), run(r#""1 2 +" parse eval"#));
        assert_eq!(Err(LionError::syntax(1, "unclosed paren")), run(r#""(" parse"#));
    }

    #[test]
    fn type_tags() {
        assert_eq!(
            Ok(vec![
                Word::string("num"),
                Word::string("str"),
                Word::string("bool"),
                Word::string("symb"),
                Word::string("block"),
            ]),
            run(r#"1 type "a" type true type (x) uncons drop type () type"#)
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(Ok(vec![Word::string("2.5")]), run("2.5 string"));
        assert_eq!(Ok(vec![Word::string("(1 \"a\")")]), run(r#"(1 "a") string"#));
        assert_eq!(Ok(vec![Word::string("a")]), run(r#""a" string"#));
        assert_eq!(Ok(vec![num(-4.0)]), run(r#"" -4 " number"#));
        assert_eq!(
            Err(LionError::Domain("cannot convert \"four\" to a number".into())),
            run(r#""four" number"#)
        );
        assert_eq!(Err(type_error("{str}", "num")), run("4 number"));
        assert_eq!(Ok(vec![Word::symbol("dup")]), run(r#""dup" symbol"#));
        assert_eq!(Ok(vec![num(7.0), num(7.0)]), run(r#"7 "dup" symbol quote eval"#));
        assert_eq!(Err(type_error("{str}", "bool")), run("true symbol"));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Ok(vec![num(3.0)]), run("5 2 -"));
        assert_eq!(Ok(vec![num(2.5)]), run("5 2 /"));
        assert_eq!(Ok(vec![num(-1.5)]), run("-0.5 3 *"));
        assert_eq!(Err(LionError::Domain("division by zero".into())), run("1 0 /"));
        assert_eq!(Err(type_error("{num}", "str")), run(r#"1 "2" +"#));
    }

    #[test]
    fn split_and_join() {
        assert_eq!(
            Ok(vec![quote(vec![Word::string("a"), Word::string("b")])]),
            run(r#""ab" split"#)
        );
        assert_eq!(Ok(vec![quote(vec![])]), run(r#""" split"#));
        assert_eq!(Ok(vec![Word::string("ab")]), run(r#""ab" split join"#));
        assert_eq!(Err(type_error("{str}", "num")), run(r#"("a" 1) join"#));
    }

    #[test]
    fn ifte_picks_branch() {
        assert_eq!(Ok(vec![Word::string("yes")]), run(r#"true ("yes") ("no") ifte"#));
        assert_eq!(Ok(vec![Word::string("no")]), run(r#"1 2 eq? ("yes") ("no") ifte"#));
        assert_eq!(Err(type_error("{bool}", "num")), run("1 () () ifte"));
    }

    #[test]
    fn ifte_branch_definitions_are_private() {
        let mut vocabulary = Vocabulary::new();
        let result = run_in(
            &mut Evaluator::new(),
            &mut vocabulary,
            "true ((1) (x) defm x) () ifte",
        );
        assert_eq!(Ok(vec![num(1.0)]), result);
        assert!(!vocabulary.contains("x"));
    }

    #[test]
    fn logic_and_equality() {
        assert_eq!(
            Ok(vec![Word::Boolean(false), Word::Boolean(true), Word::Boolean(false)]),
            run("true false and true false or true not")
        );
        assert_eq!(Ok(vec![Word::Boolean(true)]), run("(1 (a)) (1 (a)) eq?"));
        assert_eq!(Ok(vec![Word::Boolean(false)]), run(r#""1" 1 eq?"#));
    }

    #[test]
    fn print_expands_escapes() {
        assert_eq!(Ok("hi\n\t\"x\"".to_string()), printed(r#""hi\n\t\"x\"" print"#));
        assert_eq!(Err(type_error("{str}", "num")), printed("1 print"));
    }

    #[test]
    fn show_prints_stack() {
        assert_eq!(Ok("[1 \"a\" (b)]\n".to_string()), printed(r#"1 "a" (b) .s"#));
    }

    #[test]
    fn read_and_write_files() {
        let path = std::env::temp_dir().join(format!("lion-builtins-{}.txt", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        let program = format!(r#""1 2 +" "{0}" write "{0}" read parse eval"#, path);
        assert_eq!(Ok(vec![num(3.0)]), run(&program));
        std::fs::remove_file(&path).unwrap();

        match run(&format!(r#""{}" read"#, path)) {
            Err(LionError::Io { path: failed, .. }) => assert_eq!(path, failed),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = std::env::temp_dir().join(format!("lion-missing-{}", std::process::id()));
        let path = dir.join("out.txt").to_string_lossy().into_owned();

        match run(&format!(r#""data" "{}" write"#, path)) {
            Err(LionError::Io { path: failed, .. }) => assert_eq!(path, failed),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(!dir.exists());
    }

    #[test]
    fn exit_is_reported() {
        assert_eq!(Err(LionError::Exit), run("1 exit 2"));
    }
}
