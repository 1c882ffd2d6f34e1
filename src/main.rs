use std::{env, process, thread};

use lion::{builtins, Config, Interpreter, LionError};
use rustyline::{error::ReadlineError, DefaultEditor};

/// Optional bootstrap library evaluated before anything else.
const CORE_VAR: &str = "LION_CORE";

const MIN_STACK_SIZE: usize = 8 * 1024 * 1024;

fn main() {
    env_logger::init();

    let config = Config::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    // Evaluation recurses on the host stack, so size it for the configured depth.
    let worker = thread::Builder::new()
        .name("lion".to_string())
        .stack_size(config.stack_size().max(MIN_STACK_SIZE))
        .spawn(move || run(config, &args));

    let code = match worker.map(|handle| handle.join()) {
        Ok(Ok(code)) => code,
        Ok(Err(_)) => 1,
        Err(err) => {
            eprintln!("Error: {}", err);
            1
        }
    };
    process::exit(code);
}

fn run(config: Config, args: &[String]) -> i32 {
    let mut interpreter = Interpreter::with_config(config);

    if let Ok(core) = env::var(CORE_VAR) {
        if let Err(err) = interpreter.run_file(&core) {
            eprintln!("Error: {}", err);
            return 1;
        }
    }

    match args {
        [] => {
            repl(&mut interpreter);
            0
        }
        [path] => match interpreter.run_file(path) {
            Ok(()) | Err(LionError::Exit) => 0,
            Err(err) => {
                eprintln!("Error: {}", err);
                1
            }
        },
        _ => {
            eprintln!("usage: lion [FILE]");
            2
        }
    }
}

fn repl(interpreter: &mut Interpreter) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Error: {}", err);
            return;
        }
    };

    println!("Lion {}:", env!("CARGO_PKG_VERSION"));

    loop {
        match editor.readline("> ") {
            Ok(input) => {
                let line = input.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ":quit" | ":exit" => break,
                    ":vocab" => {
                        show_vocabulary(interpreter);
                        continue;
                    }
                    ":words" => {
                        println!("{}", builtins::NAMES.join(" "));
                        continue;
                    }
                    _ => {}
                }

                match interpreter.eval(line) {
                    Ok(()) => println!("{}", interpreter.render_stack()),
                    Err(LionError::Exit) => break,
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }
}

fn show_vocabulary(interpreter: &Interpreter) {
    let vocabulary = interpreter.vocabulary();
    if vocabulary.is_empty() {
        println!("No user definitions.");
        return;
    }
    for name in vocabulary.names() {
        if let Some(definition) = vocabulary.get(name) {
            println!("  {} ({}) = {}", name, definition.kind, definition.body);
        }
    }
}
