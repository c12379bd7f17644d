//! The REPL loop: read a line, run it through the pipeline, print its
//! result. This module is the thinnest possible shell around
//! `monkey-parser` and `monkey-eval`, not part of the core language
//! engineering.

use monkey_eval::eval_program;
use monkey_object::{EnvHandle, Environment};
use monkey_parser::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::Result;

/// Runs the interactive loop until EOF (Ctrl-D) or an interrupt
/// (Ctrl-C), persisting line history across invocations.
pub fn run(config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let history_path = config.history_path();
    let _ = editor.load_history(&history_path);

    let env = Environment::new();

    loop {
        match editor.readline(&config.repl.prompt) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                eval_line(&line, &env, config);
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = editor.save_history(&history_path);
    Ok(())
}

/// Lexes, parses, and evaluates one line of input against the REPL's
/// persistent environment. Parser errors, if any, are
/// printed one per line and the line is not evaluated; otherwise the
/// result's inspect string is printed prefixed with `"uh: "`.
pub fn eval_line(line: &str, env: &EnvHandle, config: &Config) {
    trace!(%line, "lexing and parsing line");
    let mut parser = Parser::new(line);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        if config.repl.echo_errors {
            for err in parser.errors() {
                println!("{}", err);
            }
        }
        return;
    }

    debug!("evaluating parsed program");
    let result = eval_program(&program, env);
    println!("uh: {}", result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_line_runs_against_a_shared_environment_across_calls() {
        let config = Config::default();
        let env = Environment::new();
        eval_line("let x = 5;", &env, &config);
        assert_eq!(env.borrow().get("x"), Some(monkey_object::Object::Integer(5)));
    }
}
