//! Statement evaluation.

use monkey_ast::{BlockStatement, Statement};
use monkey_object::{EnvHandle, Object};

use super::expression::eval_expression;
use super::is_error;

/// Dispatches on statement kind. `Block` is handled here too (rather
/// than folded into the top-level program loop) since both `if`
/// consequences/alternatives and function bodies evaluate a
/// `BlockStatement` directly, without ever going through `Program`.
pub(super) fn eval_statement(stmt: &Statement, env: &EnvHandle) -> Object {
    match stmt {
        Statement::Let(let_stmt) => {
            let value = match &let_stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => Object::Null,
            };
            if is_error(&value) {
                return value;
            }
            env.borrow_mut().set(let_stmt.name.value.clone(), value)
        }
        Statement::Return(return_stmt) => {
            let value = match &return_stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => Object::Null,
            };
            if is_error(&value) {
                return value;
            }
            Object::Return(Box::new(value))
        }
        Statement::Block(block) => eval_block(block, env),
        Statement::Expression(expr_stmt) => match &expr_stmt.expression {
            Some(expr) => eval_expression(expr, env),
            None => Object::Null,
        },
    }
}

/// Evaluates a block's statements in order. Unlike
/// `eval_program`, a `Return` is *not* unwrapped here — it keeps
/// propagating as a `Return` sentinel through every enclosing block until
/// it reaches the function-call boundary (`apply_function` in
/// `expression.rs`) or the top-level program loop, so only the innermost
/// enclosing function actually returns.
pub(crate) fn eval_block(block: &BlockStatement, env: &EnvHandle) -> Object {
    let mut result = Object::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env);

        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use monkey_object::{Environment, Object};
    use monkey_parser::Parser;

    use super::super::eval_program;

    fn eval(input: &str) -> Object {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "parse errors: {:?}", parser.errors());
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn return_unwinds_only_the_enclosing_function() {
        let result = eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }");
        assert_eq!(result, Object::Integer(10));
    }

    #[test]
    fn error_short_circuits_remaining_statements() {
        let result = eval("5 + true; 5;");
        assert_eq!(result, Object::Error("Type mismatch: INT + BOOL".to_string()));
    }

    #[test]
    fn let_binds_the_evaluated_value() {
        let result = eval("let a = 5; a;");
        assert_eq!(result, Object::Integer(5));
    }

    #[test]
    fn let_propagates_an_error_in_its_value_expression() {
        let result = eval("let a = 5 + true;");
        assert_eq!(result, Object::Error("Type mismatch: INT + BOOL".to_string()));
    }
}
