//! Expression evaluation.

use std::rc::Rc;

use monkey_ast::{CallExpression, Expression, FunctionLiteral, HashLiteral, IfExpression, IndexExpression, InfixExpression, PrefixExpression};
use monkey_object::{lookup_builtin, EnvHandle, Environment, FunctionObject, HashObject, HashPair, Object};
use rustc_hash::FxHashMap;

use super::statement::eval_block;
use super::{is_error, is_truthy};

pub(super) fn eval_expression(expr: &Expression, env: &EnvHandle) -> Object {
    match expr {
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::IntegerLiteral(n) => Object::Integer(*n),
        Expression::Boolean(b) => Object::Boolean(*b),
        Expression::StringLiteral(s) => Object::String(s.clone()),
        Expression::Prefix(prefix) => eval_prefix(prefix, env),
        Expression::Infix(infix) => eval_infix(infix, env),
        Expression::If(if_expr) => eval_if(if_expr, env),
        Expression::FunctionLiteral(func) => eval_function_literal(func, env),
        Expression::Call(call) => eval_call(call, env),
        Expression::ArrayLiteral(elems) => eval_array_literal(elems, env),
        Expression::Index(index) => eval_index(index, env),
        Expression::Hash(hash) => eval_hash_literal(hash, env),
    }
}

/// Identifier lookup: the environment chain first, then the global
/// builtin table, then an "unknown variable" error.
fn eval_identifier(name: &str, env: &EnvHandle) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = lookup_builtin(name) {
        return builtin;
    }
    Object::Error(format!("Variable {} not found", name))
}

fn eval_function_literal(func: &FunctionLiteral, env: &EnvHandle) -> Object {
    Object::Function(FunctionObject {
        parameters: func.parameters.clone(),
        body: func.body.clone(),
        env: Rc::clone(env),
    })
}

fn eval_prefix(prefix: &PrefixExpression, env: &EnvHandle) -> Object {
    let right = match &prefix.right {
        Some(expr) => eval_expression(expr, env),
        None => return Object::Null,
    };
    if is_error(&right) {
        return right;
    }

    match prefix.operator.as_str() {
        "!" => Object::Boolean(!is_truthy(&right)),
        "-" => match right {
            Object::Integer(n) => Object::Integer(-n),
            other => Object::Error(format!("Unknown operator -{}", other.kind_name())),
        },
        other => Object::Error(format!("Unknown operator {}{}", other, right.kind_name())),
    }
}

fn eval_infix(infix: &InfixExpression, env: &EnvHandle) -> Object {
    // Left before right, strictly. See DESIGN.md for why this differs
    // from naive right-then-left evaluation.
    let left = eval_expression(&infix.left, env);
    if is_error(&left) {
        return left;
    }
    let right = match &infix.right {
        Some(expr) => eval_expression(expr, env),
        None => return Object::Null,
    };
    if is_error(&right) {
        return right;
    }

    eval_infix_operator(&infix.operator, left, right)
}

fn eval_infix_operator(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) if operator == "+" => Object::String(format!("{}{}", l, r)),
        _ if operator == "==" => Object::Boolean(left == right),
        _ if operator == "!=" => Object::Boolean(left != right),
        _ if left.kind_name() != right.kind_name() => {
            Object::Error(format!("Type mismatch: {} {} {}", left.kind_name(), operator, right.kind_name()))
        }
        _ => Object::Error(format!("Unknown operator: {} {} {}", left.kind_name(), operator, right.kind_name())),
    }
}

fn eval_integer_infix(operator: &str, left: i32, right: i32) -> Object {
    match operator {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => Object::Integer(left / right),
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        other => Object::Error(format!("Unknown operator: INT {} INT", other)),
    }
}

fn eval_if(if_expr: &IfExpression, env: &EnvHandle) -> Object {
    let condition = eval_expression(&if_expr.condition, env);
    if is_error(&condition) {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block(alternative, env)
    } else {
        Object::Null
    }
}

fn eval_array_literal(elems: &[Expression], env: &EnvHandle) -> Object {
    match eval_expressions(elems, env) {
        Ok(values) => Object::Array(values),
        Err(err) => err,
    }
}

fn eval_index(index_expr: &IndexExpression, env: &EnvHandle) -> Object {
    let left = eval_expression(&index_expr.left, env);
    if is_error(&left) {
        return left;
    }
    let index = eval_expression(&index_expr.index, env);
    if is_error(&index) {
        return index;
    }

    match &left {
        Object::Array(elems) => match index {
            Object::Integer(i) => {
                if i < 0 || i as usize >= elems.len() {
                    Object::Null
                } else {
                    elems[i as usize].clone()
                }
            }
            _ => Object::Error(format!("Index operator not supported: {}", left.kind_name())),
        },
        Object::Hash(hash) => eval_hash_index(hash, &index),
        _ => Object::Error(format!("Index operator not supported: {}", left.kind_name())),
    }
}

fn eval_hash_index(hash: &HashObject, index: &Object) -> Object {
    match index.hash_key() {
        Some(key) => hash.pairs.get(&key).map(|pair| pair.value.clone()).unwrap_or(Object::Null),
        None => Object::Error(format!("Unusuable as hash key: {}", index.kind_name())),
    }
}

fn eval_hash_literal(hash_lit: &HashLiteral, env: &EnvHandle) -> Object {
    let mut pairs: FxHashMap<_, _> = FxHashMap::default();

    for (key_expr, value_expr) in &hash_lit.pairs {
        let key = eval_expression(key_expr, env);
        if is_error(&key) {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Object::Error(format!("Unusuable as hash key: {}", key.kind_name())),
        };

        let value = eval_expression(value_expr, env);
        if is_error(&value) {
            return value;
        }

        pairs.insert(hash_key, HashPair { key, value });
    }

    Object::Hash(HashObject { pairs })
}

fn eval_call(call: &CallExpression, env: &EnvHandle) -> Object {
    let function = eval_expression(&call.function, env);
    if is_error(&function) {
        return function;
    }

    let args = match eval_expressions(&call.arguments, env) {
        Ok(args) => args,
        Err(err) => return err,
    };

    apply_function(function, args)
}

/// Evaluates each expression left-to-right, short-circuiting on the
/// first `Error` (array literals, call arguments).
fn eval_expressions(exprs: &[Expression], env: &EnvHandle) -> Result<Vec<Object>, Object> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if is_error(&value) {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function(func) => {
            let call_env = Environment::enclosed(Rc::clone(&func.env));
            for (param, arg) in func.parameters.iter().zip(args.into_iter()) {
                call_env.borrow_mut().set(param.value.clone(), arg);
            }
            let evaluated = eval_block(&func.body, &call_env);
            match evaluated {
                Object::Return(value) => *value,
                other => other,
            }
        }
        Object::Builtin(builtin) => (builtin.func)(&args),
        other => Object::Error(format!("not a function: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use monkey_object::Environment;
    use monkey_parser::Parser;

    use super::super::eval_program;
    use super::*;

    fn eval(input: &str) -> Object {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "parse errors: {:?}", parser.errors());
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        assert_eq!(eval("foobar;"), Object::Error("Variable foobar not found".to_string()));
    }

    #[test]
    fn bang_negates_truthiness() {
        assert_eq!(eval("!true;"), Object::Boolean(false));
        assert_eq!(eval("!5;"), Object::Boolean(false));
        assert_eq!(eval("!!5;"), Object::Boolean(true));
        assert_eq!(eval("!false;"), Object::Boolean(true));
    }

    #[test]
    fn minus_negates_an_integer() {
        assert_eq!(eval("-5;"), Object::Integer(-5));
    }

    #[test]
    fn minus_on_a_non_integer_is_an_error() {
        assert_eq!(eval("-true;"), Object::Error("Unknown operator -BOOL".to_string()));
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(eval("7 / 2;"), Object::Integer(3));
        assert_eq!(eval("-7 / 2;"), Object::Integer(-3));
    }

    #[test]
    fn string_concatenation_is_wired_up() {
        assert_eq!(eval(r#""Hello, " + "World!";"#), Object::String("Hello, World!".to_string()));
    }

    #[test]
    fn string_minus_string_is_an_unknown_operator() {
        assert_eq!(
            eval(r#""a" - "b";"#),
            Object::Error("Unknown operator: STRING - STRING".to_string())
        );
    }

    #[test]
    fn integer_zero_is_truthy_in_if() {
        assert_eq!(eval("if (0) { 1 } else { 2 };"), Object::Integer(1));
    }

    #[test]
    fn if_without_else_on_falsy_condition_is_null() {
        assert_eq!(eval("if (false) { 1 };"), Object::Null);
    }

    #[test]
    fn array_index_out_of_bounds_is_null_not_an_error() {
        assert_eq!(eval("[1, 2, 3][99];"), Object::Null);
    }

    #[test]
    fn array_index_with_negative_index_is_null() {
        assert_eq!(eval("[1, 2, 3][-1];"), Object::Null);
    }

    #[test]
    fn missing_hash_key_is_null_not_an_error() {
        assert_eq!(eval(r#"{"a": 1}["b"];"#), Object::Null);
    }

    #[test]
    fn unhashable_key_expression_is_an_error() {
        assert_eq!(
            eval("{}[fn(x) { x }];"),
            Object::Error("Unusuable as hash key: FUNCTION".to_string())
        );
    }

    #[test]
    fn index_on_an_unsupported_kind_is_an_error() {
        assert_eq!(eval("5[0];"), Object::Error("Index operator not supported: INT".to_string()));
    }

    #[test]
    fn calling_a_non_function_is_an_error() {
        assert_eq!(eval("let x = 5; x();"), Object::Error("not a function: 5".to_string()));
    }

    #[test]
    fn closure_captures_its_defining_environment() {
        let result = eval("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);");
        assert_eq!(result, Object::Integer(5));
    }

    #[test]
    fn recursive_function_finds_itself_through_its_captured_environment() {
        let result = eval("let f = fn(n) { if (n < 2) { n } else { f(n - 1) + f(n - 2) } }; f(10);");
        assert_eq!(result, Object::Integer(55));
    }

    #[test]
    fn hash_literal_round_trips_heterogeneous_keys() {
        let result = eval(r#"let h = {"a": 1, 2: "b", true: 3}; h["a"];"#);
        assert_eq!(result, Object::Integer(1));
        let result = eval(r#"let h = {"a": 1, 2: "b", true: 3}; h[2];"#);
        assert_eq!(result, Object::String("b".to_string()));
        let result = eval(r#"let h = {"a": 1, 2: "b", true: 3}; h[true];"#);
        assert_eq!(result, Object::Integer(3));
    }

    #[test]
    fn mixed_integer_and_string_operands_are_a_type_mismatch() {
        // Only String+String concatenation is wired up under `+`
        // (DESIGN.md); Integer+String still reports the type mismatch
        // every other mismatched-kind `+` does.
        let result = eval(r#"let h = {"a": 1, 2: "b"}; h["a"] + h[2];"#);
        assert_eq!(result, Object::Error("Type mismatch: INT + STRING".to_string()));
    }

    #[test]
    fn builtin_len_is_reachable_as_an_identifier_fallback() {
        assert_eq!(eval(r#"len("hello");"#), Object::Integer(5));
    }
}
