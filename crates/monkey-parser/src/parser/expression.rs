use monkey_ast::{
    CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, PrefixExpression,
};
use monkey_lexer::Token;

use super::statement::parse_block_statement;
use super::Parser;
use crate::precedence::Precedence;

/// The Pratt core: parse one prefix production, then keep
/// folding infix productions into it for as long as the next token binds
/// tighter than `precedence`.
///
/// Entered with the cursor on the expression's first token; leaves it on
/// the last token the expression consumed.
pub(super) fn parse_expression(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    let mut left = parse_prefix(parser)?;

    while !parser.peek_is(&Token::Semicolon) && precedence < parser.peek_precedence() {
        if !has_infix(&parser.peek_token) {
            break;
        }
        parser.advance();
        left = parse_infix(parser, left)?;
    }

    Some(left)
}

fn has_infix(token: &Token) -> bool {
    matches!(
        token,
        Token::Plus
            | Token::Minus
            | Token::Slash
            | Token::Star
            | Token::Eq
            | Token::NotEq
            | Token::Lt
            | Token::Gt
            | Token::LParen
            | Token::LBracket
    )
}

fn parse_prefix(parser: &mut Parser) -> Option<Expression> {
    match parser.cur_token.clone() {
        Token::Ident(name) => Some(Expression::Identifier(Identifier { value: name })),
        Token::Int(literal) => parse_integer_literal(parser, &literal),
        Token::Str(s) => Some(Expression::StringLiteral(s)),
        Token::True => Some(Expression::Boolean(true)),
        Token::False => Some(Expression::Boolean(false)),
        Token::Bang | Token::Minus => parse_prefix_expression(parser),
        Token::LParen => parse_grouped_expression(parser),
        Token::If => parse_if_expression(parser),
        Token::Function => parse_function_literal(parser),
        Token::LBracket => parse_array_literal(parser),
        Token::LBrace => parse_hash_literal(parser),
        other => {
            parser
                .errors
                .push(format!("no prefix parse function for {} found", other.kind_name()));
            None
        }
    }
}

fn parse_infix(parser: &mut Parser, left: Expression) -> Option<Expression> {
    match parser.cur_token {
        Token::LParen => parse_call_expression(parser, left),
        Token::LBracket => parse_index_expression(parser, left),
        _ => parse_infix_expression(parser, left),
    }
}

fn parse_integer_literal(parser: &mut Parser, literal: &str) -> Option<Expression> {
    match literal.parse::<i32>() {
        Ok(value) => Some(Expression::IntegerLiteral(value)),
        Err(_) => {
            parser.errors.push(format!("literal {} is not valid integer", literal));
            None
        }
    }
}

fn parse_prefix_expression(parser: &mut Parser) -> Option<Expression> {
    let operator = parser.cur_token.literal();
    parser.advance();
    let right = parse_expression(parser, Precedence::Prefix);
    Some(Expression::Prefix(PrefixExpression {
        operator,
        right: right.map(Box::new),
    }))
}

fn parse_infix_expression(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator = parser.cur_token.literal();
    let precedence = parser.cur_precedence();
    parser.advance();
    let right = parse_expression(parser, precedence);
    Some(Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator,
        right: right.map(Box::new),
    }))
}

fn parse_grouped_expression(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let exp = parse_expression(parser, Precedence::Lowest);
    if !parser.expect_peek(&Token::RParen) {
        return None;
    }
    exp
}

fn parse_if_expression(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(&Token::LParen) {
        return None;
    }
    parser.advance();
    let condition = parse_expression(parser, Precedence::Lowest)?;

    if !parser.expect_peek(&Token::RParen) {
        return None;
    }
    if !parser.expect_peek(&Token::LBrace) {
        return None;
    }
    let consequence = parse_block_statement(parser);

    let alternative = if parser.peek_is(&Token::Else) {
        parser.advance();
        if !parser.expect_peek(&Token::LBrace) {
            return None;
        }
        Some(parse_block_statement(parser))
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(&Token::LParen) {
        return None;
    }
    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(&Token::LBrace) {
        return None;
    }
    let body = parse_block_statement(parser);

    Some(Expression::FunctionLiteral(FunctionLiteral { parameters, body }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut identifiers = Vec::new();

    if parser.peek_is(&Token::RParen) {
        parser.advance();
        return Some(identifiers);
    }

    parser.advance();
    identifiers.push(expect_identifier(parser)?);

    while parser.peek_is(&Token::Comma) {
        parser.advance();
        parser.advance();
        identifiers.push(expect_identifier(parser)?);
    }

    if !parser.expect_peek(&Token::RParen) {
        return None;
    }

    Some(identifiers)
}

fn expect_identifier(parser: &mut Parser) -> Option<Identifier> {
    match &parser.cur_token {
        Token::Ident(name) => Some(Identifier { value: name.clone() }),
        other => {
            parser.errors.push(format!(
                "expected next token to be IDENT, got {} instead",
                other.kind_name(),
            ));
            None
        }
    }
}

fn parse_call_expression(parser: &mut Parser, function: Expression) -> Option<Expression> {
    let arguments = parse_expression_list(parser, &Token::RParen)?;
    Some(Expression::Call(CallExpression {
        function: Box::new(function),
        arguments,
    }))
}

fn parse_index_expression(parser: &mut Parser, left: Expression) -> Option<Expression> {
    parser.advance();
    let index = parse_expression(parser, Precedence::Lowest)?;
    if !parser.expect_peek(&Token::RBracket) {
        return None;
    }
    Some(Expression::Index(IndexExpression {
        left: Box::new(left),
        index: Box::new(index),
    }))
}

fn parse_array_literal(parser: &mut Parser) -> Option<Expression> {
    let elements = parse_expression_list(parser, &Token::RBracket)?;
    Some(Expression::ArrayLiteral(elements))
}

/// Parses a comma-separated expression list terminated by `end`. Called
/// with the cursor on the opening delimiter (`(` or `[`); leaves it on
/// `end`.
fn parse_expression_list(parser: &mut Parser, end: &Token) -> Option<Vec<Expression>> {
    let mut list = Vec::new();

    if parser.peek_is(end) {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    list.push(parse_expression(parser, Precedence::Lowest)?);

    while parser.peek_is(&Token::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expression(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(end) {
        return None;
    }

    Some(list)
}

fn parse_hash_literal(parser: &mut Parser) -> Option<Expression> {
    let mut pairs = Vec::new();

    while !parser.peek_is(&Token::RBrace) {
        parser.advance();
        let key = parse_expression(parser, Precedence::Lowest)?;

        if !parser.expect_peek(&Token::Colon) {
            return None;
        }

        parser.advance();
        let value = parse_expression(parser, Precedence::Lowest)?;
        pairs.push((key, value));

        if !parser.peek_is(&Token::RBrace) && !parser.expect_peek(&Token::Comma) {
            return None;
        }
    }

    if !parser.expect_peek(&Token::RBrace) {
        return None;
    }

    Some(Expression::Hash(HashLiteral { pairs }))
}

#[cfg(test)]
mod tests {
    use super::super::Parser;

    fn parse(input: &str) -> (monkey_ast::Program, Vec<String>) {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        (program, parser.errors().to_vec())
    }

    fn node_string(input: &str) -> String {
        let (program, errors) = parse(input);
        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        program.to_string()
    }

    #[test]
    fn minus_binds_tighter_than_product() {
        assert_eq!(node_string("-a * b"), "((-a) * b)");
    }

    #[test]
    fn bang_and_minus_compose() {
        assert_eq!(node_string("!-a"), "(!(-a))");
    }

    #[test]
    fn sum_is_left_associative() {
        assert_eq!(node_string("a + b + c"), "((a + b) + c)");
    }

    #[test]
    fn product_binds_tighter_than_sum() {
        assert_eq!(node_string("a + b * c"), "(a + (b * c))");
    }

    #[test]
    fn two_statements_from_one_semicolon_separated_line() {
        let (program, errors) = parse("3 + 4; -5 * 5");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 2);
        assert_eq!(program.to_string(), "(3 + 4)((-5) * 5)");
    }

    #[test]
    fn call_nests_inside_sum() {
        assert_eq!(node_string("a + add(b * c) + d"), "((a + add((b * c))) + d)");
    }

    #[test]
    fn index_binds_tighter_than_product() {
        assert_eq!(
            node_string("a * [1, 2, 3, 4][b * c] * d"),
            "((a * ([1, 2, 3, 4][(b * c)])) * d)"
        );
    }

    #[test]
    fn if_expression_without_else() {
        assert_eq!(node_string("if (x < y) { x }"), "if(x < y) x");
    }

    #[test]
    fn if_expression_with_else() {
        assert_eq!(node_string("if (x < y) { x } else { y }"), "if(x < y) xelse y");
    }

    #[test]
    fn function_literal_renders_params_and_body() {
        assert_eq!(node_string("fn(x, y) { x + y; }"), "fn(x, y)(x + y)");
    }

    #[test]
    fn hash_literal_renders_pairs_in_parse_order() {
        assert_eq!(
            node_string(r#"{"one": 1, "two": 2}"#),
            "one : 1, two : 2, "
        );
    }

    #[test]
    fn invalid_integer_literal_records_error() {
        let (_program, errors) = parse("999999999999999999999;");
        assert_eq!(errors[0], "literal 999999999999999999999 is not valid integer");
    }

    #[test]
    fn missing_prefix_function_records_error() {
        let (_program, errors) = parse(")");
        assert_eq!(errors[0], "no prefix parse function for RPAREN found");
    }
}
