use std::fmt;

use crate::statement::BlockStatement;

/// Every expression kind the parser can produce. `Prefix`/`Infix`/`If`
/// right-hand sides are `Option`/boxed as needed so a parse failure can
/// leave a hole without the whole tree being abandoned.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i32),
    Boolean(bool),
    StringLiteral(String),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpression),
    ArrayLiteral(Vec<Expression>),
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(i) => write!(f, "{}", i),
            Expression::IntegerLiteral(n) => write!(f, "{}", n),
            Expression::Boolean(b) => write!(f, "{}", b),
            Expression::StringLiteral(s) => write!(f, "{}", s),
            Expression::Prefix(p) => write!(f, "{}", p),
            Expression::Infix(i) => write!(f, "{}", i),
            Expression::If(i) => write!(f, "{}", i),
            Expression::FunctionLiteral(fl) => write!(f, "{}", fl),
            Expression::Call(c) => write!(f, "{}", c),
            Expression::ArrayLiteral(elems) => {
                let joined = elems.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "[{}]", joined)
            }
            Expression::Index(i) => write!(f, "{}", i),
            Expression::Hash(h) => write!(f, "{}", h),
        }
    }
}

/// A bare name reference, e.g. `x` in `let y = x;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// `!right` or `-right`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.operator)?;
        match &self.right {
            Some(r) => write!(f, "{}", r)?,
            None => write!(f, "null")?,
        }
        write!(f, ")")
    }
}

/// `left operator right`, e.g. `a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} ", self.left, self.operator)?;
        match &self.right {
            Some(r) => write!(f, "{}", r)?,
            None => write!(f, "null")?,
        }
        write!(f, ")")
    }
}

/// `if (condition) { consequence } else { alternative }`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, "else {}", alt)?;
        }
        Ok(())
    }
}

/// `fn(params) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.parameters.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "fn({}){}", params, self.body)
    }
}

/// `function(arguments)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.arguments.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "{}({})", self.function, args)
    }
}

/// `left[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

/// `{ key: value, ... }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
}

impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.pairs {
            write!(f, "{} : {}, ", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier { value: name.to_string() })
    }

    #[test]
    fn prefix_wraps_operator_and_operand() {
        let e = Expression::Prefix(PrefixExpression {
            operator: "-".to_string(),
            right: Some(Box::new(ident("a"))),
        });
        assert_eq!(e.to_string(), "(-a)");
    }

    #[test]
    fn infix_wraps_both_operands_with_spaces() {
        let e = Expression::Infix(InfixExpression {
            left: Box::new(ident("a")),
            operator: "+".to_string(),
            right: Some(Box::new(ident("b"))),
        });
        assert_eq!(e.to_string(), "(a + b)");
    }

    #[test]
    fn array_literal_joins_with_comma_space() {
        let e = Expression::ArrayLiteral(vec![Expression::IntegerLiteral(1), Expression::IntegerLiteral(2)]);
        assert_eq!(e.to_string(), "[1, 2]");
    }

    #[test]
    fn index_expression_renders_balanced() {
        let e = Expression::Index(IndexExpression {
            left: Box::new(ident("myArray")),
            index: Box::new(Expression::IntegerLiteral(1)),
        });
        assert_eq!(e.to_string(), "(myArray[1])");
    }

    #[test]
    fn call_expression_joins_arguments() {
        let e = Expression::Call(CallExpression {
            function: Box::new(ident("add")),
            arguments: vec![ident("a"), Expression::IntegerLiteral(1)],
        });
        assert_eq!(e.to_string(), "add(a, 1)");
    }
}
