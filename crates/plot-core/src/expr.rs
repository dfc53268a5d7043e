// File: crates/plot-core/src/expr.rs
// Summary: Formula parser (pest grammar + Pratt precedence) and AST evaluator.
//
// Only the variable `x`, numeric literals, the constants and the functions in the
// allow-list below are accepted. Evaluation walks the AST and never panics;
// domain errors surface as NaN or infinities.

use std::f64::consts;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "expr.pest"]
pub struct FormulaParser;

static PRATT: Lazy<PrattParser<Rule>> = Lazy::new(|| {
    // Lowest to highest precedence. Power binds tighter than unary minus.
    PrattParser::new()
        .op(Op::infix(Rule::add, Assoc::Left) | Op::infix(Rule::sub, Assoc::Left))
        .op(Op::infix(Rule::mul, Assoc::Left) | Op::infix(Rule::div, Assoc::Left))
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::pos))
        .op(Op::infix(Rule::pow, Assoc::Right))
});

/// Optional prefix accepted on every name, e.g. `Math.sin(x)` or `Math.PI`.
const NAMESPACE: &str = "Math.";

/// Longest formula accepted, in bytes. Parsing and evaluation recurse; this and
/// [`MAX_DEPTH`] bound the stack they use.
pub const MAX_SOURCE_LEN: usize = 1024;
/// Deepest AST accepted.
pub const MAX_DEPTH: usize = 256;

#[derive(Error, Debug)]
pub enum ExprError {
    #[error("syntax error: {0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),
    #[error("empty formula")]
    Empty,
    #[error("unknown identifier '{0}' (only x and constants are allowed)")]
    UnknownIdentifier(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("{name} expects {expected} argument(s), got {found}")]
    Arity { name: String, expected: usize, found: usize },
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("formula too complex: {0}")]
    TooComplex(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Sign,
}

impl UnaryFn {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            // `log` is the natural logarithm, as in most math libraries.
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "sign" => Self::Sign,
            _ => return None,
        })
    }

    fn apply(self, v: f64) -> f64 {
        match self {
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Asin => v.asin(),
            Self::Acos => v.acos(),
            Self::Atan => v.atan(),
            Self::Sinh => v.sinh(),
            Self::Cosh => v.cosh(),
            Self::Tanh => v.tanh(),
            Self::Exp => v.exp(),
            Self::Ln => v.ln(),
            Self::Log10 => v.log10(),
            Self::Log2 => v.log2(),
            Self::Sqrt => v.sqrt(),
            Self::Cbrt => v.cbrt(),
            Self::Abs => v.abs(),
            Self::Floor => v.floor(),
            Self::Ceil => v.ceil(),
            Self::Round => v.round(),
            // sign(0) = 0 and sign(NaN) = NaN, unlike f64::signum.
            Self::Sign => {
                if v > 0.0 { 1.0 } else if v < 0.0 { -1.0 } else { v }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryFn {
    Pow,
    Atan2,
    Min,
    Max,
    Hypot,
}

impl BinaryFn {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "pow" => Self::Pow,
            "atan2" => Self::Atan2,
            "min" => Self::Min,
            "max" => Self::Max,
            "hypot" => Self::Hypot,
            _ => return None,
        })
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Pow => a.powf(b),
            Self::Atan2 => a.atan2(b),
            Self::Min => a.min(b),
            Self::Max => a.max(b),
            Self::Hypot => a.hypot(b),
        }
    }
}

/// Typed arithmetic AST.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Number(f64),
    Var,
    Neg(Box<Node>),
    Binary(BinOp, Box<Node>, Box<Node>),
    Call1(UnaryFn, Box<Node>),
    Call2(BinaryFn, Box<Node>, Box<Node>),
}

impl Node {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Number(v) => *v,
            Node::Var => x,
            Node::Neg(inner) => -inner.eval(x),
            Node::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Pow => a.powf(b),
                }
            }
            Node::Call1(f, arg) => f.apply(arg.eval(x)),
            Node::Call2(f, a, b) => f.apply(a.eval(x), b.eval(x)),
        }
    }

    /// Nesting depth; a leaf is 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Number(_) | Node::Var => 1,
            Node::Neg(inner) | Node::Call1(_, inner) => 1 + inner.depth(),
            Node::Binary(_, a, b) | Node::Call2(_, a, b) => 1 + a.depth().max(b.depth()),
        }
    }
}

/// A parsed formula in `x`, kept together with the text it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        if source.trim().is_empty() {
            return Err(ExprError::Empty);
        }
        if source.len() > MAX_SOURCE_LEN {
            return Err(ExprError::TooComplex(format!(
                "{} bytes, at most {MAX_SOURCE_LEN} allowed",
                source.len()
            )));
        }
        let mut pairs = FormulaParser::parse(Rule::formula, source).map_err(Box::new)?;
        // `formula` is silent, so the first pair is the top-level `expr`.
        let top = pairs.next().ok_or(ExprError::Empty)?;
        let root = build_expr(top.into_inner())?;
        let depth = root.depth();
        if depth > MAX_DEPTH {
            return Err(ExprError::TooComplex(format!("nesting depth {depth}, at most {MAX_DEPTH} allowed")));
        }
        Ok(Self { source: source.to_owned(), root })
    }

    pub fn source(&self) -> &str { &self.source }

    pub fn root(&self) -> &Node { &self.root }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Value at `x`, or `None` when it is NaN or infinite.
    #[inline]
    pub fn eval_finite(&self, x: f64) -> Option<f64> {
        let y = self.eval(x);
        y.is_finite().then_some(y)
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse `source` and probe it once at `x = 0` before it may be committed.
pub fn validate(source: &str) -> Result<Expression, ExprError> {
    let expr = Expression::parse(source)?;
    let probe = expr.eval(0.0);
    log::debug!("formula '{}' validated, f(0) = {}", source, probe);
    Ok(expr)
}

fn build_expr(pairs: Pairs<'_, Rule>) -> Result<Node, ExprError> {
    PRATT
        .map_primary(build_primary)
        .map_prefix(|op, rhs| {
            let rhs = rhs?;
            Ok(match op.as_rule() {
                Rule::neg => Node::Neg(Box::new(rhs)),
                _ => rhs,
            })
        })
        .map_infix(|lhs, op, rhs| {
            let op = match op.as_rule() {
                Rule::add => BinOp::Add,
                Rule::sub => BinOp::Sub,
                Rule::mul => BinOp::Mul,
                Rule::div => BinOp::Div,
                Rule::pow => BinOp::Pow,
                rule => unreachable!("grammar produced non-infix rule {rule:?}"),
            };
            Ok(Node::Binary(op, Box::new(lhs?), Box::new(rhs?)))
        })
        .parse(pairs)
}

fn build_primary(pair: Pair<'_, Rule>) -> Result<Node, ExprError> {
    match pair.as_rule() {
        Rule::number => {
            let text = pair.as_str();
            text.parse::<f64>()
                .map(Node::Number)
                .map_err(|_| ExprError::InvalidNumber(text.to_owned()))
        }
        Rule::ident => resolve_ident(pair.as_str()),
        Rule::call => build_call(pair),
        Rule::expr => build_expr(pair.into_inner()),
        rule => unreachable!("grammar produced non-primary rule {rule:?}"),
    }
}

fn resolve_ident(raw: &str) -> Result<Node, ExprError> {
    let name = raw.strip_prefix(NAMESPACE).unwrap_or(raw);
    Ok(match name {
        "x" => Node::Var,
        "pi" | "PI" => Node::Number(consts::PI),
        "e" | "E" => Node::Number(consts::E),
        "tau" => Node::Number(consts::TAU),
        _ => return Err(ExprError::UnknownIdentifier(raw.to_owned())),
    })
}

fn build_call(pair: Pair<'_, Rule>) -> Result<Node, ExprError> {
    let mut inner = pair.into_inner();
    let raw = inner.next().map(|p| p.as_str()).unwrap_or_default();
    let name = raw.strip_prefix(NAMESPACE).unwrap_or(raw);
    let mut args = inner
        .map(|arg| build_expr(arg.into_inner()))
        .collect::<Result<Vec<_>, _>>()?;

    let arity = |expected: usize, found: usize| ExprError::Arity { name: raw.to_owned(), expected, found };
    if let Some(f) = UnaryFn::from_name(name) {
        if args.len() != 1 {
            return Err(arity(1, args.len()));
        }
        let a = args.remove(0);
        return Ok(Node::Call1(f, Box::new(a)));
    }
    if let Some(f) = BinaryFn::from_name(name) {
        if args.len() != 2 {
            return Err(arity(2, args.len()));
        }
        let b = args.remove(1);
        let a = args.remove(0);
        return Ok(Node::Call2(f, Box::new(a), Box::new(b)));
    }
    Err(ExprError::UnknownFunction(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_is_right_associative_and_beats_negation() {
        let e = Expression::parse("-2^2").unwrap();
        assert_eq!(e.eval(0.0), -4.0);
        let e = Expression::parse("2^3^2").unwrap();
        assert_eq!(e.eval(0.0), 512.0);
        let e = Expression::parse("2**-1").unwrap();
        assert_eq!(e.eval(0.0), 0.5);
    }

    #[test]
    fn number_forms() {
        for (src, want) in [("3.", 3.0), (".5", 0.5), ("1e-3", 1e-3), ("2E2", 200.0)] {
            assert_eq!(Expression::parse(src).unwrap().eval(0.0), want, "{src}");
        }
    }
}
