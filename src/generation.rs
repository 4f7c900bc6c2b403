//! The single entry point used by front ends: expression in, TAC and quadruples out.
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    error::MalformedExpression,
    il::{self, Quadruple, TacListing},
    lexer,
    listing::Listing,
    parser,
    prelude::*,
};

pub const BASIC_SUMMARY: &str = "Evaluation depends on variable values.";
pub const QUADRATIC_SUMMARY: &str = "Result depends on value of x.";

/// Selects which of the two independent pipelines handles an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Any arithmetic expression over `+ - * /` and parentheses.
    Basic,
    /// Only the fixed shape `ax^2+bx+c`.
    Quadratic,
}
impl Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            EvaluationMode::Basic => "basic",
            EvaluationMode::Quadratic => "quadratic",
        })
    }
}

#[derive(Debug, Error)]
#[error("unknown evaluation mode '{0}', expected 'basic' or 'quadratic'")]
pub struct UnknownMode(String);

impl FromStr for EvaluationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "quadratic" => Ok(Self::Quadratic),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// The complete outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub tac: TacListing,
    pub quads: Listing<Quadruple>,
    /// Advisory text describing the final result. Nothing is ever evaluated.
    pub summary: &'static str,
}

/// Generate three-address code and quadruples for an expression.
///
/// All whitespace is removed before processing. The result is all-or-nothing: on failure, no
/// partial listing is returned.
pub fn generate(expression: &str, mode: EvaluationMode) -> Result<Generation, MalformedExpression> {
    let expression = strip_whitespace(expression);
    debug!("Generating {} code for {:?}", mode, expression);

    let (tac, summary) = match mode {
        EvaluationMode::Basic => (generate_basic(&expression)?, BASIC_SUMMARY),
        EvaluationMode::Quadratic => (il::generate_quadratic(&expression)?, QUADRATIC_SUMMARY),
    };
    debug!("Generated {} TAC instructions", tac.len());

    let quads = il::to_quadruples(&tac)?;

    Ok(Generation {
        tac,
        quads,
        summary,
    })
}

fn generate_basic(expression: &str) -> Result<TacListing, MalformedExpression> {
    let tokens = lexer::lex(expression)?;
    let postfix = parser::to_postfix(tokens);
    debug!(
        "Postfix: {}",
        postfix
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    il::generate(postfix)
}

/// Removes every whitespace character, leading, trailing or internal.
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
