//! Parse pest pairs into points and figures
//!
//! A point is two whitespace-separated scalar tokens, `x` then `y`. A figure
//! line names a kind followed by either nothing (the default figure) or the
//! coordinates of its vertices.

use pest::Parser;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::Pair;

use crate::errors::{ParseError, SourceContext};
use crate::shapes::{Quad, ShapeKind};
use crate::types::{Point, Scalar};
use crate::{QuadParser, Rule};

const SOURCE_NAME: &str = "<input>";

/// Read one point from the start of `input`.
///
/// Returns the point and the rest of the input, starting immediately after
/// the second token.
pub fn read_point<T: Scalar>(input: &str) -> Result<(Point<T>, &str), ParseError> {
    let ctx = SourceContext::new(SOURCE_NAME, input);
    let pairs = QuadParser::parse(Rule::leading_point, input).map_err(|e| unexpected(&ctx, e))?;

    let Some(pair) = pairs.flatten().find(|p| p.as_rule() == Rule::point) else {
        return Err(missing(&ctx, input.len(), "a point"));
    };
    let end = pair.as_span().end();
    let point = point_from_pair(pair, &ctx)?;
    Ok((point, &input[end..]))
}

/// Parse an input holding exactly one point.
pub fn parse_point<T: Scalar>(input: &str) -> Result<Point<T>, ParseError> {
    let mut points = points_for_rule(Rule::single_point, input)?;
    match points.pop() {
        Some(point) if points.is_empty() => Ok(point),
        _ => Err(missing(&SourceContext::new(SOURCE_NAME, input), 0, "exactly one point")),
    }
}

/// Parse an input holding any number of points.
pub fn parse_points<T: Scalar>(input: &str) -> Result<Vec<Point<T>>, ParseError> {
    points_for_rule(Rule::point_list, input)
}

/// Parse a figure line such as `"trapezoid 0 0 4 0 3 2 1 2"`.
///
/// A bare kind yields the default figure; otherwise the vertices go through
/// validated construction.
pub fn parse_figure<T: Scalar>(line: &str) -> Result<Quad<T>, miette::Report> {
    let ctx = SourceContext::new(SOURCE_NAME, line);
    let pairs = QuadParser::parse(Rule::figure, line).map_err(|e| unexpected(&ctx, e))?;

    let mut kind = None;
    let mut points = Vec::new();
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::kind => kind = ShapeKind::from_name(pair.as_str()),
            Rule::point => points.push(point_from_pair(pair, &ctx)?),
            _ => {}
        }
    }
    let Some(kind) = kind else {
        return Err(missing(&ctx, 0, "a figure kind").into());
    };
    crate::log::trace!(%kind, points = points.len(), "parsed figure line");

    if points.is_empty() {
        Ok(kind.default_figure())
    } else {
        Ok(kind.build(&points)?)
    }
}

fn points_for_rule<T: Scalar>(rule: Rule, input: &str) -> Result<Vec<Point<T>>, ParseError> {
    let ctx = SourceContext::new(SOURCE_NAME, input);
    let pairs = QuadParser::parse(rule, input).map_err(|e| unexpected(&ctx, e))?;
    pairs
        .flatten()
        .filter(|p| p.as_rule() == Rule::point)
        .map(|p| point_from_pair(p, &ctx))
        .collect()
}

fn point_from_pair<T: Scalar>(pair: Pair<'_, Rule>, ctx: &SourceContext) -> Result<Point<T>, ParseError> {
    let span = pair.as_span();
    let mut numbers = pair.into_inner();
    match (numbers.next(), numbers.next()) {
        (Some(x), Some(y)) => Ok(Point::new(number(x, ctx)?, number(y, ctx)?)),
        _ => Err(ParseError::UnexpectedInput {
            expected: "two coordinates".to_string(),
            src: ctx.named_source(),
            span: (span.start(), span.end() - span.start()).into(),
        }),
    }
}

fn number<T: Scalar>(pair: Pair<'_, Rule>, ctx: &SourceContext) -> Result<T, ParseError> {
    let text = pair.as_str();
    text.parse::<T>().map_err(|e| ParseError::InvalidNumber {
        message: format!("`{text}`: {e}"),
        src: ctx.named_source(),
        span: (pair.as_span().start(), text.len()).into(),
    })
}

fn describe(rule: &Rule) -> String {
    match rule {
        Rule::number => "a number".to_string(),
        Rule::point | Rule::leading_point | Rule::single_point => "a point".to_string(),
        Rule::point_list => "a list of points".to_string(),
        Rule::kind => "a figure kind (rectangle, rhombus or trapezoid)".to_string(),
        Rule::figure => "a figure line".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{other:?}"),
    }
}

/// Convert a pest failure, labelling the token it stopped at.
fn unexpected(ctx: &SourceContext, err: pest::error::Error<Rule>) -> ParseError {
    let start = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    let expected = match &err.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
            let mut names: Vec<String> = positives.iter().map(describe).collect();
            names.dedup();
            names.join(" or ")
        }
        ErrorVariant::ParsingError { .. } => "different input".to_string(),
        ErrorVariant::CustomError { message } => message.clone(),
    };
    let rest = &ctx.source[start..];
    let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    ParseError::UnexpectedInput {
        expected,
        src: ctx.named_source(),
        span: (start, len).into(),
    }
}

fn missing(ctx: &SourceContext, at: usize, expected: &str) -> ParseError {
    ParseError::UnexpectedInput {
        expected: expected.to_string(),
        src: ctx.named_source(),
        span: (at, 0).into(),
    }
}
