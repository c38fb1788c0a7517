//! Line format for generated vectors: `[c0, c1, ..., cn],` plus a newline.
//!
//! The trailing comma is kept so files can be pasted into a larger list literal.

use crate::domain::model::Vector;
use crate::utils::error::{GenError, Result};
use itertools::Itertools;

const SEPARATOR: &str = ", ";

pub fn format_vector(vector: &Vector) -> String {
    format!("[{}],\n", vector.components().iter().join(SEPARATOR))
}

pub fn parse_line(line: &str) -> Result<Vector> {
    let malformed = |reason: &str| GenError::FormatError {
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let body = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    let body = body
        .strip_suffix(',')
        .ok_or_else(|| malformed("missing trailing comma"))?;
    let body = body
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'))
        .ok_or_else(|| malformed("missing brackets"))?;

    if body.is_empty() {
        return Ok(Vector::from(Vec::new()));
    }

    body.split(SEPARATOR)
        .map(|part| {
            part.parse::<i64>()
                .map_err(|e| malformed(&format!("bad component {:?}: {}", part, e)))
        })
        .collect::<Result<Vec<i64>>>()
        .map(Vector::from)
}
