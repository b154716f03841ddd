//! Text input for systems of equations
//!
//! One system per block of consecutive non-blank lines, blocks separated by
//! one or more blank lines. Each line is an equation row of
//! whitespace-separated numbers: the variable coefficients followed by the
//! right-hand-side constant.
//!
//! Shape is not checked here. A block with jagged rows still parses into a
//! [`LinearSystem`]; the solvers report the shape error, so a malformed
//! system in a multi-system file fails on its own instead of aborting the
//! whole file.

use crate::system::LinearSystem;
use thiserror::Error;

/// Errors that can occur while reading system text
#[derive(Debug, Error)]
pub enum ParseError {
    /// A token could not be parsed as a floating-point number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number in the input text
        line: usize,
        /// The offending token
        token: String,
    },
}

/// Parse blank-line-separated blocks of equation rows.
///
/// Empty blocks (runs of several blank lines, leading or trailing blank
/// lines) are skipped.
pub fn parse_systems(input: &str) -> Result<Vec<LinearSystem<f64>>, ParseError> {
    let mut systems = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            if !rows.is_empty() {
                systems.push(LinearSystem::from_rows(std::mem::take(&mut rows)));
            }
            continue;
        }

        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    if !rows.is_empty() {
        systems.push(LinearSystem::from_rows(rows));
    }

    Ok(systems)
}
