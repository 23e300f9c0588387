use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Board, Unit, Vial};

/// The persisted puzzle format: one JSON object per line.
///
/// The same shape is written by the generator binary, so the two stay in sync
/// through this one definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub vial_size: usize,
    pub vials: Vec<Vec<Unit>>,
}

/// Errors produced while loading a puzzle line.
///
/// These are data-validation failures, expected and user-facing; the caller
/// reports them together with the offending line number.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("\"vial_size\" must be a positive integer")]
    ZeroVialSize,

    #[error("vial {index} holds {len} units but \"vial_size\" is {vial_size}")]
    VialTooFull {
        index: usize,
        len: usize,
        vial_size: usize,
    },
}

/// Parses and validates one puzzle line into a fresh board.
///
/// serde rejects malformed structure, missing fields, and wrong element
/// types (including negative units); the capacity of each vial is checked
/// here since the format cannot express it.
pub fn load_board(line: &str) -> Result<Board, LoadError> {
    let puzzle: Puzzle = serde_json::from_str(line)?;

    if puzzle.vial_size == 0 {
        return Err(LoadError::ZeroVialSize);
    }

    for (index, vial) in puzzle.vials.iter().enumerate() {
        if vial.len() > puzzle.vial_size {
            return Err(LoadError::VialTooFull {
                index,
                len: vial.len(),
                vial_size: puzzle.vial_size,
            });
        }
    }

    Ok(Board::new(
        puzzle.vial_size,
        puzzle.vials.into_iter().map(Vial::from_units).collect(),
    ))
}
