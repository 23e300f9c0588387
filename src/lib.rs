//! vialsort — a terminal liquid-sorting puzzle.
//!
//! The core lives in [`model`]: vials, the two reversible actions (pour and
//! add-empty-vial), the undo history, and the solved predicate. Everything
//! around it is a collaborator: [`loader`] parses puzzle lines, [`generator`]
//! deals fresh puzzles, [`renderer`] draws boards with ANSI styling, and
//! [`gameplay`] runs the interactive command loop.

pub mod gameplay;
pub mod generator;
pub mod loader;
pub mod model;
pub mod renderer;
