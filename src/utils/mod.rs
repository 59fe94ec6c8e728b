//! Input parsing helpers shared by the generator and the evaluator.

pub mod digits;
