//! Statistical evaluation of generated sequences.

pub mod smirnov;
