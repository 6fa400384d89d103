//! Error taxonomy and ratio types

pub mod errors;
pub mod fraction;
