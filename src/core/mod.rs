//! Núcleo del emparejamiento: términos → similitud → selección.

pub mod error;
pub mod ranking;
pub mod similarity;
pub mod terms;
