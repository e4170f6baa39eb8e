//! Core building blocks: the closed-form sum-of-squares formula, perfect-square
//! tests, and the sequential scanner. These are the primitives consumed by the
//! high-level `api` module.
pub mod formula;
pub mod params;
pub mod scanner;
pub mod square;
