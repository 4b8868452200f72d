//! Core building blocks: the resize plan (`params`) and the Lanczos resize
//! primitive (`processing`). These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
