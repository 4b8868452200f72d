//! I/O layer: source image decoding (`reader`) and output encoding (`writers`).
pub mod reader;
pub use reader::load_image;

pub mod writers;
