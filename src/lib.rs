pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod selection;

pub use error::{GeopickError, Result};
