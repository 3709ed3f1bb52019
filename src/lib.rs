//! Portfolio page with an auto-rotating testimonials carousel, rendered with raylib.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod effects;
pub mod engine;
pub mod error;
pub mod page;
pub mod state;
pub mod texture_loader;

pub use error::{Error, Result};
