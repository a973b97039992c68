//! Core types for easel.

pub mod chat;
pub mod image;
pub mod usage;

pub use chat::*;
pub use image::*;
pub use usage::*;
