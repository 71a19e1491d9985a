//! Layout primitives for the sharpen C# generator.
//!
//! This crate knows nothing about C#. It provides the fragment tree that
//! language nodes render into and the writer that lays fragments out as text.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`RenderConfig`] - Indentation and line ending configuration, loadable from TOML

pub mod builder;
mod config;
mod error;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use config::RenderConfig;
pub use error::ConfigError;
