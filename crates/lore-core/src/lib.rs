//! # lore-core - Core Domain Types
//!
//! Foundation crate for Lore Agent. Provides domain types, the static
//! content catalog, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, toml).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Tab`] - The five mutually exclusive panels
//! - [`ConsoleLine`], [`LineKind`] - One entry of the agent console transcript
//! - [`AgentStatus`] - Ready / Processing indicator
//! - [`AppPhase`] - Running or quitting
//!
//! ### Catalog (`catalog`)
//! Immutable reference data rendered by the panels (features, portfolio,
//! documentation sections, example commands, ...).
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lore_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{AgentStatus, AppPhase, ConsoleLine, LineKind, Tab};
