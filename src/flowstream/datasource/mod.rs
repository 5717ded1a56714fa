//! Data Source Abstraction Layer
//!
//! This module provides a pull-based data source whose construction options
//! are validated before the source ever goes live. The concrete producer is
//! synthetic (uniform random values), but the option-validation and
//! lifecycle contracts are independent of where the values come from.
//!
//! ## Architecture
//!
//! - **options**: dynamic option validation with per-key checkers
//! - **random**: the synthetic stream implementation, its typed
//!   configuration, and the convenience constructors (object-mode helper,
//!   reusable factory)

pub mod options;
pub mod random;

// Re-export core types
pub use options::{copy_options, validate, OptionsError};
pub use random::{RandomSourceConfig, RandomStream, StreamEvent, StreamFactory, StreamValue};
