//! Synthetic Random Data Source
//!
//! A pull-based stream that produces uniform random values in `[0, 1)`.
//! The producer is a stand-in for a real external feed; the configuration,
//! pull, and destroy contracts are what downstream consumers rely on.

pub mod config;
pub mod factory;
pub mod stream;

pub use config::{defaults, RandomSourceConfig};
pub use factory::StreamFactory;
pub use stream::{RandomStream, StreamEvent, StreamValue};
