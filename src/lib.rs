//! # flowstream
//!
//! A minimal, configurable pull-based data source. Streams validate their
//! construction options up front, emit one synthetic value per pull request,
//! and deliver error/close notifications asynchronously after a graceful
//! destroy.
//!
//! The value producer is a placeholder (uniform random numbers in `[0, 1)`);
//! a real deployment would swap in an external feed while keeping the same
//! option-validation and lifecycle contract.
//!
//! ## Features
//!
//! - **Validated Options**: dynamic configuration objects are checked
//!   key-by-key before a stream ever goes live
//! - **Pull-Based Consumption**: streams implement [`futures::Stream`],
//!   producing exactly one value per pull
//! - **Graceful Shutdown**: `destroy` is idempotent and defers its
//!   error/close notifications to a later scheduler turn
//! - **Reusable Factories**: capture a base configuration once and mint
//!   independent streams from a private copy of it
//!
//! Streams target tokio's current-thread runtime: the "notifications are
//! never observable in the destroying turn" guarantee comes from
//! cooperative turn-based scheduling, which a multi-threaded runtime does
//! not provide.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowstream::{RandomStream, StreamEvent};
//! use futures::StreamExt;
//! use serde_json::json;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Object-mode stream with an explicit buffering threshold
//!     let mut stream = RandomStream::object_mode(&json!({ "highWaterMark": 16 }))?;
//!     let mut events = stream.subscribe();
//!
//!     // Pull a few values
//!     for _ in 0..3 {
//!         if let Some(value) = stream.next().await {
//!             println!("pulled: {:?}", value);
//!         }
//!     }
//!
//!     // Graceful shutdown; the close notification arrives on a later turn
//!     stream.destroy(None);
//!     while let Ok(event) = events.recv().await {
//!         println!("event: {:?}", event);
//!         if matches!(event, StreamEvent::Close) {
//!             break;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod flowstream;

// Re-export main API at crate root for easy access
pub use flowstream::datasource::options::{validate, OptionsError};
pub use flowstream::datasource::random::{
    defaults, RandomSourceConfig, RandomStream, StreamEvent, StreamFactory, StreamValue,
};
pub use flowstream::error::{FlowStreamError, FlowStreamResult};
