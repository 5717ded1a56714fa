pub mod datasource;
pub mod error;

// Re-export the stream types for convenient access
pub use datasource::random::{RandomSourceConfig, RandomStream, StreamEvent, StreamValue};
pub use error::{FlowStreamError, FlowStreamResult};
