//! Convenience Stream Constructors
//!
//! The object-mode helper and the reusable factory. Both delegate to the
//! canonical constructor; the factory captures a private copy of the
//! recognized options so later mutation of the caller's base configuration
//! cannot reach streams created from it.

use serde_json::Value;

use crate::flowstream::datasource::options::{self, OptionsError};

use super::stream::RandomStream;

impl RandomStream {
    /// Construct a stream with `objectMode` forced true
    ///
    /// Any other supplied options pass through; a conflicting `objectMode`
    /// value is overridden before validation runs, so the override wins.
    pub fn object_mode(options: &Value) -> Result<Self, OptionsError> {
        let mut opts = options.clone();
        if let Value::Object(map) = &mut opts {
            map.insert("objectMode".to_string(), Value::Bool(true));
        }
        Self::from_options(&opts)
    }

    /// Create a reusable factory from a base configuration
    pub fn factory(options: &Value) -> StreamFactory {
        StreamFactory::new(options)
    }
}

/// Reusable stream factory
///
/// Holds a snapshot of only the recognized option keys from the base
/// configuration. Each [`StreamFactory::create`] call builds a fresh,
/// independent stream from that snapshot.
#[derive(Debug, Clone)]
pub struct StreamFactory {
    options: Value,
}

impl StreamFactory {
    /// Capture a base configuration
    ///
    /// A non-object base value is kept verbatim; its validation error is
    /// reported by `create`, never silently swallowed here.
    pub fn new(options: &Value) -> Self {
        Self {
            options: options::copy_options(options),
        }
    }

    /// Build a fresh stream from the captured configuration
    pub fn create(&self) -> Result<RandomStream, OptionsError> {
        RandomStream::from_options(&self.options)
    }
}
