//! Random Stream Implementation
//!
//! The stream services every pull synchronously (value generation is a pure
//! computation), so the only asynchronous behavior is the deferred
//! notification emission in [`RandomStream::destroy`]: the error/close
//! events are posted to the runtime and land strictly after the synchronous
//! call returns.
//!
//! The deferral guarantee relies on cooperative turn-based scheduling and
//! therefore on tokio's current-thread runtime flavor. On a multi-threaded
//! runtime another worker could deliver the notifications while the
//! destroying turn is still executing.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::broadcast;

use crate::flowstream::datasource::options::OptionsError;
use crate::flowstream::error::FlowStreamError;

use super::config::RandomSourceConfig;

/// A single value produced by a stream pull
#[derive(Debug, Clone, PartialEq)]
pub enum StreamValue {
    /// Opaque structured value (object mode)
    Record(f64),
    /// Text chunk decoded per the configured encoding
    Text(String),
    /// Raw byte chunk (no encoding configured)
    Bytes(Vec<u8>),
}

/// Lifecycle notification delivered to subscribers after a destroy
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Advisory error supplied to `destroy`; precedes `Close` when present
    Error(String),
    /// The stream closed; always the final event
    Close,
}

// Must hold the error/close pair emitted by a destroy before any
// subscriber gets scheduled
const EVENT_CHANNEL_CAPACITY: usize = 4;

/// Pull-based synthetic data source
///
/// Lifecycle: `CONSTRUCTED(valid) -> LIVE -> DESTROYED`, with no transition
/// out of `DESTROYED`. Construction fails outright on invalid options; no
/// partially-constructed stream escapes to the caller.
pub struct RandomStream {
    config: RandomSourceConfig,
    destroyed: bool,
    rng: SmallRng,
    events: broadcast::Sender<StreamEvent>,
}

impl RandomStream {
    /// Create a stream with an empty configuration (all defaults)
    pub fn new() -> Self {
        Self::build(RandomSourceConfig::default())
    }

    /// Create a stream from dynamic options
    ///
    /// Validation runs before anything else; an invalid configuration is a
    /// fatal construction failure.
    pub fn from_options(options: &Value) -> Result<Self, OptionsError> {
        Ok(Self::build(RandomSourceConfig::from_options(options)?))
    }

    /// Create a stream from a typed configuration
    pub fn from_config(config: RandomSourceConfig) -> Result<Self, OptionsError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RandomSourceConfig) -> Self {
        debug!(
            "random stream created: object_mode={}, encoding={:?}, high_water_mark={}",
            config.object_mode,
            config.encoding,
            config.effective_high_water_mark()
        );
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            destroyed: false,
            rng: SmallRng::from_entropy(),
            events,
        }
    }

    /// Whether the stream has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether the stream produces structured values
    pub fn is_object_mode(&self) -> bool {
        self.config.object_mode
    }

    /// The effective text encoding, if any
    pub fn encoding(&self) -> Option<&str> {
        self.config.encoding.as_deref()
    }

    /// The effective buffering threshold
    pub fn high_water_mark(&self) -> usize {
        self.config.effective_high_water_mark()
    }

    /// The stream's configuration
    pub fn config(&self) -> &RandomSourceConfig {
        &self.config
    }

    /// Get a receiver for lifecycle notifications
    ///
    /// Subscribers receive [`StreamEvent::Error`] (only when `destroy` was
    /// given an error) followed by [`StreamEvent::Close`].
    pub fn subscribe(&self) -> broadcast::Receiver<StreamEvent> {
        self.events.subscribe()
    }

    /// Pull up to one high-water-mark's worth of values in a single request
    ///
    /// Batched variant of the one-value-per-poll pull; returns an empty
    /// batch once the stream is destroyed.
    pub fn read_batch(&mut self) -> Vec<StreamValue> {
        if self.destroyed {
            return Vec::new();
        }
        let capacity = self.config.effective_high_water_mark();
        (0..capacity).map(|_| self.next_value()).collect()
    }

    /// Gracefully destroy the stream
    ///
    /// Idempotent: the first call flips the destroyed flag and schedules
    /// the notifications; subsequent calls are no-ops. The notifications
    /// are emitted on a later scheduler turn, so a caller never observes
    /// them synchronously. Returns the stream to support chaining.
    ///
    /// Destroying outside a tokio runtime still flips the flag and
    /// returns; there is no later turn to defer to in that case, so the
    /// notifications are dropped with a warning.
    pub fn destroy(&mut self, error: Option<FlowStreamError>) -> &mut Self {
        if self.destroyed {
            return self;
        }
        self.destroyed = true;
        debug!("random stream destroyed: error={}", error.is_some());

        match Handle::try_current() {
            Ok(handle) => {
                let events = self.events.clone();
                handle.spawn(async move {
                    if let Some(error) = error {
                        if events.send(StreamEvent::Error(error.to_string())).is_err() {
                            warn!("stream error notification dropped: no subscribers");
                        }
                    }
                    if events.send(StreamEvent::Close).is_err() {
                        warn!("stream close notification dropped: no subscribers");
                    }
                });
            }
            Err(_) => {
                warn!("stream destroyed outside a runtime: notifications dropped");
            }
        }
        self
    }

    /// Produce the next value
    ///
    /// Placeholder producer: one uniform random sample in `[0, 1)` per
    /// pull. A real implementation would draw from an external feed while
    /// keeping the one-push-per-pull contract.
    fn next_value(&mut self) -> StreamValue {
        let sample: f64 = self.rng.gen();
        if self.config.object_mode {
            StreamValue::Record(sample)
        } else {
            let text = sample.to_string();
            match self.config.encoding {
                Some(_) => StreamValue::Text(text),
                None => StreamValue::Bytes(text.into_bytes()),
            }
        }
    }
}

impl Default for RandomStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for RandomStream {
    type Item = StreamValue;

    /// One value per pull request while live; end of sequence once
    /// destroyed. Generation never blocks.
    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.destroyed {
            Poll::Ready(None)
        } else {
            Poll::Ready(Some(this.next_value()))
        }
    }
}

impl std::fmt::Debug for RandomStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomStream")
            .field("config", &self.config)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
