//! Pull values from a random stream and forward them to stdout, then shut
//! the stream down gracefully.
//!
//! Run with: cargo run --example pipe_to_stdout

use futures::StreamExt;
use serde_json::json;

use flowstream::{RandomStream, StreamEvent, StreamValue};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut stream = RandomStream::object_mode(&json!({ "highWaterMark": 16 }))?;
    let mut events = stream.subscribe();

    for _ in 0..1000 {
        if let Some(StreamValue::Record(sample)) = stream.next().await {
            println!("{}", sample);
        }
    }

    stream.destroy(None);
    while let Ok(event) = events.recv().await {
        if matches!(event, StreamEvent::Close) {
            eprintln!("stream closed");
            break;
        }
    }

    Ok(())
}
