//! Line codec for the JSON-RPC wire protocol.
//!
//! Frame format:
//! ```text
//! ┌────────────────────────────┬──────┐
//! │  one JSON object, UTF-8    │ '\n' │
//! └────────────────────────────┴──────┘
//! ```
//! Blank lines are skipped on read. `serde_json` never emits raw newlines,
//! so writing a serialized message followed by `\n` is always one frame.

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::types::Result;

/// Read one message from the stream.
///
/// Returns `None` on clean EOF. A line that is not valid JSON is an error.
pub async fn read_message<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<Value>> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None); // clean EOF
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        return Ok(Some(serde_json::from_str(trimmed)?));
    }
}

/// Write one message to the stream.
pub async fn write_message<W, T>(writer: &mut W, message: &T) -> Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let mut encoded = serde_json::to_vec(message)?;
    encoded.push(b'\n');
    writer.write_all(&encoded).await?;
    writer.flush().await?;
    Ok(())
}
