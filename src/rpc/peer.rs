//! Single-in-flight request/response peer.
//!
//! The smoke test never pipelines: one request is written and its response
//! awaited before anything else happens. The peer therefore reads until it
//! sees the response carrying the id it just assigned, discarding anything
//! else the server volunteers in between (log notifications and the like).

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::rpc::codec::{read_message, write_message};
use crate::rpc::protocol::{Notification, Request, Response};
use crate::types::{Error, Result};

/// Client side of a JSON-RPC 2.0 connection over a pair of byte streams.
#[derive(Debug)]
pub struct JsonRpcPeer<R, W> {
    reader: R,
    writer: W,
    next_id: u64,
}

impl<R, W> JsonRpcPeer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            next_id: 1,
        }
    }

    /// Issue one request and await its response.
    ///
    /// Returns the `result` member, or `Error::Rpc` if the server answered
    /// with an `error` member.
    pub async fn request(&mut self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id;
        self.next_id += 1;

        let request = Request::new(id, method, params);
        write_message(&mut self.writer, &request).await?;

        loop {
            let message = read_message(&mut self.reader).await?.ok_or_else(|| {
                Error::channel(format!("server closed the channel awaiting '{method}'"))
            })?;

            // Not ours: a server notification or a stale id. Skip it.
            let matches = message.get("id").and_then(Value::as_u64) == Some(id);
            if !matches {
                tracing::debug!(method, "skipping unrelated message: {}", message);
                continue;
            }

            let response: Response = serde_json::from_value(message)?;
            if let Some(error) = response.error {
                return Err(Error::rpc(error.code, error.message));
            }
            return response
                .result
                .ok_or_else(|| Error::protocol(format!("response to '{method}' has neither result nor error")));
        }
    }

    /// Send a notification; nothing is read back.
    pub async fn notify(&mut self, method: &str, params: Value) -> Result<()> {
        let note = Notification::new(method, params);
        write_message(&mut self.writer, &note).await
    }
}
