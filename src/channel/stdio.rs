//! Stdio transport — spawns the server process and wires its pipes.

use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::BufReader;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use crate::channel::{CallToolResult, RpcChannel, ServerInfo, ToolChannel, ToolDescriptor};
use crate::types::{Error, Result, ServerLaunchConfig};

/// Tool channel over a spawned child process's stdin/stdout.
///
/// The child's stderr is inherited so server-side diagnostics land on the
/// client's console. The child is killed on drop if still running; servers
/// that follow the protocol exit on their own once stdin closes.
#[derive(Debug)]
pub struct StdioChannel {
    child: Child,
    inner: RpcChannel<BufReader<ChildStdout>, ChildStdin>,
}

impl StdioChannel {
    /// Spawn the server process and wire up its pipes.
    ///
    /// No path validation happens here; a wrong command fails at spawn or at
    /// the first handshake read.
    pub fn spawn(config: &ServerLaunchConfig) -> Result<Self> {
        let mut command = Command::new(&config.command);
        command
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        if let Some(cwd) = &config.cwd {
            command.current_dir(cwd);
        }

        let mut child = command.spawn().map_err(|e| {
            Error::spawn(format!("failed to launch '{}': {}", config.command, e))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::channel("child stdin was not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::channel("child stdout was not captured"))?;

        tracing::debug!(
            command = %config.command,
            args = ?config.args,
            pid = child.id(),
            "server process spawned"
        );

        Ok(Self {
            child,
            inner: RpcChannel::new(BufReader::new(stdout), stdin),
        })
    }

    /// Close the channel and wait for the server to exit.
    ///
    /// Dropping the inner channel closes the child's stdin; protocol servers
    /// treat that EOF as the shutdown signal.
    pub async fn shutdown(mut self) -> Result<std::process::ExitStatus> {
        drop(self.inner);
        Ok(self.child.wait().await?)
    }
}

#[async_trait]
impl ToolChannel for StdioChannel {
    async fn initialize(&mut self) -> Result<ServerInfo> {
        self.inner.initialize().await
    }

    async fn list_tools(&mut self) -> Result<Vec<ToolDescriptor>> {
        self.inner.list_tools().await
    }

    async fn call_tool(&mut self, name: &str, arguments: Value) -> Result<CallToolResult> {
        self.inner.call_tool(name, arguments).await
    }
}
