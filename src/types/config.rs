//! Configuration structures.
//!
//! Launch parameters for the spawned MineCode server process. The defaults
//! mirror the by-convention layout: a `server.py` started with `python3` in
//! the current working directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Launch parameters for the MineCode server child process.
///
/// No validation happens here; a wrong command surfaces as a spawn or
/// connection failure downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerLaunchConfig {
    /// Executable to spawn.
    pub command: String,

    /// Arguments passed to the executable.
    pub args: Vec<String>,

    /// Working directory for the child. `None` inherits the client's cwd.
    pub cwd: Option<PathBuf>,
}

impl Default for ServerLaunchConfig {
    fn default() -> Self {
        Self {
            command: "python3".to_string(),
            args: vec!["server.py".to_string()],
            cwd: None,
        }
    }
}
