//! Smoke-test runner — drives the fixed tool-call script and reports to a
//! human reader.
//!
//! One connection, six hard-coded invocations in a fixed order. A failed
//! call is logged, printed, and skipped past; everything else propagates and
//! aborts the run.

use std::io::Write;

use serde_json::{json, Value};

use crate::channel::ToolChannel;
use crate::types::Result;

const BANNER: &str = "============================================================";

/// One fixed invocation of the smoke script.
#[derive(Debug)]
pub struct SmokeCase {
    /// Section label, printed in the test header.
    pub label: &'static str,
    /// Tool to invoke.
    pub tool: &'static str,
    /// Canned argument mapping.
    pub arguments: Value,
    /// Whether the payload is JSON to be re-printed with 2-space indent.
    pub structured: bool,
}

/// The six fixed invocations, in documented order.
pub fn smoke_cases() -> Vec<SmokeCase> {
    vec![
        SmokeCase {
            label: "hello_world (without name)",
            tool: "hello_world",
            arguments: json!({}),
            structured: false,
        },
        SmokeCase {
            label: "hello_world (with name)",
            tool: "hello_world",
            arguments: json!({"name": "MineCode Developer"}),
            structured: false,
        },
        SmokeCase {
            label: "get_minecraft_version",
            tool: "get_minecraft_version",
            arguments: json!({"version": "1.20.1"}),
            structured: true,
        },
        SmokeCase {
            label: "search_wiki",
            tool: "search_wiki",
            arguments: json!({"query": "command"}),
            structured: true,
        },
        SmokeCase {
            label: "list_commands",
            tool: "list_commands",
            arguments: json!({
                "version": "1.20.1",
                "category": "admin",
            }),
            structured: true,
        },
        SmokeCase {
            label: "validate_datapack",
            tool: "validate_datapack",
            arguments: json!({
                "datapack_path": "/path/to/datapack",
                "mc_version": "1.20.1",
            }),
            structured: true,
        },
    ]
}

/// Run the whole script: handshake, catalog listing, six invocations.
///
/// Per-call failures are contained; handshake, listing, and I/O failures
/// propagate to the caller.
pub async fn run_smoke_test<C, W>(channel: &mut C, out: &mut W) -> Result<()>
where
    C: ToolChannel + Send,
    W: Write,
{
    let server = channel.initialize().await?;
    tracing::info!(
        "connected to '{}' v{} (protocol {})",
        server.name,
        server.version,
        server.protocol_version,
    );

    writeln!(out, "{BANNER}")?;
    writeln!(out, "Available Tools on MineCode Server:")?;
    writeln!(out, "{BANNER}")?;

    // Server order is authoritative; no re-sorting.
    let tools = channel.list_tools().await?;
    for tool in &tools {
        writeln!(out)?;
        writeln!(out, "📌 {}", tool.name)?;
        writeln!(out, "   Description: {}", tool.description.as_deref().unwrap_or(""))?;
    }

    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Testing Tools:")?;
    writeln!(out, "{BANNER}")?;

    for (index, case) in smoke_cases().into_iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "🧪 Test {}: {}", index + 1, case.label)?;

        // The only failure-containment point in the system: log, print, and
        // move on to the next call.
        let result = match channel.call_tool(case.tool, case.arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = case.tool, "tool call failed: {}", e);
                writeln!(out, "Error calling {}: {}", case.tool, e)?;
                continue;
            }
        };

        let payload = match result.text() {
            Some(text) => text.to_string(),
            // No text item: fall back to the raw content JSON.
            None => serde_json::to_string(&result.content)?,
        };

        if case.structured {
            // A payload that is not valid JSON aborts the run here.
            let data: Value = serde_json::from_str(&payload)?;
            writeln!(out, "   Result: {}", serde_json::to_string_pretty(&data)?)?;
        } else {
            writeln!(out, "   Result: {payload}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "✅ All tests completed!")?;
    writeln!(out, "{BANNER}")?;

    Ok(())
}
