//! Newline-delimited JSON-RPC over standard input and output
//!
//! Stdout carries protocol frames only; all diagnostics go through `tracing`
//! to stderr. Messages are handled one at a time in arrival order.

use std::io;

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::mcp::rpc::json_rpc_error;
use crate::mcp::server::handle_json_rpc_payload;
use crate::AppState;

pub async fn serve_stdio(state: AppState) -> io::Result<()> {
    info!("serving mcp over stdio");
    serve(&state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Reads frames until end of input. Returns early only on I/O errors.
pub async fn serve<R, W>(state: &AppState, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Ok(payload) => handle_json_rpc_payload(state, payload).await,
            Err(err) => {
                debug!(error = %err, "discarding unparsable stdio frame");
                Some(json_rpc_error(None, -32700, "Parse error"))
            }
        };

        if let Some(response) = response {
            write_frame(&mut writer, &response).await?;
        }
    }

    info!("stdin closed, stopping stdio transport");
    Ok(())
}

async fn write_frame<W>(writer: &mut W, frame: &Value) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes = serde_json::to_vec(frame).map_err(io::Error::other)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await
}
