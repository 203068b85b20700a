//! Interactive command loop

use anyhow::Result;
use quotebook_kg::{CommandManager, HELP};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::error;

pub const PROMPT: &str = ">>> ";
pub const FAREWELL: &str = "Good bye!";

/// Read commands from `input` until an exit keyword or end of input
///
/// Every reply is written to `output`. A failing data store is reported
/// and the loop keeps going.
pub async fn run<R, W>(manager: &CommandManager, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{}\n", HELP).as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim_end_matches('\r');

        if manager.is_exit(line) {
            break;
        }

        let rendered = match manager.handle_command(line).await {
            Ok(reply) => reply.to_string(),
            Err(e) => {
                error!("Query failed for {:?}: {}", line, e);
                format!("Error: {}", e)
            }
        };
        output.write_all(format!("{}\n", rendered).as_bytes()).await?;
    }

    output.write_all(format!("{}\n", FAREWELL).as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
