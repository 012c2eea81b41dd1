//! `scid interactive` – resolve one URL per stdin line.

use anyhow::Result;
use scid_core::config::ScidConfig;
use scid_core::controller::Controller;
use scid_core::session::Session;
use scid_core::transport::{CurlTransport, Transport};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::cli::terminal::TerminalView;

pub async fn run_interactive(cfg: &ScidConfig) -> Result<bool> {
    eprintln!("Enter a SoundCloud URL per line (Ctrl-D to quit).");

    let (resolved, _) = resolve_lines(
        cfg,
        Arc::new(CurlTransport::from_config(cfg)),
        BufReader::new(tokio::io::stdin()),
        TerminalView::new(std::io::stdout()),
    )
    .await?;
    Ok(resolved)
}

/// Submits every line of `input`, rendering to `view`, until EOF and all fetches finish.
/// Returns whether the final screen shows an ID, plus the view.
async fn resolve_lines<T, R, W>(
    cfg: &ScidConfig,
    transport: Arc<T>,
    input: R,
    view: TerminalView<W>,
) -> Result<(bool, TerminalView<W>)>
where
    T: Transport,
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write,
{
    let (line_tx, line_rx) = mpsc::channel::<String>(16);
    let reader = tokio::spawn(forward_lines(input, line_tx));

    let controller = Controller::new(cfg, view);
    let mut session = Session::new(controller, transport);
    session.run(line_rx).await;

    reader.await??;
    let controller = session.into_controller();
    let resolved = !controller.state().is_error();
    Ok((resolved, controller.into_view()))
}

/// Sends each line (without its `\n` / `\r\n`) to `tx`. Invalid UTF-8 is
/// replaced rather than ending the stream, so a bad line fails validation alone.
async fn forward_lines<R>(mut input: R, tx: mpsc::Sender<String>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        if tx.send(line).await.is_err() {
            return Ok(());
        }
    }
}
