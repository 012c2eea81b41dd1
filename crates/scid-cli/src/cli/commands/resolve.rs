//! `scid resolve <url>` – resolve one URL.

use anyhow::Result;
use scid_core::config::ScidConfig;
use scid_core::controller::Controller;
use scid_core::session::Session;
use scid_core::transport::CurlTransport;
use std::sync::Arc;

use crate::cli::terminal::TerminalView;

pub async fn run_resolve(cfg: &ScidConfig, url: &str) -> Result<bool> {
    let controller = Controller::new(cfg, TerminalView::new(std::io::stdout()));
    let mut session = Session::new(controller, Arc::new(CurlTransport::from_config(cfg)));
    session.submit(url);
    session.drain().await;
    Ok(!session.controller().state().is_error())
}
