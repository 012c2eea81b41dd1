//! Resolver controller: owns the current [`ViewState`] and re-renders on every write.
//!
//! The controller never performs I/O. [`Controller::submit`] validates the
//! input and builds the request; the caller issues the GET and hands the
//! outcome back through [`Controller::complete`]. See [`crate::session`] for the
//! async driver.

use url::Url;

use crate::config::ScidConfig;
use crate::resolve::{self, ResolveError};
use crate::transport::TransportError;
use crate::view::{View, ViewState};

pub struct Controller<V: View> {
    state: ViewState,
    view: V,
    endpoint: String,
    client_id: String,
}

impl<V: View> Controller<V> {
    /// Creates the controller and renders the initial `WaitingForInput` screen.
    pub fn new(cfg: &ScidConfig, view: V) -> Self {
        let mut controller = Self {
            state: ViewState::WaitingForInput,
            view,
            endpoint: cfg.endpoint.clone(),
            client_id: cfg.client_id.clone(),
        };
        controller.reset();
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn set_state(&mut self, state: ViewState) {
        tracing::debug!(?state, "view state");
        self.state = state;
        let screen = self.state.render();
        self.view.show(&screen);
    }

    /// Back to `WaitingForInput`; clears input, info and output.
    pub fn reset(&mut self) {
        self.set_state(ViewState::WaitingForInput);
    }

    /// Validates `raw` and builds the resolve request.
    ///
    /// Returns the request URL to GET, after moving to `FetchingData`. On a
    /// validation or construction failure the error state is set and `None`
    /// is returned.
    pub fn submit(&mut self, raw: &str) -> Option<Url> {
        let prepared = resolve::validate_input(raw).and_then(|input| {
            resolve::build_request(&self.endpoint, &self.client_id, raw)
                .map(|request| (input, request))
        });
        match prepared {
            Ok((input, request)) => {
                tracing::info!(input = %input, "resolving");
                self.set_state(ViewState::FetchingData(input));
                Some(request)
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    /// Applies the outcome of a GET issued for an earlier [`submit`](Self::submit).
    pub fn complete(&mut self, outcome: Result<Vec<u8>, TransportError>) {
        match outcome
            .map_err(ResolveError::from)
            .and_then(|body| resolve::decode_body(&body))
        {
            Ok(result) => {
                tracing::info!(id = result.id, "resolved");
                self.set_state(ViewState::DisplayingResult(result));
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: ResolveError) {
        tracing::warn!(error = ?e, "resolve failed");
        self.set_state(ViewState::Error(e.to_string()));
    }
}
