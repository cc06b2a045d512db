//! Greeting Display Widget
//!
//! Owns the single `RequestState` slot. Every load replaces the slot with
//! `Loading`, then with the settled outcome. Overlapping loads are not
//! coordinated: whichever settles last is what the widget shows.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::EndpointConfig;
use crate::greeting::fetch_greeting;
use crate::io::HttpClient;
use crate::state::{Control, RequestState};

#[derive(Clone)]
pub struct GreetingWidget {
    config: EndpointConfig,
    http: Arc<dyn HttpClient>,
    state: Arc<watch::Sender<RequestState>>,
}

impl std::fmt::Debug for GreetingWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetingWidget")
            .field("config", &self.config)
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl GreetingWidget {
    /// Create a widget in the `Loading` state. Nothing is requested until a
    /// load is started.
    pub fn new(config: EndpointConfig, http: Arc<dyn HttpClient>) -> Self {
        let (state, _) = watch::channel(RequestState::Loading);
        tracing::debug!("Created GreetingWidget for {}", config.base_url());
        Self {
            config,
            http,
            state: Arc::new(state),
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state commit
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Fetch the greeting, passing through `Loading`
    pub async fn load_greeting(&self) {
        self.state.send_replace(RequestState::Loading);

        let result = fetch_greeting(self.http.as_ref(), &self.config).await;
        match &result {
            Ok(greeting) => tracing::debug!("Loaded greeting {:?}", greeting.message),
            Err(e) => tracing::warn!("Error fetching hello message: {}", e),
        }

        self.state.send_replace(RequestState::from(result));
    }

    /// Error view control
    pub async fn retry(&self) {
        self.load_greeting().await;
    }

    /// Success view control
    pub async fn refresh(&self) {
        self.load_greeting().await;
    }

    pub async fn activate(&self, control: Control) {
        tracing::debug!("{} activated", control);
        match control {
            Control::Retry => self.retry().await,
            Control::Refresh => self.refresh().await,
        }
    }

    /// Run a load on its own task so the caller keeps accepting input
    pub fn spawn_load(&self) -> JoinHandle<()> {
        let widget = self.clone();
        tokio::spawn(async move { widget.load_greeting().await })
    }
}
