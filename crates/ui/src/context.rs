use std::sync::Arc;

use services::SessionLoop;

/// Collaborators the desktop shell hands to the UI.
pub trait UiApp: Send + Sync {
    /// Where the questions come from, for display.
    fn source_label(&self) -> String;

    fn session_loop(&self) -> Arc<SessionLoop>;
}

#[derive(Clone)]
pub struct AppContext {
    source_label: String,
    session_loop: Arc<SessionLoop>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            source_label: app.source_label(),
            session_loop: app.session_loop(),
        }
    }

    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoop> {
        Arc::clone(&self.session_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
