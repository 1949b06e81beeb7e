//! Per-invocation application context.
//!
//! Resolves config file + environment + CLI flags into a ready
//! [`ApiClient`], restores a stored session token, and carries the
//! shared [`ToastQueue`] commands report through.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use campus_api::ApiClient;
use campus_config as config;
use campus_core::ToastQueue;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub struct AppContext {
    pub client: Arc<ApiClient>,
    pub toasts: ToastQueue,
    pub profile_name: String,
    pub page_size: usize,
    pub quiet: bool,
    pub color: bool,
}

impl AppContext {
    /// Build the context from config and CLI overrides.
    ///
    /// Flag values beat profile values beat defaults. A stored session
    /// token for the active profile is restored if present; commands
    /// that hit authenticated endpoints surface `NotLoggedIn` when it
    /// is missing or expired.
    pub fn build(global: &GlobalOpts) -> Result<Self, CliError> {
        let cfg = config::load_config_or_default();
        let profile_name = global
            .profile
            .clone()
            .or_else(|| cfg.default_profile.clone())
            .unwrap_or_else(|| "default".to_owned());

        let (url, mut timeout, mut page_size) = if let Some(ref server) = global.server {
            let url: Url = server.parse().map_err(|_| CliError::Validation {
                field: "server".into(),
                reason: format!("invalid URL: {server}"),
            })?;
            (
                url,
                Duration::from_secs(cfg.defaults.timeout),
                cfg.defaults.page_size,
            )
        } else {
            let (_, profile) = cfg.profile(global.profile.as_deref()).map_err(|_| {
                CliError::NoServer {
                    path: config::config_path().display().to_string(),
                }
            })?;
            let settings = config::profile_to_settings(&cfg, profile)?;
            (settings.url, settings.timeout, settings.page_size)
        };

        if let Some(secs) = global.timeout {
            timeout = Duration::from_secs(secs);
        }
        if let Ok(size) = std::env::var("CAMPUS_PAGE_SIZE") {
            if let Ok(size) = size.parse() {
                page_size = size;
            }
        }

        let client = ApiClient::new(url, timeout).map_err(CliError::from)?;
        if let Some(token) = config::load_token(&profile_name) {
            client.resume(token);
        }

        Ok(Self {
            client: Arc::new(client),
            toasts: ToastQueue::new(),
            profile_name,
            page_size,
            quiet: global.quiet,
            color: crate::output::should_color(&global.color),
        })
    }

    /// Flush accumulated notices to stderr.
    pub fn print_notices(&self) {
        let toasts = self.toasts.snapshot();
        crate::output::print_notices(&toasts, self.color, self.quiet);
        self.toasts.close();
    }
}
