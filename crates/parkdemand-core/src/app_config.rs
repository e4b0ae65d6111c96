use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// PredictHQ access token. Without it the sidebar controls are disabled.
    pub phq_access_token: Option<String>,
    pub phq_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub radius_cache_capacity: usize,
    /// Markdown snippet directory; `None` serves the bundled snippets.
    pub code_examples_dir: Option<PathBuf>,
    pub session_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "phq_access_token",
                &self.phq_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("phq_base_url", &self.phq_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("radius_cache_capacity", &self.radius_cache_capacity)
            .field("code_examples_dir", &self.code_examples_dir)
            .field("session_path", &self.session_path)
            .finish()
    }
}
