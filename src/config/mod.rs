use crate::utils::error::Result;
use crate::utils::validation::{
    validate_listen_addr, validate_non_empty_string, validate_repo_slug, validate_url, Validate,
};
use clap::Parser;

/// Gateway configuration, injected per invocation. Read from flags or the
/// environment, never from process-wide globals.
#[derive(Debug, Clone, Parser)]
#[command(name = "site-relay")]
#[command(about = "HTTP relay gateway for site form submissions")]
pub struct GatewayConfig {
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8787")]
    pub listen_addr: String,

    /// Payment provider secret key. Absent key degrades checkout to 500.
    #[arg(long, env = "PAYMENT_SECRET_KEY", hide_env_values = true)]
    pub payment_secret_key: Option<String>,

    #[arg(long, env = "DEFAULT_PRICE_ID", default_value = "price_beta_monthly")]
    pub default_price_id: String,

    #[arg(long, env = "CHECKOUT_SUCCESS_URL", default_value = "https://example.com/thanks")]
    pub success_url: String,

    #[arg(long, env = "CHECKOUT_CANCEL_URL", default_value = "https://example.com/pricing")]
    pub cancel_url: String,

    /// Issue tracker token. Absent token falls back to anonymous rate limits.
    #[arg(long, env = "TRACKER_TOKEN", hide_env_values = true)]
    pub tracker_token: Option<String>,

    #[arg(long, env = "TRACKER_REPO", default_value = "example/site")]
    pub tracker_repo: String,

    #[arg(long, env = "PAYMENT_API_BASE", default_value = "https://api.stripe.com")]
    pub payment_api_base: String,

    #[arg(long, env = "TRACKER_API_BASE", default_value = "https://api.github.com")]
    pub tracker_api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs")]
    pub log_json: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8787".to_string(),
            payment_secret_key: None,
            default_price_id: "price_beta_monthly".to_string(),
            success_url: "https://example.com/thanks".to_string(),
            cancel_url: "https://example.com/pricing".to_string(),
            tracker_token: None,
            tracker_repo: "example/site".to_string(),
            payment_api_base: "https://api.stripe.com".to_string(),
            tracker_api_base: "https://api.github.com".to_string(),
            verbose: false,
            log_json: false,
        }
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_listen_addr("listen_addr", &self.listen_addr)?;
        validate_url("payment_api_base", &self.payment_api_base)?;
        validate_url("tracker_api_base", &self.tracker_api_base)?;
        validate_url("success_url", &self.success_url)?;
        validate_url("cancel_url", &self.cancel_url)?;
        validate_repo_slug("tracker_repo", &self.tracker_repo)?;
        validate_non_empty_string("default_price_id", &self.default_price_id)?;
        Ok(())
    }
}

/// Configuration for the one-shot SMTP test script.
#[derive(Debug, Clone, Parser)]
#[command(name = "smtp-test")]
#[command(about = "Send a single test email through the mail relay")]
pub struct SmtpConfig {
    /// Recipient address.
    #[arg(default_value = "test@example.com")]
    pub to: String,

    #[arg(long, env = "SMTP_RELAY_HOST", default_value = "smtp-relay.example.com")]
    pub relay_host: String,

    #[arg(long, env = "SMTP_USERNAME")]
    pub username: String,

    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(long, env = "SMTP_FROM", default_value = "Site Relay <no-reply@example.com>")]
    pub from: String,
}

impl Validate for SmtpConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("relay_host", &self.relay_host)?;
        validate_non_empty_string("username", &self.username)?;
        validate_non_empty_string("to", &self.to)?;
        Ok(())
    }
}
