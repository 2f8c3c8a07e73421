use crate::config::GatewayConfig;
use crate::domain::model::{CheckoutSession, SessionRequest};
use crate::domain::ports::CheckoutProvider;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Checkout-session client for a Stripe-shaped payment API.
pub struct StripeCheckout {
    base: String,
    secret: Option<String>,
    client: Client,
}

impl StripeCheckout {
    pub fn new(config: &GatewayConfig, client: Client) -> Self {
        Self {
            base: config.payment_api_base.trim_end_matches('/').to_string(),
            secret: config.payment_secret_key.clone(),
            client,
        }
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(&self, request: &SessionRequest) -> Result<CheckoutSession> {
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| RelayError::MissingConfigError {
                field: "payment_secret_key".to_string(),
            })?;

        let mut form: Vec<(&str, String)> = vec![
            ("mode", "payment".to_string()),
            ("line_items[0][price]", request.price_id.clone()),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
        ];
        if let Some(email) = &request.customer_email {
            form.push(("customer_email", email.clone()));
        }

        tracing::debug!(price = %request.price_id, "requesting checkout session");
        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.base))
            .bearer_auth(secret)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "payment provider rejected session request");
            return Err(RelayError::UpstreamError {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<CheckoutSession>().await?)
    }
}
