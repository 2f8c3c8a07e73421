use crate::config::GatewayConfig;
use crate::domain::model::{CheckoutAck, CheckoutPayload, SessionRequest};
use crate::domain::ports::CheckoutProvider;
use crate::utils::error::Result;

/// Creates a provider-hosted checkout session for the given submission.
/// Missing optional fields fall back to the configured defaults.
pub async fn create_checkout(
    config: &GatewayConfig,
    provider: &dyn CheckoutProvider,
    payload: CheckoutPayload,
) -> Result<CheckoutAck> {
    let request = resolve_session_request(config, payload);
    tracing::info!(price = %request.price_id, "creating checkout session");

    let session = provider.create_session(&request).await?;
    tracing::info!(session = %session.id, "checkout session created");

    Ok(CheckoutAck {
        session_id: session.id,
        url: session.url,
    })
}

pub fn resolve_session_request(
    config: &GatewayConfig,
    payload: CheckoutPayload,
) -> SessionRequest {
    SessionRequest {
        price_id: non_blank(payload.price_id).unwrap_or_else(|| config.default_price_id.clone()),
        customer_email: non_blank(payload.email),
        success_url: non_blank(payload.success_url).unwrap_or_else(|| config.success_url.clone()),
        cancel_url: non_blank(payload.cancel_url).unwrap_or_else(|| config.cancel_url.clone()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
