use contracts::domain::a003_checkout::{CheckoutRequest, PaymentConfig};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Create an order/checkout session on the backend.
///
/// The storefront's submission flow simulates processing locally and does
/// not call this; it is the entry point a real payment integration drives,
/// and such an integration must stay on the details step and surface the
/// error when this call fails.
pub async fn create_checkout_session(request: &CheckoutRequest) -> Result<serde_json::Value, String> {
    let response = Request::post(&api_url("/api/store/checkout/"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Checkout failed: {}", response.status()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Public payment-provider configuration, fetched when the details step
/// opens.
pub async fn fetch_payment_config() -> Result<PaymentConfig, String> {
    let response = Request::get(&api_url("/api/store/stripe/config/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Payment config failed: {}", response.status()));
    }

    response
        .json::<PaymentConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
