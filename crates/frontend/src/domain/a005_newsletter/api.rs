use contracts::domain::a005_leads::{LeadReply, NewsletterSubscription};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Subscribe an address to the newsletter. A refused subscription comes back
/// as a non-2xx with the reason in the same `{message}` shape, which is
/// surfaced to the caller as the error string.
pub async fn subscribe(request: &NewsletterSubscription) -> Result<LeadReply, String> {
    let response = Request::post(&api_url("/api/newsletter/subscribe/"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Connection error. Please try again later.".to_string())?;

    if !response.ok() {
        if let Ok(reply) = response.json::<LeadReply>().await {
            return Err(reply.message);
        }
        return Err("Something went wrong. Please try again.".to_string());
    }

    response
        .json::<LeadReply>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
