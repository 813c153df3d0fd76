use contracts::domain::a005_leads::{LeadReply, WholesaleInquiry};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Submit a wholesale partnership inquiry.
pub async fn submit_inquiry(request: &WholesaleInquiry) -> Result<LeadReply, String> {
    let response = Request::post(&api_url("/api/store/wholesale-inquiry/"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Inquiry failed: {}", response.status()));
    }

    response
        .json::<LeadReply>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
