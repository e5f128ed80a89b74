//! Genre save request

use gloo::net::http::Request;

use crate::error::{MyInfoError, Result};
use crate::models::save_state::status_outcome;

/// POST the serialized selection (a JSON integer array).
///
/// Any 2xx status is success; other statuses and network faults are errors.
pub async fn post_genres(endpoint: &str, body: String) -> Result<()> {
    let request = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| MyInfoError::Transport(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| MyInfoError::Transport(e.to_string()))?;

    log::debug!("POST {} -> {}", endpoint, response.status());
    status_outcome(response.status())
}
