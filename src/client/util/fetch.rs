//! Typed fetch helpers for the web client.

/// GET a JSON resource from the API
#[cfg(feature = "web")]
pub async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

/// POST a JSON body to the API and decode the JSON response
#[cfg(feature = "web")]
pub async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    use reqwasm::http::Request;

    let payload =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let response = Request::post(path)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

/// POST with no body (alert lifecycle endpoints)
#[cfg(feature = "web")]
pub async fn post_empty<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::post(path)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, String> {
    use crate::model::api::ErrorDto;

    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        _ => {
            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(error_dto.error)
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_text
                ))
            }
        }
    }
}
