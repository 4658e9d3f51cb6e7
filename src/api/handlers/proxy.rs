use crate::{
    AppState,
    types::{AppError, ChatRequest, ErrorResponse, GenerateContentRequest, Result},
};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{Method, header},
    response::{IntoResponse, Response},
};

/// Forward a chat prompt to the Gemini API
///
/// Appends `prompt` as a user turn after `history`, attaches the server-held
/// API key and relays the upstream JSON. Any method other than POST is
/// rejected before the body is read, so the body limit never applies to it.
#[utoipa::path(
    post,
    path = "/api/call-gemini",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Upstream generateContent response, relayed verbatim"),
        (status = 405, description = "Method other than POST", body = String),
        (status = 500, description = "Malformed body, missing credential or unreachable upstream", body = ErrorResponse),
        (status = "default", description = "Upstream rejected the call; status is passed through", body = ErrorResponse)
    ),
    tag = "chat"
)]
pub async fn call_gemini(State(state): State<AppState>, request: Request) -> Result<Response> {
    if request.method() != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let body = Bytes::from_request(request, &state).await?;
    let request: ChatRequest = serde_json::from_slice(&body)?;

    let api_key = state
        .credentials
        .api_key()
        .ok_or_else(|| AppError::MissingCredential(state.credentials.name().to_string()))?;

    let payload = GenerateContentRequest::from(request);
    let upstream = state.gemini.generate_content(&api_key, &payload).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        upstream.get().to_owned(),
    )
        .into_response())
}
