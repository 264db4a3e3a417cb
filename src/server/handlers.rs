use super::types::{PromptRequest, PromptResponse, RelayError};
use crate::gemini::{GenerativeClient, text_or_fallback};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential was configured.
    pub generator: Option<Arc<dyn GenerativeClient>>,
}

pub async fn relay(
    State(state): State<AppState>,
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, RelayError> {
    let request = match body {
        Ok(Json(request)) => Some(request),
        // Oversized or unreadable bodies are not a missing prompt
        Err(JsonRejection::BytesRejection(rejection)) => {
            return Err(RelayError::BodyRejected {
                status: rejection.status(),
                message: rejection.body_text(),
            });
        }
        Err(_) => None,
    };

    let prompt = request
        .and_then(|request| request.prompt)
        .filter(|prompt| !prompt.is_empty())
        .ok_or(RelayError::MissingPrompt)?;

    let Some(generator) = state.generator.as_ref() else {
        error!("Server configuration error: API key is missing.");
        return Err(RelayError::MissingCredential);
    };

    info!("Relaying prompt of {} bytes", prompt.len());

    match generator.generate_content(&prompt).await {
        Ok(answer) => Ok(Json(PromptResponse {
            text: text_or_fallback(&answer),
        })),
        Err(e) => {
            let err = RelayError::from(e);
            if let RelayError::Internal { message } = &err {
                error!("Internal Server Error: {}", message);
            }
            Err(err)
        }
    }
}

pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
