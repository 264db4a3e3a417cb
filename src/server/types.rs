use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every way a relay call can end without generated text.
#[derive(Debug)]
pub enum RelayError {
    MethodNotAllowed,
    MissingPrompt,
    BodyRejected {
        status: StatusCode,
        message: String,
    },
    MissingCredential,
    Upstream {
        status: StatusCode,
        status_text: String,
    },
    Internal {
        message: String,
    },
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::BodyRejected { status, .. } => *status,
            Self::MissingCredential | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => *status,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MethodNotAllowed => "Method Not Allowed".to_string(),
            Self::MissingPrompt => "Prompt is missing".to_string(),
            Self::BodyRejected { message, .. } => message.clone(),
            Self::MissingCredential => {
                "Server configuration error. Contact site admin.".to_string()
            }
            Self::Upstream { status_text, .. } => format!("Google API failed: {}", status_text),
            Self::Internal { message } => {
                format!("An internal server error occurred: {}", message)
            }
        }
    }
}

impl From<crate::Error> for RelayError {
    fn from(e: crate::Error) -> Self {
        match e {
            crate::Error::Upstream {
                status,
                status_text,
            } => Self::Upstream {
                status,
                status_text,
            },
            other => Self::Internal {
                message: other.client_message(),
            },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (self.status(), body).into_response()
    }
}
