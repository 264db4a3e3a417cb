use async_trait::async_trait;
use gemini_relay::{Error, Result, gemini::GenerativeClient};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock upstream client for testing
#[derive(Debug, Default)]
pub struct MockGenerativeClient {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_content(&self, prompt: &str) -> Result<Value> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(Error::internal("No more mock responses"))
        } else {
            Ok(responses.remove(0))
        }
    }
}
