//! OpenAI-compatible chat completions generator.

use crate::config::FileGeneratorConfig;
use async_trait::async_trait;
use quizforge_application::ports::question_generator::{GenerationError, QuestionGenerator};
use quizforge_domain::core::string::preview;
use quizforge_domain::{
    DifficultyLevel, GenerationRequest, PromptTemplate, Question, parse_generated_questions,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Question generator backed by a `/chat/completions` endpoint.
pub struct HttpQuestionGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl HttpQuestionGenerator {
    /// Build a generator from the `[generator]` config section.
    ///
    /// Fails with [`GenerationError::NotConfigured`] when no API key can be
    /// found in the config or the environment.
    pub fn from_config(config: &FileGeneratorConfig) -> Result<Self, GenerationError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GenerationError::NotConfigured(
                "no API key (set generator.api_key or QUIZFORGE_API_KEY)".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GenerationError::NotConfigured(e.to_string()))?;

        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        info!("Question generator: {} ({})", endpoint, config.model);

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                preview(&text, 200)
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(map_transport_error)?;
        completion_content(completion)
    }
}

fn map_transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::RequestFailed(e.to_string())
    }
}

fn completion_content(completion: ChatResponse) -> Result<String, GenerationError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

/// Turn message content into at most `count` validated questions.
fn questions_from_content(content: &str, count: usize) -> Result<Vec<Question>, GenerationError> {
    let parsed = parse_generated_questions(content).ok_or_else(|| {
        GenerationError::InvalidOutput(format!("no question list in: {}", preview(content, 120)))
    })?;

    for reason in &parsed.rejected {
        warn!("Discarded generated question: {}", reason);
    }

    if parsed.questions.is_empty() {
        return Err(match parsed.rejected.first() {
            Some(reason) => GenerationError::InvalidOutput(reason.clone()),
            None => GenerationError::EmptyResponse,
        });
    }

    let mut questions = parsed.questions;
    if questions.len() > count {
        debug!("Generator returned {} questions, keeping {}", questions.len(), count);
        questions.truncate(count);
    }
    Ok(questions)
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate<D: DifficultyLevel>(
        &self,
        request: &GenerationRequest<D>,
    ) -> Result<Vec<Question>, GenerationError> {
        if request.count == 0 {
            return Ok(Vec::new());
        }

        let prompt = PromptTemplate::generation_prompt(request);
        debug!("Requesting {} questions for {}", request.count, request.key());

        let content = self
            .complete(PromptTemplate::generation_system(), &prompt)
            .await?;
        questions_from_content(&content, request.count)
    }
}
