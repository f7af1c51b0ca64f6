use std::time::Duration;

use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{AcquisitionError, QuestionError};
use crate::question::Question;

pub const DEFAULT_API_URL: &str = "https://the-trivia-api.com/api/questions";
pub const DEFAULT_REGION: &str = "GB";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Cap on the provider error body echoed into messages
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Filters sent to the provider for one batch of questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: usize,
}

impl QuestionFilter {
    /// Query parameters in the order the provider documents them
    pub fn query(&self, region: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("region", region.to_string())];
        if let Some(category) = &self.category {
            params.push(("categories", category.clone()));
        }
        if let Some(difficulty) = &self.difficulty {
            params.push(("difficulty", difficulty.to_lowercase()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}

/// One question as the provider sends it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl ProviderRecord {
    pub fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Question, QuestionError> {
        let mut answers = self.incorrect_answers;
        answers.push(self.correct_answer.clone());
        Question::with_rng(self.question, answers, &self.correct_answer, rng)
    }
}

pub fn parse_records(body: &str) -> Result<Vec<ProviderRecord>, AcquisitionError> {
    Ok(serde_json::from_str(body)?)
}

/// Anything that can hand back a batch of raw provider records
pub trait QuestionSource {
    fn fetch(&self, filter: &QuestionFilter) -> Result<Vec<ProviderRecord>, AcquisitionError>;
}

/// Production source talking to the-trivia-api over HTTP
#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    client: Client,
    api_url: String,
    region: String,
}

impl HttpQuestionSource {
    pub fn new(
        api_url: impl Into<String>,
        region: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AcquisitionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            region: region.into(),
        })
    }
}

impl QuestionSource for HttpQuestionSource {
    fn fetch(&self, filter: &QuestionFilter) -> Result<Vec<ProviderRecord>, AcquisitionError> {
        let query = filter.query(&self.region);
        debug!(url = %self.api_url, ?query, "requesting questions");

        let response = self
            .client
            .get(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .query(&query)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "provider rejected question request");
            return Err(AcquisitionError::Status {
                status: status.as_u16(),
                body: body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let records = parse_records(&body)?;
        info!(count = records.len(), requested = filter.limit, "received questions");
        Ok(records)
    }
}

/// In-memory source, handy for offline play and tests
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    records: Vec<ProviderRecord>,
}

impl StaticQuestionSource {
    pub fn new(records: Vec<ProviderRecord>) -> Self {
        Self { records }
    }
}

impl QuestionSource for StaticQuestionSource {
    fn fetch(&self, filter: &QuestionFilter) -> Result<Vec<ProviderRecord>, AcquisitionError> {
        Ok(self.records.iter().take(filter.limit).cloned().collect())
    }
}
