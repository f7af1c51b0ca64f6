use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a question cannot be built from the supplied answers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,
    #[error("a question needs at least 2 answers, got {0}")]
    TooFewAnswers(usize),
    #[error("correct answer {0:?} is not among the candidates")]
    MissingCorrectAnswer(String),
    #[error("correct answer {0:?} appears more than once among the candidates")]
    DuplicateCorrectAnswer(String),
}

/// Failure to obtain a usable batch of questions from the provider.
///
/// Any of these ends the session before the first question is shown.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider record {index} is unusable: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("provider returned no questions")]
    NoQuestions,
}

#[derive(Debug, Error)]
#[error("could not write results to {}: {source}", path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid session: {0}")]
    InvalidSession(&'static str),
    #[error("could not fetch questions: {0}")]
    Acquisition(#[from] AcquisitionError),
    #[error("quiz has already been played")]
    AlreadyStarted,
    #[error("input closed before an answer was given")]
    InputClosed,
    #[error("console error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
