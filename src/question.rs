use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuestionError;

/// A multiple-choice trivia item.
///
/// The display order of the answers is shuffled once when the question is
/// built and never changes afterwards, so a guess made against `answers()`
/// is always checked against the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answers: Vec<String>,
    correct_index: usize,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        answers: Vec<String>,
        correct_answer: &str,
    ) -> Result<Self, QuestionError> {
        Self::with_rng(prompt, answers, correct_answer, &mut rand::thread_rng())
    }

    /// Same as [`Question::new`] but shuffles with the given rng
    pub fn with_rng<R: Rng + ?Sized>(
        prompt: impl Into<String>,
        mut answers: Vec<String>,
        correct_answer: &str,
        rng: &mut R,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if answers.len() < 2 {
            return Err(QuestionError::TooFewAnswers(answers.len()));
        }
        match answers.iter().filter(|a| *a == correct_answer).count() {
            0 => {
                return Err(QuestionError::MissingCorrectAnswer(
                    correct_answer.to_string(),
                ))
            }
            1 => {}
            _ => {
                return Err(QuestionError::DuplicateCorrectAnswer(
                    correct_answer.to_string(),
                ))
            }
        }

        answers.shuffle(rng);
        let correct_index = answers
            .iter()
            .position(|a| a == correct_answer)
            .ok_or_else(|| QuestionError::MissingCorrectAnswer(correct_answer.to_string()))?;

        Ok(Self {
            prompt,
            answers,
            correct_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answers in display order
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// `guess` is a 1-based position into [`Question::answers`].
    /// Positions outside `1..=answers().len()` are never correct.
    pub fn check(&self, guess: usize) -> bool {
        guess.checked_sub(1) == Some(self.correct_index)
    }

    pub fn correct_answer(&self) -> &str {
        &self.answers[self.correct_index]
    }
}
