use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::console::{confirm, read_choice, Console, Pacer};
use crate::error::{AcquisitionError, QuizError};
use crate::provider::{QuestionFilter, QuestionSource};
use crate::question::Question;
use crate::report::{Outcome, Report, ReportLine};
use crate::session::{SessionConfig, SessionState};
use crate::ui;

/// One player's quiz: the fetched questions plus progress and score
#[derive(Debug)]
pub struct Quiz {
    config: SessionConfig,
    questions: Vec<Question>,
    state: SessionState,
    score: usize,
    lines: Vec<ReportLine>,
    finished_at: Option<DateTime<Local>>,
}

impl Quiz {
    /// Fetches questions for `config` from `source`.
    ///
    /// Any transport, status or decode failure, an unusable record, or an
    /// empty batch fails the whole session; a short batch does not.
    pub fn populate<S: QuestionSource + ?Sized>(
        config: SessionConfig,
        source: &S,
    ) -> Result<Self, QuizError> {
        Self::populate_with_rng(config, source, &mut rand::thread_rng())
    }

    pub fn populate_with_rng<S, R>(
        config: SessionConfig,
        source: &S,
        rng: &mut R,
    ) -> Result<Self, QuizError>
    where
        S: QuestionSource + ?Sized,
        R: Rng + ?Sized,
    {
        validate(&config)?;

        let filter = QuestionFilter {
            category: config.category.clone(),
            difficulty: config.difficulty.clone(),
            limit: config.number_of_questions,
        };
        let records = source.fetch(&filter)?;

        let mut questions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_question(&mut *rng)
                    .map_err(|source| AcquisitionError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if config.shuffle_questions {
            questions.shuffle(rng);
        }
        if questions.len() < config.number_of_questions {
            info!(
                got = questions.len(),
                requested = config.number_of_questions,
                "provider returned a short batch"
            );
        }

        Self::from_questions(config, questions)
    }

    /// Builds a quiz around questions obtained elsewhere
    pub fn from_questions(
        config: SessionConfig,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        validate(&config)?;
        if questions.is_empty() {
            return Err(AcquisitionError::NoQuestions.into());
        }
        Ok(Self {
            config,
            questions,
            state: SessionState::NotStarted,
            score: 0,
            lines: Vec::new(),
            finished_at: None,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.config.player_name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn report_lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Plays every question once, in order, and returns the final report
    pub fn run<C, P>(&mut self, console: &mut C, pacer: &P) -> Result<Report, QuizError>
    where
        C: Console + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state != SessionState::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }
        console.show(&ui::banner("Let us Begin!"))?;

        let total = self.questions.len();
        for index in 0..total {
            self.state = SessionState::Running { next: index };

            let question = &self.questions[index];
            let choices = question.answers().len();
            console.show(&ui::question_box(index + 1, question))?;
            let guess = read_choice(
                console,
                &format!("What is your answer? (1-{choices}): "),
                choices,
            )?;

            let outcome = self.answer(index, guess);
            debug!(question = index + 1, guess, ?outcome, "answered");

            if index + 1 < total {
                pacer.pause();
            }
        }

        self.state = SessionState::Finished;
        let finished_at = Local::now();
        self.finished_at = Some(finished_at);
        console.show(&ui::banner("Thanks for playing, Let's see how you did!"))?;
        Ok(self.finish(finished_at))
    }

    fn answer(&mut self, index: usize, guess: usize) -> Outcome {
        let question = &self.questions[index];
        let outcome = if question.check(guess) {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.lines.push(ReportLine {
            number: index + 1,
            prompt: question.prompt().to_string(),
            outcome,
            correct_answer: question.correct_answer().to_string(),
        });
        outcome
    }

    fn finish(&self, finished_at: DateTime<Local>) -> Report {
        Report {
            player_name: self.config.player_name.clone(),
            lines: self.lines.clone(),
            score: self.score,
            total: self.questions.len(),
            finished_at,
        }
    }

    /// The final report, once every question has been answered.
    /// Always carries the completion time recorded by `run`.
    pub fn report(&self) -> Option<Report> {
        self.finished_at.map(|at| self.finish(at))
    }
}

fn validate(config: &SessionConfig) -> Result<(), QuizError> {
    if config.player_name.trim().is_empty() {
        return Err(QuizError::InvalidSession("player name is empty"));
    }
    if config.number_of_questions == 0 {
        return Err(QuizError::InvalidSession(
            "at least one question must be requested",
        ));
    }
    Ok(())
}

/// Offers to save `report` under `dir`.
///
/// Returns the written path, or None when the player declines (no I/O).
pub fn offer_save<C: Console + ?Sized>(
    report: &Report,
    console: &mut C,
    dir: &Path,
) -> Result<Option<PathBuf>, QuizError> {
    if !confirm(console, "Would you like to save your results? (Y/N): ")? {
        return Ok(None);
    }
    let path = report.save_to(dir)?;
    console.show(&format!("Results saved to {}", path.display()))?;
    Ok(Some(path))
}
