pub const DEFAULT_NUMBER_OF_QUESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub player_name: String,
    /// provider category slug, `None` for any
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub number_of_questions: usize,
    /// shuffle the fetched questions once before play
    pub shuffle_questions: bool,
}

impl SessionConfig {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            category: None,
            difficulty: None,
            number_of_questions: DEFAULT_NUMBER_OF_QUESTIONS,
            shuffle_questions: false,
        }
    }
}

/// Progress of a quiz through its questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    /// `next` is the 0-based index of the next unanswered question
    Running { next: usize },
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let cfg = SessionConfig::new("ada");
        assert_eq!(cfg.player_name, "ada");
        assert_eq!(cfg.category, None);
        assert_eq!(cfg.difficulty, None);
        assert_eq!(cfg.number_of_questions, 10);
        assert!(!cfg.shuffle_questions);
        assert_eq!(SessionState::default(), SessionState::NotStarted);
    }
}
