// Library surface for the binary and integration tests.
pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod provider;
pub mod question;
pub mod quiz;
pub mod report;
pub mod session;
pub mod ui;

pub use error::{AcquisitionError, PersistError, QuestionError, QuizError};
pub use question::Question;
pub use quiz::Quiz;
