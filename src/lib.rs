pub mod app;
pub mod bank;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod stats;
pub mod timer;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use bank::{QuestionSource, StaticBank, categories, category_info};
pub use config::AppConfig;
pub use error::QuizError;
pub use input::handle_key;
pub use models::{
    AnswerRecord, Category, CategoryInfo, Difficulty, Question, Screen, SelectedOption,
};
pub use session::{Action, QuizSession, SessionState, TimerCommand, TimerLevel};
pub use stats::{Grade, ResultsSummary};
pub use timer::{Countdown, Tick};
