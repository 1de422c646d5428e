pub mod config;
pub mod db;
pub mod error;
pub mod sync;

pub use db::{Gateway, ProfileRepository, SurveyRepository};
pub use error::BuzzError;
