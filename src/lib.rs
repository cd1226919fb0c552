//! emotiq - Mood journal
//!
//! Records daily mood ratings with journal text and emotion/context tags,
//! keeps them in a local journal directory, and derives weekly trends, a
//! monthly calendar and filtered history from them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::EmotiqError;
