//! # faq
//!
//! Keyword-matched answers to common glacier questions.

mod bot;

pub use bot::*;
