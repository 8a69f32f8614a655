//! GlacierBot keyword responder.

use serde::{Deserialize, Serialize};

/// Reply when no keyword matches.
pub const FALLBACK_HINT: &str = "Ask me about NDSI, retreat, Landsat, ARIMA, etc!";

const DEFAULT_ENTRIES: [(&str, &str); 6] = [
    ("ndsi", "NDSI detects snow/ice using satellite images."),
    (
        "gangotri",
        "Gangotri is a major Himalayan glacier, source of Ganges river.",
    ),
    (
        "retreat",
        "Glacier retreat = glacier melting & shrinking over years.",
    ),
    (
        "area",
        "Area is measured by counting glacier pixels from satellite NDSI mask.",
    ),
    ("climate", "Climate warming causes faster glacier retreat."),
    (
        "prediction",
        "We use Machine Learning (Polynomial Regression & ARIMA) to predict glacier future.",
    ),
];

/// A keyword and the answer it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub keyword: String,
    pub answer: String,
}

impl FaqEntry {
    /// Keywords are matched case-insensitively and stored lower-cased.
    pub fn new(keyword: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            answer: answer.into(),
        }
    }
}

/// Outcome of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    /// A keyword matched.
    Matched { keyword: String, text: String },
    /// Nothing matched; `text` is the hint.
    Fallback { text: String },
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Matched { text, .. } | Answer::Fallback { text } => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Answer::Matched { .. })
    }
}

/// Answers a question with the first entry whose keyword it contains.
#[derive(Debug, Clone)]
pub struct GlacierBot {
    entries: Vec<FaqEntry>,
    fallback: String,
}

impl Default for GlacierBot {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(k, a)| FaqEntry::new(*k, *a))
                .collect(),
            fallback: FALLBACK_HINT.to_string(),
        }
    }
}

impl GlacierBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot with no entries, answering everything with `fallback`.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append an entry. It is consulted after every existing entry.
    pub fn with_entry(mut self, keyword: impl Into<String>, answer: impl Into<String>) -> Self {
        self.entries.push(FaqEntry::new(keyword, answer));
        self
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn answer(&self, question: &str) -> Answer {
        let q = question.to_lowercase();
        self.entries
            .iter()
            .find(|e| !e.keyword.is_empty() && q.contains(&e.keyword))
            .map(|e| Answer::Matched {
                keyword: e.keyword.clone(),
                text: e.answer.clone(),
            })
            .unwrap_or_else(|| Answer::Fallback {
                text: self.fallback.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let bot = GlacierBot::new();
        let answer = bot.answer("What is NDSI?");
        assert!(answer.is_match());
        assert_eq!(answer.text(), "NDSI detects snow/ice using satellite images.");
    }

    #[test]
    fn test_first_entry_wins() {
        // Mentions both "retreat" and "climate"; retreat comes first in the table.
        let answer = GlacierBot::new().answer("Does climate drive glacier retreat?");
        assert_eq!(
            answer,
            Answer::Matched {
                keyword: "retreat".to_string(),
                text: "Glacier retreat = glacier melting & shrinking over years.".to_string(),
            }
        );
    }

    #[test]
    fn test_fallback() {
        let bot = GlacierBot::new();
        assert_eq!(bot.answer("How tall is Everest?").text(), FALLBACK_HINT);
        assert!(!bot.answer("").is_match());
    }

    #[test]
    fn test_with_entry_extends_table() {
        let bot = GlacierBot::new().with_entry("Landsat", "Landsat is a NASA/USGS imaging mission.");
        assert_eq!(bot.entries().len(), 7);
        assert_eq!(
            bot.answer("which landsat sensors?").text(),
            "Landsat is a NASA/USGS imaging mission."
        );
        // Earlier entries still take precedence.
        assert!(bot.answer("landsat NDSI").text().starts_with("NDSI"));
    }

    #[test]
    fn test_empty_bot() {
        let bot = GlacierBot::empty("no idea");
        assert_eq!(bot.answer("ndsi").text(), "no idea");
    }

    #[test]
    fn test_answer_json() {
        let json = serde_json::to_string(&GlacierBot::new().answer("area?")).unwrap();
        assert!(json.contains("\"kind\":\"matched\""));
        assert!(json.contains("\"keyword\":\"area\""));
    }
}
