//! Canned assistant replies and thinking traces for the review workspace.

#[cfg(test)]
#[path = "responses_test.rs"]
mod responses_test;

use crate::message::ThinkingContent;

pub const COLUMN_SUGGESTION: &str = "I can help you add columns to your review table. Based on common review patterns, I'd suggest adding columns like:\n\n1. **Key Terms** - Extract important terms from each document\n2. **Effective Date** - When each agreement takes effect\n3. **Parties** - The parties involved in each document\n4. **Governing Law** - Applicable jurisdiction\n\nWould you like me to add any of these columns, or do you have specific fields in mind?";

pub const EXTRACTION: &str = "I'll analyze the uploaded files and extract the relevant data for your review table. This typically includes identifying key clauses, dates, parties, and obligations across all documents.\n\nWould you like me to start with a standard extraction template, or do you have specific fields you'd like me to focus on?";

pub const COMPARISON: &str = "I can create a comparison view highlighting differences across your documents. This is useful for identifying inconsistencies in terms, obligations, or risk areas.\n\nWhat specific aspects would you like me to compare?";

pub const FALLBACK: &str = "I'm ready to help with your review table. I can add columns, extract data from your documents, or help you analyze the results. What would you like to do?";

/// Which canned reply a query maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseTopic {
    Columns,
    Extraction,
    Comparison,
    General,
}

impl ResponseTopic {
    /// Keyword match on the lowercased query, first hit wins.
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let lower = query.to_lowercase();
        let has = |word: &str| lower.contains(word);
        if has("column") || has("add") {
            Self::Columns
        } else if has("extract") || has("review") {
            Self::Extraction
        } else if has("compare") || has("difference") {
            Self::Comparison
        } else {
            Self::General
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Columns => COLUMN_SUGGESTION,
            Self::Extraction => EXTRACTION,
            Self::Comparison => COMPARISON,
            Self::General => FALLBACK,
        }
    }
}

/// Reply for a review-grid chat message.
#[must_use]
pub fn review_response(query: &str) -> String {
    ResponseTopic::classify(query).text().to_owned()
}

/// Thinking trace shown while a reply is "generated".
#[must_use]
pub fn thinking_content() -> ThinkingContent {
    ThinkingContent {
        summary: "Parsing materials and selecting fields for a concise comparison.".to_owned(),
        bullets: vec![
            "Locate documents and parse key terms".to_owned(),
            "Normalize entities and dates".to_owned(),
            "Populate rows and verify data consistency".to_owned(),
        ],
    }
}
