//! Keyword vocabularies for reading interview feedback.
//!
//! Matching is case-insensitive and word-bounded: a term only matches when the characters on
//! either side are not alphanumeric, so `ml` never fires inside `html` and `clear` never fires
//! inside `unclear`.

use serde::Serialize;

pub(crate) const POSITIVE_MARKERS: &[&str] = &[
    "good",
    "great",
    "strong",
    "excellent",
    "solid",
    "clear",
    "confident",
    "impressive",
    "proficient",
    "comfortable",
    "outstanding",
];

pub(crate) const NEGATIVE_MARKERS: &[&str] = &[
    "weak",
    "poor",
    "lack",
    "lacks",
    "lacked",
    "lacking",
    "struggle",
    "struggles",
    "struggled",
    "struggling",
    "improve",
    "needs improvement",
    "room for improvement",
    "needs work",
    "not",
    "never",
    "limited",
    "gap",
    "gaps",
    "nervous",
    "hesitant",
    "unclear",
    "confused",
    "difficulty",
    "unable",
    "cannot",
    "can't",
    "couldn't",
];

/// Words that open a new clause inside a sentence.
const CONNECTIVES: &[&str] = &["but", "however", "although", "whereas"];

const SENTENCE_BREAKS: &[char] = &['.', '!', '?', ';', '\n'];

/// Subject areas recognised in feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackTopic {
    Communication,
    Sql,
    Python,
    Statistics,
    MachineLearning,
    Excel,
    BiTools,
    ProblemSolving,
    Confidence,
}

impl FeedbackTopic {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Communication,
            Self::Sql,
            Self::Python,
            Self::Statistics,
            Self::MachineLearning,
            Self::Excel,
            Self::BiTools,
            Self::ProblemSolving,
            Self::Confidence,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Communication => "Communication",
            Self::Sql => "SQL",
            Self::Python => "Python",
            Self::Statistics => "Statistics",
            Self::MachineLearning => "Machine Learning",
            Self::Excel => "Excel",
            Self::BiTools => "BI Tools",
            Self::ProblemSolving => "Problem Solving",
            Self::Confidence => "Confidence",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Communication => &[
                "communication",
                "communicate",
                "communicating",
                "explain",
                "explaining",
                "explanation",
                "explanations",
                "articulate",
                "presentation",
                "storytelling",
            ],
            Self::Sql => &[
                "sql",
                "query",
                "queries",
                "join",
                "joins",
                "subquery",
                "subqueries",
                "database",
                "databases",
            ],
            Self::Python => &["python", "pandas", "coding", "programming", "debugging", "dsa"],
            Self::Statistics => &[
                "statistics",
                "statistical",
                "probability",
                "hypothesis",
                "distributions",
            ],
            Self::MachineLearning => &[
                "machine learning",
                "ml",
                "model",
                "models",
                "modeling",
                "modelling",
            ],
            Self::Excel => &["excel", "spreadsheet", "spreadsheets", "pivot"],
            Self::BiTools => &[
                "tableau",
                "power bi",
                "bi",
                "dashboard",
                "dashboards",
                "visualization",
                "visualisation",
            ],
            Self::ProblemSolving => &[
                "problem solving",
                "problem-solving",
                "analytical",
                "logic",
                "logical",
                "reasoning",
            ],
            Self::Confidence => &["confidence", "confident", "nervous", "hesitant"],
        }
    }

    /// Earliest word-bounded keyword position inside an already lowercased clause.
    pub(crate) fn first_position(self, lowered: &str) -> Option<usize> {
        self.keywords()
            .iter()
            .filter_map(|keyword| find_term(lowered, keyword))
            .min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Negative markers win over positive ones so "not good at SQL" reads as a gap.
pub(crate) fn polarity(lowered: &str) -> Polarity {
    if contains_any(lowered, NEGATIVE_MARKERS) {
        Polarity::Negative
    } else if contains_any(lowered, POSITIVE_MARKERS) {
        Polarity::Positive
    } else {
        Polarity::Neutral
    }
}

pub(crate) fn contains_any(lowered: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| find_term(lowered, term).is_some())
}

/// Byte offset of the first occurrence of `term` that sits on word boundaries.
pub(crate) fn find_term(haystack: &str, term: &str) -> Option<usize> {
    if term.is_empty() {
        return None;
    }

    let mut start = 0;
    while let Some(offset) = haystack[start..].find(term) {
        let index = start + offset;
        let end = index + term.len();
        let bounded_before = haystack[..index]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let bounded_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if bounded_before && bounded_after {
            return Some(index);
        }
        start = index + haystack[index..].chars().next().map_or(1, char::len_utf8);
    }

    None
}

/// Lowercases `text` and splits it into clauses on sentence punctuation and contrast words.
pub(crate) fn clauses(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut clauses = Vec::new();

    for sentence in lowered.split(SENTENCE_BREAKS) {
        let mut current: Vec<&str> = Vec::new();
        for word in sentence.split_whitespace() {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
            if CONNECTIVES.contains(&bare) {
                push_clause(&mut clauses, &mut current);
            } else {
                current.push(word);
            }
        }
        push_clause(&mut clauses, &mut current);
    }

    clauses
}

fn push_clause(clauses: &mut Vec<String>, words: &mut Vec<&str>) {
    if !words.is_empty() {
        clauses.push(words.join(" "));
        words.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_term_respects_word_boundaries() {
        assert_eq!(find_term("html and ml", "ml"), Some(9));
        assert_eq!(find_term("unclear answers", "clear"), None);
        assert_eq!(find_term("strong problem-solving", "problem-solving"), Some(7));
        assert_eq!(find_term("", "sql"), None);
    }

    #[test]
    fn clauses_split_on_contrast_words_and_punctuation() {
        let parts = clauses("Good communication but weak in SQL. Confident; however, nervous");
        assert_eq!(
            parts,
            vec![
                "good communication",
                "weak in sql",
                "confident",
                "nervous",
            ]
        );
    }

    #[test]
    fn commas_and_while_stay_inside_a_clause() {
        assert_eq!(
            clauses("Weak in SQL, Python and statistics while coding"),
            vec!["weak in sql, python and statistics while coding"]
        );
    }

    #[test]
    fn negative_markers_dominate_positive_ones() {
        assert_eq!(polarity("not good at sql"), Polarity::Negative);
        assert_eq!(polarity("clear sql answers"), Polarity::Positive);
        assert_eq!(polarity("talked about sql"), Polarity::Neutral);
    }

    #[test]
    fn topic_position_uses_earliest_keyword() {
        assert_eq!(FeedbackTopic::Sql.first_position("joins and sql"), Some(0));
        assert_eq!(FeedbackTopic::MachineLearning.first_position("html only"), None);
    }
}
