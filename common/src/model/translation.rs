use serde::{Deserialize, Serialize};

/// One UI string, addressed by the composite `(language, section, key)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub language: String,
    pub section: String,
    pub key: String,
    pub value: String,
}

/// A custom FAQ entry reconstructed from the paired-key convention.
///
/// The translation store has no FAQ schema of its own: a question is stored
/// under `customFaqQ_<id>` and its answer under `customFaqA_<id>` within the
/// same `(language, section)`. This type is the first-class form consumers
/// work with; the convention exists only at the wire boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

pub const FAQ_QUESTION_PREFIX: &str = "customFaqQ_";
pub const FAQ_ANSWER_PREFIX: &str = "customFaqA_";

pub fn faq_question_key(id: &str) -> String {
    format!("{FAQ_QUESTION_PREFIX}{id}")
}

pub fn faq_answer_key(id: &str) -> String {
    format!("{FAQ_ANSWER_PREFIX}{id}")
}

/// Splits the paired-key convention back into `FaqEntry` values.
///
/// Entries keep the order in which their question keys appear. A question
/// with no matching answer key is dropped silently; an answer with no
/// question never produces an entry either.
pub fn decode_faq_entries(rows: &[TranslationEntry]) -> Vec<FaqEntry> {
    let mut answers = std::collections::HashMap::new();
    for row in rows {
        if let Some(id) = row.key.strip_prefix(FAQ_ANSWER_PREFIX) {
            answers.insert(id, row.value.as_str());
        }
    }

    rows.iter()
        .filter_map(|row| {
            let id = row.key.strip_prefix(FAQ_QUESTION_PREFIX)?;
            let answer = answers.get(id)?;
            Some(FaqEntry {
                id: id.to_string(),
                question: row.value.clone(),
                answer: (*answer).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str) -> TranslationEntry {
        TranslationEntry {
            language: "en".into(),
            section: "faq".into(),
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_decodes_paired_keys() {
        let rows = vec![
            row("customFaqQ_1", "How do I request a record?"),
            row("customFaqA_1", "File a request through the portal."),
            row("customFaqQ_2", "Is there a fee?"),
            row("customFaqA_2", "No."),
        ];
        let entries = decode_faq_entries(&rows);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].question, "How do I request a record?");
        assert_eq!(entries[1].answer, "No.");
    }

    #[test]
    fn test_orphaned_question_is_dropped() {
        let rows = vec![
            row("customFaqQ_1", "Orphan?"),
            row("customFaqQ_2", "Paired?"),
            row("customFaqA_2", "Yes."),
        ];
        let entries = decode_faq_entries(&rows);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "2");
    }

    #[test]
    fn test_plain_keys_are_ignored() {
        let rows = vec![
            row("greeting", "Hello"),
            row("customFaqA_9", "Answer without question"),
        ];
        assert!(decode_faq_entries(&rows).is_empty());
    }

    #[test]
    fn test_key_builders_match_prefixes() {
        assert_eq!(faq_question_key("7"), "customFaqQ_7");
        assert_eq!(faq_answer_key("7"), "customFaqA_7");
    }
}
