//! State for the translation bulk editor.
//!
//! Edits never touch the fetched rows: they accumulate in a draft map keyed
//! by the full `(language, section, key)` address, so switching language or
//! section keeps unsaved work. Saving groups the map into one bulk update
//! per `(language, section)` pair.

use std::collections::BTreeMap;

use common::model::translation::TranslationEntry;

use crate::session::Session;

pub const LANGUAGES: [&str; 5] = ["en", "de", "fr", "pt", "sw"];
pub const SECTIONS: [&str; 6] = [
    "navigation",
    "search",
    "documents",
    "faq",
    "guide",
    "footer",
];

/// `(language, section, key)`.
pub type DraftKey = (String, String, String);

pub struct TranslationsPage {
    pub session: Session,
    pub language: String,
    pub section: String,
    pub rows: Vec<TranslationEntry>,
    pub drafts: BTreeMap<DraftKey, String>,
    pub loading: bool,
    pub saving: bool,
    pub new_faq_question: String,
    pub new_faq_answer: String,
}

impl TranslationsPage {
    pub fn new(session: Session) -> Self {
        TranslationsPage {
            session,
            language: "en".to_string(),
            section: "navigation".to_string(),
            rows: Vec::new(),
            drafts: BTreeMap::new(),
            loading: true,
            saving: false,
            new_faq_question: String::new(),
            new_faq_answer: String::new(),
        }
    }

    pub fn unsaved_count(&self) -> usize {
        self.drafts.len()
    }

    /// Draft value overlaid on the canonical one, if any.
    pub fn effective_value<'a>(&'a self, row: &'a TranslationEntry) -> &'a str {
        let key = (
            row.language.clone(),
            row.section.clone(),
            row.key.clone(),
        );
        match self.drafts.get(&key) {
            Some(draft) => draft.as_str(),
            None => row.value.as_str(),
        }
    }

    /// Drafts for the current `(language, section)` whose key has no
    /// canonical row yet (freshly added entries, e.g. new FAQ pairs).
    pub fn new_keys(&self) -> Vec<(String, String)> {
        self.drafts
            .iter()
            .filter(|((language, section, key), _)| {
                *language == self.language
                    && *section == self.section
                    && !self.rows.iter().any(|row| row.key == *key)
            })
            .map(|((_, _, key), value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Splits the draft map into one `(language, section)` payload each,
/// carrying only the changed keys for that pair.
pub fn group_drafts(
    drafts: &BTreeMap<DraftKey, String>,
) -> Vec<((String, String), BTreeMap<String, String>)> {
    let mut groups: Vec<((String, String), BTreeMap<String, String>)> = Vec::new();
    for ((language, section, key), value) in drafts {
        let pair = (language.clone(), section.clone());
        match groups.iter_mut().find(|(existing, _)| *existing == pair) {
            Some((_, payload)) => {
                payload.insert(key.clone(), value.clone());
            }
            None => {
                let mut payload = BTreeMap::new();
                payload.insert(key.clone(), value.clone());
                groups.push((pair, payload));
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(language: &str, section: &str, key: &str, value: &str) -> (DraftKey, String) {
        (
            (language.into(), section.into(), key.into()),
            value.into(),
        )
    }

    #[test]
    fn test_single_pair_single_payload() {
        let drafts: BTreeMap<_, _> = [draft("de", "navigation", "greeting", "Hallo")]
            .into_iter()
            .collect();
        let groups = group_drafts(&drafts);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, ("de".to_string(), "navigation".to_string()));
        assert_eq!(groups[0].1.get("greeting").unwrap(), "Hallo");
    }

    #[test]
    fn test_drafts_split_by_language_and_section() {
        let drafts: BTreeMap<_, _> = [
            draft("de", "navigation", "greeting", "Hallo"),
            draft("de", "navigation", "farewell", "Tschüss"),
            draft("de", "search", "placeholder", "Suchen…"),
            draft("fr", "navigation", "greeting", "Bonjour"),
        ]
        .into_iter()
        .collect();
        let groups = group_drafts(&drafts);
        assert_eq!(groups.len(), 3);
        let de_nav = groups
            .iter()
            .find(|(pair, _)| *pair == ("de".to_string(), "navigation".to_string()))
            .unwrap();
        assert_eq!(de_nav.1.len(), 2);
    }

    #[test]
    fn test_empty_drafts_produce_no_groups() {
        assert!(group_drafts(&BTreeMap::new()).is_empty());
    }
}
