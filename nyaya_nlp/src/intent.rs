//! Rule-based intent classification.

use serde::{Deserialize, Serialize};

/// Ordered rule table: the first group with any keyword found as a
/// substring of the query wins, later groups are never consulted.
/// Reordering this table changes classification.
const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::PunishmentInformation,
        &["punishment", "jail", "fine", "sentence"],
    ),
    (
        Intent::LegalityCheck,
        &["can", "allowed", "legal", "illegal", "valid"],
    ),
    (
        Intent::LegalProcedure,
        &["how", "procedure", "process", "steps"],
    ),
    (
        Intent::FundamentalRights,
        &["right", "rights", "privacy", "freedom"],
    ),
    (
        Intent::PolicePowers,
        &["police", "arrest", "search", "warrant"],
    ),
];

/// The category of a legal question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Intent {
    PunishmentInformation = 0,
    LegalityCheck = 1,
    LegalProcedure = 2,
    FundamentalRights = 3,
    PolicePowers = 4,
    #[default]
    GeneralLegalQuery = 255,
}

impl Intent {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::PunishmentInformation => "punishment_information",
            Self::LegalityCheck => "legality_check",
            Self::LegalProcedure => "legal_procedure",
            Self::FundamentalRights => "fundamental_rights",
            Self::PolicePowers => "police_powers",
            Self::GeneralLegalQuery => "general_legal_query",
        }
    }
}

/// First-match-wins keyword classifier.
///
/// Total over any input: a query matching no group is a
/// `general_legal_query`, never an error.
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn classify(&self, query: &str) -> Intent {
        let q = query.to_lowercase();
        for (intent, keywords) in INTENT_RULES {
            if keywords.iter().any(|k| q.contains(k)) {
                return *intent;
            }
        }
        Intent::GeneralLegalQuery
    }
}
