//! The persistent entity: one issued token and its survey state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::survey::SurveyAnswers;

/// A row from the `support_entries` table.
///
/// The `token` is both the lookup key and the access capability: anyone
/// holding the distributed URL can read the entry and answer the survey
/// once. `answered_at` is the state discriminator -- `None` means open
/// for submission, `Some` means locked. All answer fields stay unset
/// until the entry is answered and are fixed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportEntry {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
    pub email: Option<String>,
    pub pen_name: Option<String>,
    /// Tri-state: `Some(true)` public, `Some(false)` private, `None`
    /// means the supporter did not say.
    pub pen_name_public: Option<bool>,
    pub discovery: Option<String>,
    /// Joined reason values, with an `other: <text>` suffix when the
    /// supporter filled in the free-text reason.
    pub motive: Option<String>,
    pub impression: Option<String>,
    pub note: Option<String>,
}

impl SupportEntry {
    /// A freshly issued, unanswered entry.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            created_at: Utc::now(),
            answered_at: None,
            email: None,
            pen_name: None,
            pen_name_public: None,
            discovery: None,
            motive: None,
            impression: None,
            note: None,
        }
    }

    /// Whether the survey has been answered (the entry is locked).
    pub fn is_answered(&self) -> bool {
        self.answered_at.is_some()
    }

    /// Fix the validated answers onto this entry and lock it.
    ///
    /// The caller must have verified `answered_at` is unset under the
    /// same guard that makes the write atomic; this method does not
    /// re-check.
    pub fn record_answers(&mut self, answers: &SurveyAnswers, answered_at: DateTime<Utc>) {
        self.answered_at = Some(answered_at);
        self.email = answers.email.clone();
        self.pen_name = answers.pen_name.clone();
        self.pen_name_public = answers.pen_name_public;
        self.discovery = answers.discovery.clone();
        self.motive = Some(answers.motive.clone());
        self.impression = Some(answers.impression.clone());
        self.note = answers.note.clone();
    }
}
