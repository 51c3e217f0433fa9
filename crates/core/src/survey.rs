//! Survey submission validation.
//!
//! The raw request body is shape-checked once at the boundary and turned
//! into a typed, fully validated [`SurveyAnswers`] before any store call
//! is made. Validation failures never produce a write.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::CoreError;

/// Minimal email shape: something@something.something, with no
/// whitespace and no second `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Raw survey submission body as received over the wire.
///
/// Every field is optional at the serde level so that missing-field
/// errors surface as our own validation messages rather than as a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyRequest {
    #[serde(default)]
    pub token: String,
    /// Selected reason values (multi-select, at least one required).
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Free text accompanying the "other" reason.
    #[serde(default)]
    pub reason_other: Option<String>,
    #[serde(default)]
    pub impression: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub pen_name: Option<String>,
    /// `"public"`, `"private"`, or absent.
    #[serde(default)]
    pub pen_name_visibility: Option<String>,
    /// How the supporter found the project.
    #[serde(default)]
    pub discovery: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Whether the supporter wants their pen name shown publicly.
///
/// Tri-state at the API level: absence means "did not say", which must
/// stay distinguishable from an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenNameVisibility {
    Public,
    Private,
}

impl PenNameVisibility {
    fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            other => Err(CoreError::Validation(format!(
                "penNameVisibility must be \"public\" or \"private\", got \"{other}\""
            ))),
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Fully validated survey answers, ready for the conditional write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyAnswers {
    pub email: Option<String>,
    pub pen_name: Option<String>,
    pub pen_name_public: Option<bool>,
    pub discovery: Option<String>,
    pub motive: String,
    pub impression: String,
    pub note: Option<String>,
}

/// Trim a free-text field, normalizing empty strings to `None`.
fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validate a raw submission into [`SurveyAnswers`].
///
/// Rules:
/// - at least one non-blank reason must be selected;
/// - `impression` is required;
/// - `email`, when present, must look like an email address;
/// - free text is trimmed and empty strings become absent;
/// - the "other" reason's free text is folded into the motive string as
///   a labeled `other: <text>` suffix, not stored separately.
pub fn validate(req: &SubmitSurveyRequest) -> Result<SurveyAnswers, CoreError> {
    let reasons: Vec<&str> = req
        .reasons
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    if reasons.is_empty() {
        return Err(CoreError::Validation(
            "at least one reason must be selected".into(),
        ));
    }

    let impression = normalized(req.impression.as_deref())
        .ok_or_else(|| CoreError::Validation("impression is required".into()))?;

    let email = normalized(req.email.as_deref());
    if let Some(email) = &email {
        if !EMAIL_RE.is_match(email) {
            return Err(CoreError::Validation(format!(
                "\"{email}\" is not a valid email address"
            )));
        }
    }

    let pen_name_public = match normalized(req.pen_name_visibility.as_deref()) {
        Some(raw) => Some(PenNameVisibility::parse(&raw)?.is_public()),
        None => None,
    };

    // The bare "other" marker is replaced by its labeled free text when
    // the supporter typed any.
    let mut parts: Vec<String> = reasons
        .iter()
        .filter(|r| **r != "other")
        .map(|r| r.to_string())
        .collect();
    match normalized(req.reason_other.as_deref()) {
        Some(other) => parts.push(format!("other: {other}")),
        None if reasons.contains(&"other") => parts.push("other".to_string()),
        None => {}
    }
    let motive = parts.join(", ");

    Ok(SurveyAnswers {
        email,
        pen_name: normalized(req.pen_name.as_deref()),
        pen_name_public,
        discovery: normalized(req.discovery.as_deref()),
        motive,
        impression,
        note: normalized(req.note.as_deref()),
    })
}
