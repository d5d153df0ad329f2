// src/deck/validator.rs
// Turns untrusted deck records into cards, rejecting bad records one at a time.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use super::Card;
#[cfg(debug_assertions)]
use crate::debug::Tracer;

/// The four fields every record must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Category,
    Prompt,
    Response,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Category => "category",
            Field::Prompt => "prompt",
            Field::Response => "response",
        }
    }

    /// Older decks name the text fields `type`, `question` and `answer`.
    fn alias(self) -> Option<&'static str> {
        match self {
            Field::Id => None,
            Field::Category => Some("type"),
            Field::Prompt => Some("question"),
            Field::Response => Some("answer"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single record failed the shape check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("record is not an object")]
    NotAnObject,
    #[error("`{0}` is missing")]
    Missing(Field),
    #[error("`id` must be a positive integer")]
    InvalidId,
    #[error("`{0}` must be text")]
    NotText(Field),
    #[error("`{0}` is blank")]
    Blank(Field),
}

/// A reportable event raised while validating a collection. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("deck data is not a collection, treating it as empty")]
    NotACollection,
    #[error("invalid card at index {index}: {reason}: {payload}")]
    Malformed {
        index: usize,
        reason: RejectReason,
        payload: Value,
    },
    #[error("duplicate card id {id} at index {index}")]
    DuplicateId { index: usize, id: u64 },
}

/// The outcome for one input record.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Valid(Card),
    Rejected(Diagnostic),
}

/// Accepted cards in input order, plus every diagnostic raised on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub cards: Vec<Card>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn rejected_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| !matches!(d, Diagnostic::NotACollection))
            .count()
    }

    pub fn was_collection(&self) -> bool {
        !self.diagnostics.contains(&Diagnostic::NotACollection)
    }
}

fn lookup(record: &Map<String, Value>, field: Field) -> Option<&Value> {
    record
        .get(field.name())
        .or_else(|| field.alias().and_then(|alias| record.get(alias)))
}

fn read_id(record: &Map<String, Value>) -> Result<u64, RejectReason> {
    let value = lookup(record, Field::Id).ok_or(RejectReason::Missing(Field::Id))?;
    // Negative and fractional numbers have no u64 form.
    value
        .as_u64()
        .filter(|&id| id > 0)
        .ok_or(RejectReason::InvalidId)
}

fn read_text(record: &Map<String, Value>, field: Field) -> Result<String, RejectReason> {
    match lookup(record, field) {
        None => Err(RejectReason::Missing(field)),
        Some(Value::String(text)) if text.trim().is_empty() => Err(RejectReason::Blank(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(RejectReason::NotText(field)),
    }
}

/// Checks one record against the expected card shape. Identity is not checked here.
pub fn check_record(record: &Value) -> Result<Card, RejectReason> {
    let record = record.as_object().ok_or(RejectReason::NotAnObject)?;
    Ok(Card {
        id: read_id(record)?,
        category: read_text(record, Field::Category)?,
        prompt: read_text(record, Field::Prompt)?,
        response: read_text(record, Field::Response)?,
    })
}

/// Produces one verdict per record, in input order. The first record with a given
/// id wins; later ones are rejected. Every rejection is logged as it is produced.
pub fn classify_collection(raw: &Value) -> Vec<Verdict> {
    let Some(records) = raw.as_array() else {
        log::error!("{}", Diagnostic::NotACollection);
        return vec![Verdict::Rejected(Diagnostic::NotACollection)];
    };

    let mut seen_ids = HashSet::new();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let verdict = match check_record(record) {
                Err(reason) => Verdict::Rejected(Diagnostic::Malformed {
                    index,
                    reason,
                    payload: record.clone(),
                }),
                Ok(card) if !seen_ids.insert(card.id) => {
                    Verdict::Rejected(Diagnostic::DuplicateId { index, id: card.id })
                }
                Ok(card) => Verdict::Valid(card),
            };
            if let Verdict::Rejected(diagnostic) = &verdict {
                log::warn!("{}", diagnostic);
            }
            verdict
        })
        .collect()
}

/// Validates a raw collection. Never fails: bad input just yields fewer cards.
pub fn validate_collection(raw: &Value) -> ValidationReport {
    #[cfg(debug_assertions)]
    let _tracer = Tracer::new("Validate Collection");

    let mut report = ValidationReport::default();
    for verdict in classify_collection(raw) {
        match verdict {
            Verdict::Valid(card) => report.cards.push(card),
            Verdict::Rejected(diagnostic) => report.diagnostics.push(diagnostic),
        }
    }
    log::debug!(
        "Validated {} cards, rejected {}",
        report.cards.len(),
        report.rejected_count()
    );
    report
}
