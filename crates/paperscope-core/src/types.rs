//! Core types for paperscope-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the read-only [`Paper`] record, the [`FacetField`] discriminant
//! and the [`FacetValue`] tagged union that every facet field is normalised
//! into at the data boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ExplorerError;

/// A conference paper as provided by the data source.
///
/// Papers are never mutated after load. Facet fields that are missing or
/// `null` in the source are [`FacetValue::Absent`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Paper {
    /// Paper title. Missing or `null` titles load as an empty string.
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    /// Public abstract, if one was published. Falsy source values
    /// (`false`, `0`, `""`) load as `None`.
    #[serde(default, deserialize_with = "truthy_text")]
    pub abstract_public: Option<String>,
    /// Link to the full-text PDF. Falsy source values load as `None`.
    #[serde(default, deserialize_with = "truthy_text")]
    pub pdf_url: Option<String>,
    #[serde(default, deserialize_with = "facet_value")]
    pub signals: FacetValue,
    #[serde(default, deserialize_with = "facet_value")]
    pub medical_imaging: FacetValue,
    #[serde(default, deserialize_with = "facet_value")]
    pub uses_dl: FacetValue,
    #[serde(default, deserialize_with = "facet_value")]
    pub dl_type: FacetValue,
    #[serde(default, deserialize_with = "facet_value")]
    pub task: FacetValue,
    #[serde(default, deserialize_with = "facet_value")]
    pub context: FacetValue,
}

impl Paper {
    /// Borrow the value of a facet field.
    pub fn facet(&self, field: FacetField) -> &FacetValue {
        match field {
            FacetField::Signals => &self.signals,
            FacetField::MedicalImaging => &self.medical_imaging,
            FacetField::UsesDl => &self.uses_dl,
            FacetField::DlType => &self.dl_type,
            FacetField::Task => &self.task,
            FacetField::Context => &self.context,
        }
    }

    /// Mutable access, used by builders and loaders only.
    pub fn facet_mut(&mut self, field: FacetField) -> &mut FacetValue {
        match field {
            FacetField::Signals => &mut self.signals,
            FacetField::MedicalImaging => &mut self.medical_imaging,
            FacetField::UsesDl => &mut self.uses_dl,
            FacetField::DlType => &mut self.dl_type,
            FacetField::Task => &mut self.task,
            FacetField::Context => &mut self.context,
        }
    }
}

// ---------------------------------------------------------------------------
// Facet fields
// ---------------------------------------------------------------------------

/// The fixed set of filterable paper fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetField {
    Signals,
    MedicalImaging,
    UsesDl,
    DlType,
    Task,
    Context,
}

impl FacetField {
    /// Filter controls, in display order.
    pub const ALL: [FacetField; 6] = [
        FacetField::Signals,
        FacetField::MedicalImaging,
        FacetField::UsesDl,
        FacetField::DlType,
        FacetField::Task,
        FacetField::Context,
    ];

    /// Fields shown as tag badges on a paper card. `uses_dl` is filter-only.
    pub const DISPLAY: [FacetField; 5] = [
        FacetField::Signals,
        FacetField::MedicalImaging,
        FacetField::DlType,
        FacetField::Task,
        FacetField::Context,
    ];

    /// Key of the field in the source data.
    pub fn key(self) -> &'static str {
        match self {
            FacetField::Signals => "signals",
            FacetField::MedicalImaging => "medical_imaging",
            FacetField::UsesDl => "uses_dl",
            FacetField::DlType => "dl_type",
            FacetField::Task => "task",
            FacetField::Context => "context",
        }
    }

    /// Human-readable control label.
    pub fn label(self) -> &'static str {
        match self {
            FacetField::Signals => "Señal fisiológica",
            FacetField::MedicalImaging => "Imagen médica",
            FacetField::UsesDl => "¿Usa Deep Learning?",
            FacetField::DlType => "Tipo de DL",
            FacetField::Task => "Tarea",
            FacetField::Context => "Contexto",
        }
    }
}

impl std::fmt::Display for FacetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FacetField {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        FacetField::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| ExplorerError::UnknownFacet(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Facet values
// ---------------------------------------------------------------------------

/// A single non-null facet value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Number(serde_json::Number),
    /// A nested array or object, held as its `String(v)` text. Always
    /// truthy, even when the text is empty (`[]`).
    Composite(String),
}

impl Scalar {
    /// Convert a JSON value. `null` has no scalar form.
    pub fn from_json(value: Value) -> Option<Scalar> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Scalar::Bool(b)),
            Value::Number(n) => Some(Scalar::Number(n)),
            Value::String(s) => Some(Scalar::Text(s)),
            other @ (Value::Array(_) | Value::Object(_)) => {
                Some(Scalar::Composite(display_string(&other)))
            }
        }
    }

    /// The string form used for facet options and matching.
    pub fn facet_string(&self) -> String {
        match self {
            Scalar::Text(s) | Scalar::Composite(s) => s.clone(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => number_string(n),
        }
    }

    /// Falsy values (`false`, `0`, `""`) are dropped from tag badges.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Scalar::Composite(_) => true,
        }
    }
}

/// Browser `String(v)` for a JSON value: arrays join their elements with
/// `,` (`null` elements become empty), objects print as `[object Object]`.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| if v.is_null() { String::new() } else { display_string(v) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}

/// `false`, `0`, `""` and `null` are falsy; arrays and objects never are.
pub fn is_truthy_json(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn number_string(n: &serde_json::Number) -> String {
    n.as_f64().map_or_else(|| n.to_string(), js_number)
}

/// Shortest round-trip digits laid out the way browsers print numbers:
/// plain notation for exponents in `-7..21`, `1e+21` / `1e-7` outside it.
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".into();
    }
    if !f.is_finite() {
        return f.to_string();
    }
    let sci = format!("{:e}", f.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let Ok(exp) = exp.parse::<i32>() else {
        return f.to_string();
    };
    let k = digits.len() as i32;
    // decimal point sits after `n` digits
    let n = exp + 1;
    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let sign = if n > 0 { '+' } else { '-' };
        let e = (n - 1).unsigned_abs();
        match digits.split_at(1) {
            (lead, "") => format!("{lead}e{sign}{e}"),
            (lead, rest) => format!("{lead}.{rest}e{sign}{e}"),
        }
    };
    if f < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Value of one facet field on one paper.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FacetValue {
    /// Missing or `null`.
    #[default]
    Absent,
    Scalar(Scalar),
    /// An array field. `null` elements are dropped on load.
    Sequence(Vec<Scalar>),
}

impl FacetValue {
    /// All scalars carried by this value, in source order.
    pub fn scalars(&self) -> &[Scalar] {
        match self {
            FacetValue::Absent => &[],
            FacetValue::Scalar(s) => std::slice::from_ref(s),
            FacetValue::Sequence(items) => items,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FacetValue::Absent)
    }
}

impl From<Value> for FacetValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FacetValue::Absent,
            Value::Array(items) => {
                FacetValue::Sequence(items.into_iter().filter_map(Scalar::from_json).collect())
            }
            other => Scalar::from_json(other).map_or(FacetValue::Absent, FacetValue::Scalar),
        }
    }
}

impl<S: Into<Scalar>> From<Vec<S>> for FacetValue {
    fn from(items: Vec<S>) -> Self {
        FacetValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Lenient deserializers
// ---------------------------------------------------------------------------

fn facet_value<'de, D: Deserializer<'de>>(d: D) -> Result<FacetValue, D::Error> {
    Value::deserialize(d).map(FacetValue::from)
}

fn truthy_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(is_truthy_json(&value).then(|| display_string(&value)))
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => String::new(),
        other => display_string(&other),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
