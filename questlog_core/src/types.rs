//! Core log types for the activity dashboard.
//!
//! This module defines the five activity log variants that the store hands
//! to the engine, plus the [`LogBook`] that groups them. Every log carries an
//! opaque store-assigned id and the instant it was recorded.
//!
//! Numeric fields that are missing from a stored record deserialize as zero,
//! and unrecognised enum values fall back to a catch-all variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Anything carrying the instant it was logged.
pub trait Timestamped {
    fn date(&self) -> DateTime<Utc>;
}

// ============================================================================
// Lenient numeric fields
// ============================================================================

/// Numeric value of a stored field: numbers and numeric strings parse,
/// anything else (null, garbage, non-finite) is 0.
fn number_or_zero(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or_zero(&value))
}

/// Integer counters truncate fractions and saturate at the `u32` range
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or_zero(&value).trunc() as u32)
}

// ============================================================================
// Weight
// ============================================================================

/// A body weight measurement in kilograms
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightLog {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: f64,
    pub date: DateTime<Utc>,
}

// ============================================================================
// Cardio
// ============================================================================

/// Cardio equipment as recorded by the store.
///
/// Known names map to dedicated variants by exact string equality; anything
/// else is kept verbatim in `Other`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Equipment {
    Running,
    HammerSpeedRace,
    CanyonUltimateCf7,
    CanyonPrecedeOn,
    TribanRc520,
    Other(String),
}

impl Equipment {
    pub fn as_str(&self) -> &str {
        match self {
            Equipment::Running => "Running",
            Equipment::HammerSpeedRace => "Hammer Speed Race",
            Equipment::CanyonUltimateCf7 => "Canyon Ultimate CF 7",
            Equipment::CanyonPrecedeOn => "Canyon Precede:ON",
            Equipment::TribanRc520 => "Triban RC 520",
            Equipment::Other(name) => name,
        }
    }

    /// Running is the only non-cycling equipment; everything else is a bike.
    pub fn category(&self) -> CardioCategory {
        match self {
            Equipment::Running => CardioCategory::Running,
            _ => CardioCategory::Cycling,
        }
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Equipment::Other(String::new())
    }
}

impl From<String> for Equipment {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Running" => Equipment::Running,
            "Hammer Speed Race" => Equipment::HammerSpeedRace,
            "Canyon Ultimate CF 7" => Equipment::CanyonUltimateCf7,
            "Canyon Precede:ON" => Equipment::CanyonPrecedeOn,
            "Triban RC 520" => Equipment::TribanRc520,
            _ => Equipment::Other(s),
        }
    }
}

impl From<Equipment> for String {
    fn from(e: Equipment) -> Self {
        e.as_str().to_string()
    }
}

/// Coarse cardio grouping used for per-category totals and records
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardioCategory {
    Running,
    Cycling,
}

impl std::str::FromStr for CardioCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "running" | "run" => Ok(CardioCategory::Running),
            "cycling" | "biking" | "bike" => Ok(CardioCategory::Cycling),
            other => Err(crate::Error::Other(format!(
                "Unknown cardio category: {}",
                other
            ))),
        }
    }
}

/// A cardio session. Duration is minutes, distance is kilometres.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardioLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub calories: u32,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_loss: Option<f64>,
}

// ============================================================================
// Strength
// ============================================================================

/// One logged strength set
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub exercise: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub reps: u32,
    pub date: DateTime<Utc>,
}

impl StrengthLog {
    /// Load moved by this set (kg x reps)
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

// ============================================================================
// Bodyweight
// ============================================================================

/// Bodyweight exercise kind. Planking counts seconds, the rest count reps.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BodyweightKind {
    Situps,
    Pushups,
    Planking,
    Other(String),
}

impl Default for BodyweightKind {
    fn default() -> Self {
        BodyweightKind::Other(String::new())
    }
}

impl From<String> for BodyweightKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Situps" => BodyweightKind::Situps,
            "Pushups" => BodyweightKind::Pushups,
            "Planking" => BodyweightKind::Planking,
            _ => BodyweightKind::Other(s),
        }
    }
}

impl From<BodyweightKind> for String {
    fn from(k: BodyweightKind) -> Self {
        match k {
            BodyweightKind::Situps => "Situps".into(),
            BodyweightKind::Pushups => "Pushups".into(),
            BodyweightKind::Planking => "Planking".into(),
            BodyweightKind::Other(s) => s,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyweightLog {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: BodyweightKind,
    /// Reps, or seconds for planking
    #[serde(default, deserialize_with = "lenient_u32")]
    pub count: u32,
    pub date: DateTime<Utc>,
}

// ============================================================================
// Nutrition
// ============================================================================

/// Traffic-light rating of a day's eating
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum NutritionStatus {
    Green,
    Yellow,
    Orange,
    Red,
    #[default]
    Unknown,
}

impl NutritionStatus {
    /// Ordinal score used for nutrition averages. Unknown ranks with red.
    pub fn score(self) -> u32 {
        match self {
            NutritionStatus::Green => 3,
            NutritionStatus::Yellow => 2,
            NutritionStatus::Orange => 1,
            NutritionStatus::Red | NutritionStatus::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NutritionStatus::Green => "green",
            NutritionStatus::Yellow => "yellow",
            NutritionStatus::Orange => "orange",
            NutritionStatus::Red => "red",
            NutritionStatus::Unknown => "unknown",
        }
    }
}

impl From<String> for NutritionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "green" => NutritionStatus::Green,
            "yellow" => NutritionStatus::Yellow,
            "orange" => NutritionStatus::Orange,
            "red" => NutritionStatus::Red,
            _ => NutritionStatus::Unknown,
        }
    }
}

impl From<NutritionStatus> for String {
    fn from(s: NutritionStatus) -> Self {
        s.as_str().to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: NutritionStatus,
    pub date: DateTime<Utc>,
}

macro_rules! impl_timestamped {
    ($($t:ty),* $(,)?) => {
        $(
            impl Timestamped for $t {
                fn date(&self) -> DateTime<Utc> {
                    self.date
                }
            }
        )*
    };
}

impl_timestamped!(WeightLog, CardioLog, StrengthLog, BodyweightLog, NutritionLog);

// ============================================================================
// Log Book
// ============================================================================

/// An immutable snapshot of every log collection.
///
/// Collection order carries no meaning for evaluation.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct LogBook {
    #[serde(default)]
    pub weight: Vec<WeightLog>,
    #[serde(default)]
    pub cardio: Vec<CardioLog>,
    #[serde(default)]
    pub strength: Vec<StrengthLog>,
    #[serde(default)]
    pub bodyweight: Vec<BodyweightLog>,
    #[serde(default)]
    pub nutrition: Vec<NutritionLog>,
}

impl LogBook {
    /// Every log instant across all five collections
    pub fn all_dates(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.weight
            .iter()
            .map(Timestamped::date)
            .chain(self.cardio.iter().map(Timestamped::date))
            .chain(self.strength.iter().map(Timestamped::date))
            .chain(self.bodyweight.iter().map(Timestamped::date))
            .chain(self.nutrition.iter().map(Timestamped::date))
    }

    pub fn len(&self) -> usize {
        self.weight.len()
            + self.cardio.len()
            + self.strength.len()
            + self.bodyweight.len()
            + self.nutrition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
