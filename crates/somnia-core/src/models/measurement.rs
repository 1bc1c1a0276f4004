use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HeightUnit {
    Cm,
    /// The form's ft/in pair collapses to total inches before it reaches us.
    In,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightUnit {
    Kg,
    Lbs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NeckUnit {
    Cm,
    In,
}

/// Height and weight as entered in the BMI calculator card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BodyMetrics {
    pub height: f64,
    pub height_unit: HeightUnit,
    pub weight: f64,
    pub weight_unit: WeightUnit,
}

/// Neck circumference and age as entered in the neck/age calculator card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NeckAge {
    pub neck_size: f64,
    pub neck_unit: NeckUnit,
    /// Whole years.
    pub age: u32,
}
