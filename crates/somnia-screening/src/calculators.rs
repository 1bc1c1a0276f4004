use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use somnia_core::models::measurement::{HeightUnit, NeckUnit, WeightUnit};

const INCHES_PER_METER: f64 = 0.0254;
const KG_PER_LB: f64 = 0.453592;
const CM_PER_INCH: f64 = 2.54;

/// Raised when a calculator input is outside its physical domain.
/// The session refuses to touch any derived answer until it is corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error, TS)]
#[ts(export)]
#[error("invalid measurement: {field} must be greater than zero")]
pub struct InvalidMeasurement {
    pub field: String,
}

impl InvalidMeasurement {
    fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

/// A computed body mass index, rounded to one decimal place, with the
/// STOP-BANG threshold already applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bmi {
    pub value: f64,
    pub over_35: bool,
}

/// Compute BMI from a height/weight pair in the units the form offers.
/// Imperial height arrives as total inches.
pub fn compute_bmi(
    height: f64,
    height_unit: HeightUnit,
    weight: f64,
    weight_unit: WeightUnit,
) -> Result<Bmi, InvalidMeasurement> {
    if height <= 0.0 {
        return Err(InvalidMeasurement::new("height"));
    }
    if weight <= 0.0 {
        return Err(InvalidMeasurement::new("weight"));
    }

    let height_m = match height_unit {
        HeightUnit::Cm => height / 100.0,
        HeightUnit::In => height * INCHES_PER_METER,
    };
    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lbs => weight * KG_PER_LB,
    };

    let value = round_one_decimal(weight_kg / (height_m * height_m));
    Ok(Bmi {
        value,
        over_35: value > 35.0,
    })
}

/// Is the neck circumference strictly over 16 inches?
pub fn compute_neck_over_16(neck_size: f64, unit: NeckUnit) -> Result<bool, InvalidMeasurement> {
    if neck_size <= 0.0 {
        return Err(InvalidMeasurement::new("neck size"));
    }
    let inches = match unit {
        NeckUnit::Cm => neck_size / CM_PER_INCH,
        NeckUnit::In => neck_size,
    };
    Ok(inches > 16.0)
}

/// Is the respondent strictly over 50 years old?
pub fn compute_age_over_50(age: u32) -> Result<bool, InvalidMeasurement> {
    if age == 0 {
        return Err(InvalidMeasurement::new("age"));
    }
    Ok(age > 50)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
