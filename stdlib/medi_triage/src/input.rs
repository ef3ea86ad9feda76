use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_HEART_RATE: i32 = 75;
pub const DEFAULT_TEMPERATURE: f64 = 36.5;
pub const DEFAULT_SPO2: i32 = 98;

pub const SYMPTOM_CHARS: RangeInclusive<usize> = 1..=500;
pub const HEART_RATE_RANGE: RangeInclusive<i32> = 30..=220;
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 35.0..=45.0;
pub const SPO2_RANGE: RangeInclusive<i32> = 70..=100;
pub const MAX_DURATION_CHARS: usize = 100;

static BLOOD_PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,3}/\d{2,3}$").expect("valid blood pressure regex"));

/// Self-reported symptom and vital-sign data.
///
/// Only `symptom`, `heart_rate`, `temperature` and `spo2` take part in
/// scoring. `blood_pressure` and `duration` are validated and carried along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    pub symptom: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl HealthInput {
    pub fn new(symptom: impl Into<String>) -> Self {
        Self {
            symptom: symptom.into(),
            heart_rate: None,
            temperature: None,
            spo2: None,
            blood_pressure: None,
            duration: None,
        }
    }

    pub fn with_heart_rate(mut self, bpm: i32) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    pub fn with_spo2(mut self, percent: i32) -> Self {
        self.spo2 = Some(percent);
        self
    }

    pub fn with_blood_pressure(mut self, reading: impl Into<String>) -> Self {
        self.blood_pressure = Some(reading.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Check every field against its declared range or format.
    ///
    /// Rules run in field order and the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let symptom_chars = self.symptom.chars().count();
        if !SYMPTOM_CHARS.contains(&symptom_chars) {
            return Err(ValidationError::SymptomLength {
                min: *SYMPTOM_CHARS.start(),
                max: *SYMPTOM_CHARS.end(),
                actual: symptom_chars,
            });
        }

        if let Some(hr) = self.heart_rate {
            if !HEART_RATE_RANGE.contains(&hr) {
                return Err(ValidationError::HeartRateOutOfRange(hr));
            }
        }

        if let Some(temp) = self.temperature {
            // NaN fails `contains`, so non-finite readings are rejected here too.
            if !TEMPERATURE_RANGE.contains(&temp) {
                return Err(ValidationError::TemperatureOutOfRange(temp));
            }
        }

        if let Some(spo2) = self.spo2 {
            if !SPO2_RANGE.contains(&spo2) {
                return Err(ValidationError::Spo2OutOfRange(spo2));
            }
        }

        if let Some(bp) = &self.blood_pressure {
            if !BLOOD_PRESSURE.is_match(bp) {
                return Err(ValidationError::BloodPressureFormat(bp.clone()));
            }
        }

        if let Some(duration) = &self.duration {
            let actual = duration.chars().count();
            if actual > MAX_DURATION_CHARS {
                return Err(ValidationError::DurationTooLong {
                    max: MAX_DURATION_CHARS,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// First `max_chars` characters of the symptom, for log lines.
    pub fn symptom_preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.symptom.chars().take(max_chars).collect();
        if self.symptom.chars().nth(max_chars).is_some() {
            preview.push_str("...");
        }
        preview
    }
}

/// The vitals the scorer reads, with defaults applied for missing values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    pub heart_rate: i32,
    pub temperature: f64,
    pub spo2: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            heart_rate: DEFAULT_HEART_RATE,
            temperature: DEFAULT_TEMPERATURE,
            spo2: DEFAULT_SPO2,
        }
    }
}

impl Vitals {
    pub fn from_input(input: &HealthInput) -> Self {
        Self {
            heart_rate: input.heart_rate.unwrap_or(DEFAULT_HEART_RATE),
            temperature: input.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            spo2: input.spo2.unwrap_or(DEFAULT_SPO2),
        }
    }
}
