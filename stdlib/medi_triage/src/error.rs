use thiserror::Error;

/// A [`HealthInput`](crate::HealthInput) field outside its declared range or
/// format. Raised before scoring; the scorer itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Symptom must be between {min} and {max} characters (got {actual})")]
    SymptomLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Heart rate must be between 30-220 bpm (got {0})")]
    HeartRateOutOfRange(i32),

    #[error("Temperature must be between 35-45°C")]
    TemperatureOutOfRange(f64),

    #[error("SpO₂ must be between 70-100")]
    Spo2OutOfRange(i32),

    #[error("Blood pressure must be in format: systolic/diastolic (e.g., 120/80)")]
    BloodPressureFormat(String),

    #[error("Duration must be at most {max} characters (got {actual})")]
    DurationTooLong { max: usize, actual: usize },
}

impl ValidationError {
    /// Name of the offending input field, as it appears in the JSON body.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::SymptomLength { .. } => "symptom",
            ValidationError::HeartRateOutOfRange(_) => "heart_rate",
            ValidationError::TemperatureOutOfRange(_) => "temperature",
            ValidationError::Spo2OutOfRange(_) => "spo2",
            ValidationError::BloodPressureFormat(_) => "blood_pressure",
            ValidationError::DurationTooLong { .. } => "duration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_allowed_range() {
        assert_eq!(
            ValidationError::TemperatureOutOfRange(46.0).to_string(),
            "Temperature must be between 35-45°C"
        );
        assert_eq!(
            ValidationError::Spo2OutOfRange(60).to_string(),
            "SpO₂ must be between 70-100"
        );
        assert_eq!(
            ValidationError::SymptomLength {
                min: 1,
                max: 500,
                actual: 0
            }
            .to_string(),
            "Symptom must be between 1 and 500 characters (got 0)"
        );
    }

    #[test]
    fn field_names_match_json_keys() {
        assert_eq!(ValidationError::HeartRateOutOfRange(10).field(), "heart_rate");
        assert_eq!(
            ValidationError::BloodPressureFormat("x".into()).field(),
            "blood_pressure"
        );
        assert_eq!(
            ValidationError::DurationTooLong { max: 100, actual: 101 }.field(),
            "duration"
        );
    }
}
