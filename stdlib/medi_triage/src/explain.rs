use serde::Serialize;

use crate::input::{HealthInput, Vitals};
use crate::noise::clamp_perturbation;
use crate::risk::{
    heart_rate_contribution, spo2_contribution, symptom_contribution, temperature_contribution,
};

/// How a risk score was put together, factor by factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskBreakdown {
    pub temperature: f64,
    pub heart_rate: f64,
    pub spo2: f64,
    pub symptoms: f64,
    /// Sum of the four contributions.
    pub base: f64,
    pub perturbation: f64,
    /// `base + perturbation`, clamped to `[0, 1]`.
    pub risk: f64,
}

impl RiskBreakdown {
    /// Contributions for already-defaulted vitals, with no perturbation.
    pub fn from_vitals(vitals: &Vitals, symptom: &str) -> Self {
        let temperature = temperature_contribution(vitals.temperature);
        let heart_rate = heart_rate_contribution(vitals.heart_rate);
        let spo2 = spo2_contribution(vitals.spo2);
        let symptoms = symptom_contribution(symptom);

        let mut base = 0.0;
        base += temperature;
        base += heart_rate;
        base += spo2;
        base += symptoms;

        Self {
            temperature,
            heart_rate,
            spo2,
            symptoms,
            base,
            perturbation: 0.0,
            risk: base.clamp(0.0, 1.0),
        }
    }

    pub fn with_perturbation(self, perturbation: f64) -> Self {
        let perturbation = clamp_perturbation(perturbation);
        Self {
            perturbation,
            risk: (self.base + perturbation).clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Defaults missing vitals and sums the per-factor contributions.
pub fn base_breakdown(input: &HealthInput) -> RiskBreakdown {
    RiskBreakdown::from_vitals(&Vitals::from_input(input), &input.symptom)
}
