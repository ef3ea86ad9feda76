use serde::{Deserialize, Serialize};

use crate::decision_support::TriageLevel;
use crate::explain::RiskBreakdown;
use crate::input::{HealthInput, Vitals};
use crate::noise::{round_confidence, NoiseSource};

/// Result of a triage assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: TriageLevel,
    pub confidence: f64,
    pub message: String,
    pub recommendations: Vec<String>,
    pub safety_note: String,
}

impl RiskAssessment {
    /// Attach the fixed guidance text for `level`.
    pub fn new(level: TriageLevel, confidence: f64) -> Self {
        let guidance = level.guidance();
        Self {
            level,
            confidence,
            message: guidance.message.to_string(),
            recommendations: guidance
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
            safety_note: guidance.safety_note.to_string(),
        }
    }
}

/// Score `input` and classify it into a triage level.
///
/// `input` is expected to have passed [`HealthInput::validate`]; the scorer
/// itself does not fail.
pub fn assess<N: NoiseSource + ?Sized>(input: &HealthInput, noise: &mut N) -> RiskAssessment {
    assess_with_breakdown(input, noise).0
}

/// Like [`assess`], also returning the intermediate [`RiskBreakdown`].
pub fn assess_with_breakdown<N: NoiseSource + ?Sized>(
    input: &HealthInput,
    noise: &mut N,
) -> (RiskAssessment, RiskBreakdown) {
    let vitals = Vitals::from_input(input);
    let base = RiskBreakdown::from_vitals(&vitals, &input.symptom);

    log::info!(
        "Risk calculation - Temp: {}°C (+{}), HR: {} bpm (+{}), SpO2: {}% (+{}), Symptoms: '{}' (+{}), Base risk: {}",
        vitals.temperature,
        base.temperature,
        vitals.heart_rate,
        base.heart_rate,
        vitals.spo2,
        base.spo2,
        input.symptom_preview(30),
        base.symptoms,
        base.base
    );

    let breakdown = base.with_perturbation(noise.perturbation());
    log::info!(
        "Final risk after perturbation ({:.2}): {:.2}",
        breakdown.perturbation,
        breakdown.risk
    );

    let level = TriageLevel::from_risk(breakdown.risk);
    log::info!("Triage level determined: {level} (risk: {:.2})", breakdown.risk);

    let confidence = round_confidence(noise.confidence());
    (RiskAssessment::new(level, confidence), breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::FixedNoise;
    use pretty_assertions::assert_eq;

    #[test]
    fn guidance_text_is_copied_from_the_table() {
        let a = RiskAssessment::new(TriageLevel::Emergency, 0.9);
        assert_eq!(a.message, "High risk detected. Seek immediate medical attention.");
        assert_eq!(
            a.recommendations,
            vec![
                "Call emergency services (911/112) immediately",
                "Do not drive yourself to the hospital",
                "Have someone stay with you",
                "Prepare a list of medications and allergies",
            ]
        );
    }

    #[test]
    fn confidence_comes_from_the_noise_source() {
        let mut noise = FixedNoise::new(0.0, 0.912);
        let a = assess(&HealthInput::new("fine"), &mut noise);
        assert_eq!(a.confidence, 0.91);
        assert_eq!(a.level, TriageLevel::SelfCare);
    }

    #[test]
    fn serializes_with_snake_case_level() {
        let a = RiskAssessment::new(TriageLevel::PrimaryCare, 0.8);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["level"], "primary_care");
        assert_eq!(json["confidence"], 0.8);
        assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(4));
    }
}
