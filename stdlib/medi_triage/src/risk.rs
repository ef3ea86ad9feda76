//! Per-factor risk contributions.

use serde::Serialize;

/// A group of symptom keywords and the risk it adds when any keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityTier {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub contribution: f64,
}

/// Evaluated top to bottom; the first tier with a matching keyword wins.
pub static SYMPTOM_TIERS: [SeverityTier; 2] = [
    SeverityTier {
        name: "severe",
        keywords: &["severe", "intense", "unbearable", "crushing", "sharp"],
        contribution: 0.3,
    },
    SeverityTier {
        name: "moderate",
        keywords: &["moderate", "persistent", "worsening"],
        contribution: 0.15,
    },
];

/// Normal range is 36.5-37.5 °C.
pub fn temperature_contribution(celsius: f64) -> f64 {
    if celsius < 36.0 || celsius >= 38.5 {
        0.3
    } else if celsius < 36.5 || celsius > 37.5 {
        0.15
    } else {
        0.0
    }
}

/// Normal resting range is 60-100 bpm.
pub fn heart_rate_contribution(bpm: i32) -> f64 {
    if !(50..=120).contains(&bpm) {
        0.3
    } else if !(60..=100).contains(&bpm) {
        0.15
    } else {
        0.0
    }
}

/// Normal saturation is 95-100 %.
pub fn spo2_contribution(percent: i32) -> f64 {
    if percent < 90 {
        0.5
    } else if percent < 95 {
        0.2
    } else {
        0.0
    }
}

/// Case-insensitive substring match against [`SYMPTOM_TIERS`].
pub fn matching_tier(symptom: &str) -> Option<&'static SeverityTier> {
    let lowered = symptom.to_lowercase();
    SYMPTOM_TIERS
        .iter()
        .find(|tier| tier.keywords.iter().any(|kw| lowered.contains(kw)))
}

pub fn symptom_contribution(symptom: &str) -> f64 {
    matching_tier(symptom).map_or(0.0, |tier| tier.contribution)
}
