//! Heuristic triage scoring for self-reported symptoms and vital signs.
//!
//! The scorer turns a [`HealthInput`] into a [`RiskAssessment`]: an additive
//! risk score built from temperature, heart rate, SpO₂ and symptom keywords,
//! a small random perturbation, and a first-match lookup into the fixed
//! [`LevelGuidance`] table. Randomness comes from an injected
//! [`NoiseSource`], so scoring is reproducible under test.
//!
//! This is not a clinical decision support system. The output is a
//! deterministic-plus-noise heuristic, not a diagnosis.

pub mod assessment;
pub mod decision_support;
pub mod error;
pub mod explain;
pub mod guide;
pub mod input;
pub mod noise;
pub mod risk;

pub use assessment::{assess, assess_with_breakdown, RiskAssessment};
pub use decision_support::{LevelGuidance, TriageLevel, LEVEL_TABLE};
pub use error::ValidationError;
pub use explain::{base_breakdown, RiskBreakdown};
pub use guide::{find_guide, MeasurementGuide, GUIDES};
pub use input::{HealthInput, Vitals};
pub use noise::{round_confidence, FixedNoise, NoiseSource, RngNoise};
pub use risk::{
    heart_rate_contribution, matching_tier, spo2_contribution, symptom_contribution,
    temperature_contribution, SeverityTier, SYMPTOM_TIERS,
};
