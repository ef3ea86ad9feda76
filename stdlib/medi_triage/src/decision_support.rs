use std::fmt;

use serde::{Deserialize, Serialize};

/// Triage urgency, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageLevel {
    SelfCare = 0,
    PrimaryCare = 1,
    SemiEmergency = 2,
    Emergency = 3,
}

impl TriageLevel {
    pub const ALL: [TriageLevel; 4] = [
        TriageLevel::SelfCare,
        TriageLevel::PrimaryCare,
        TriageLevel::SemiEmergency,
        TriageLevel::Emergency,
    ];

    /// First row of [`LEVEL_TABLE`] whose upper bound exceeds `risk`.
    pub fn from_risk(risk: f64) -> TriageLevel {
        LEVEL_TABLE
            .iter()
            .find(|row| risk < row.upper_bound)
            .map_or(TriageLevel::Emergency, |row| row.level)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriageLevel::SelfCare => "self_care",
            TriageLevel::PrimaryCare => "primary_care",
            TriageLevel::SemiEmergency => "semi_emergency",
            TriageLevel::Emergency => "emergency",
        }
    }

    pub fn guidance(self) -> &'static LevelGuidance {
        LevelGuidance::for_level(self)
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed user-facing text attached to a triage level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelGuidance {
    pub level: TriageLevel,
    /// Exclusive upper bound on the risk score for this level.
    pub upper_bound: f64,
    pub message: &'static str,
    pub recommendations: [&'static str; 4],
    pub safety_note: &'static str,
}

impl LevelGuidance {
    pub fn for_level(level: TriageLevel) -> &'static LevelGuidance {
        &LEVEL_TABLE[level as usize]
    }
}

/// Rows are ordered by urgency and indexed by `TriageLevel` discriminant.
pub static LEVEL_TABLE: [LevelGuidance; 4] = [
    LevelGuidance {
        level: TriageLevel::SelfCare,
        upper_bound: 0.3,
        message: "Your symptoms appear mild. Monitor at home and rest.",
        recommendations: [
            "Rest and stay hydrated",
            "Monitor symptoms for 24-48 hours",
            "Use over-the-counter remedies if appropriate",
            "Contact healthcare if symptoms worsen",
        ],
        safety_note:
            "If symptoms worsen or persist beyond 48 hours, contact your primary care provider.",
    },
    LevelGuidance {
        level: TriageLevel::PrimaryCare,
        upper_bound: 0.6,
        message: "Non-urgent, but medical review recommended within 24-48 hours.",
        recommendations: [
            "Schedule an appointment with your primary care provider",
            "Monitor symptoms closely",
            "Keep a symptom diary",
            "Seek care if symptoms worsen",
        ],
        safety_note: "If symptoms worsen significantly, seek care sooner. Contact emergency services if you experience severe symptoms.",
    },
    LevelGuidance {
        level: TriageLevel::SemiEmergency,
        upper_bound: 0.8,
        message: "Moderate concern. Seek medical care within hours.",
        recommendations: [
            "Seek medical attention within 4-6 hours",
            "Consider visiting urgent care or emergency department",
            "Do not delay if symptoms worsen",
            "Have someone accompany you if possible",
        ],
        safety_note: "If symptoms worsen rapidly or you experience severe pain, difficulty breathing, or confusion, call emergency services immediately.",
    },
    LevelGuidance {
        level: TriageLevel::Emergency,
        upper_bound: f64::INFINITY,
        message: "High risk detected. Seek immediate medical attention.",
        recommendations: [
            "Call emergency services (911/112) immediately",
            "Do not drive yourself to the hospital",
            "Have someone stay with you",
            "Prepare a list of medications and allergies",
        ],
        safety_note: "This is a high-risk assessment. If you are experiencing chest pain, difficulty breathing, severe trauma, or loss of consciousness, call emergency services immediately.",
    },
];
