//! Short guides explaining how to measure each input field.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementGuide {
    #[serde(skip)]
    pub topic: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub video_url: Option<&'static str>,
}

pub static GUIDES: [MeasurementGuide; 6] = [
    MeasurementGuide {
        topic: "temperature",
        title: "Temperature",
        description: "Measure your body temperature using a thermometer. Normal body temperature is around 36.5-37.5°C. Place the thermometer under your tongue or in your armpit for accurate reading.",
        video_url: None,
    },
    MeasurementGuide {
        topic: "heart_rate",
        title: "Heart Rate",
        description: "Find your pulse on your wrist or neck. Count the beats for 30 seconds and multiply by 2, or count for a full minute. Normal resting heart rate is 60-100 bpm.",
        video_url: None,
    },
    MeasurementGuide {
        topic: "spo2",
        title: "SpO₂ (Oxygen Saturation)",
        description: "Measure your blood oxygen level using a pulse oximeter. Place the device on your finger and wait for a reading. Normal SpO₂ is 95-100%. Values below 90% may indicate a medical emergency.",
        video_url: None,
    },
    MeasurementGuide {
        topic: "blood_pressure",
        title: "Blood Pressure",
        description: "Measure your blood pressure using a blood pressure monitor. Normal blood pressure is typically around 120/80 mmHg. Enter in format: systolic/diastolic (e.g., 120/80).",
        video_url: None,
    },
    MeasurementGuide {
        topic: "symptom",
        title: "Main Symptom",
        description: "Describe your primary symptom or concern. Be as specific as possible (e.g., 'chest pain', 'headache for 3 days', 'fever and cough').",
        video_url: None,
    },
    MeasurementGuide {
        topic: "duration",
        title: "Duration",
        description: "How long have you been experiencing these symptoms? This helps determine the urgency of care needed.",
        video_url: None,
    },
];

/// Exact, case-sensitive topic lookup.
pub fn find_guide(topic: &str) -> Option<&'static MeasurementGuide> {
    GUIDES.iter().find(|g| g.topic == topic)
}
