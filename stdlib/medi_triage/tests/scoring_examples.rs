use medi_triage::{assess_with_breakdown, FixedNoise, HealthInput, TriageLevel};

fn nominal(symptom: &str) -> HealthInput {
    HealthInput::new(symptom)
        .with_temperature(36.5)
        .with_heart_rate(75)
        .with_spo2(98)
}

#[test]
fn nominal_vitals_and_mild_symptom_are_self_care() {
    let (a, b) = assess_with_breakdown(&nominal("mild ache"), &mut FixedNoise::zero());
    assert_eq!(b.risk, 0.0);
    assert_eq!(a.level, TriageLevel::SelfCare);
}

#[test]
fn fever_alone_reaches_primary_care() {
    let input = nominal("fever").with_temperature(39.0);
    let (a, b) = assess_with_breakdown(&input, &mut FixedNoise::zero());
    assert_eq!(b.temperature, 0.3);
    assert_eq!(b.heart_rate + b.spo2 + b.symptoms, 0.0);
    assert_eq!(b.risk, 0.3);
    assert_eq!(a.level, TriageLevel::PrimaryCare);
}

#[test]
fn low_saturation_alone_reaches_primary_care() {
    let input = nominal("mild").with_spo2(85);
    let (a, b) = assess_with_breakdown(&input, &mut FixedNoise::zero());
    assert_eq!(b.spo2, 0.5);
    assert_eq!(b.risk, 0.5);
    assert_eq!(a.level, TriageLevel::PrimaryCare);
}

#[test]
fn severe_keywords_count_once() {
    let (a, b) = assess_with_breakdown(
        &nominal("severe crushing chest pain"),
        &mut FixedNoise::zero(),
    );
    assert_eq!(b.symptoms, 0.3);
    assert_eq!(b.risk, 0.3);
    assert_eq!(a.level, TriageLevel::PrimaryCare);

    // A moderate keyword alongside a severe one adds nothing extra.
    let (_, mixed) = assess_with_breakdown(
        &nominal("severe and worsening chest pain"),
        &mut FixedNoise::zero(),
    );
    assert_eq!(mixed.symptoms, 0.3);
    assert_eq!(mixed.risk, 0.3);
}

#[test]
fn omitted_vitals_default_to_nominal() {
    let (a, b) = assess_with_breakdown(&HealthInput::new("fine"), &mut FixedNoise::zero());
    assert_eq!(b.risk, 0.0);
    assert_eq!(a.level, TriageLevel::SelfCare);
}

#[test]
fn combined_abnormal_vitals_escalate_to_emergency() {
    let input = HealthInput::new("intense shortness of breath")
        .with_temperature(39.2)
        .with_heart_rate(130)
        .with_spo2(88);
    let (a, b) = assess_with_breakdown(&input, &mut FixedNoise::zero());
    assert_eq!(b.risk, 1.0);
    assert_eq!(a.level, TriageLevel::Emergency);
}

#[test]
fn negative_perturbation_can_drop_a_level() {
    let input = nominal("fever").with_temperature(39.0);
    let (a, b) = assess_with_breakdown(&input, &mut FixedNoise::new(-0.05, 0.8));
    assert!(b.risk < 0.3);
    assert_eq!(a.level, TriageLevel::SelfCare);
}
