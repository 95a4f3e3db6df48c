//! Deterministic clinical-style report rendering.

use crate::{artifacts::DiseaseInfo, triage::risk::{confidence_label, RiskLevel}};

/// Compose the detailed analysis text for one prediction.
///
/// Pure template assembly: same inputs, same bytes. Sections are separated by
/// blank lines and use markdown-flavoured headings.
pub fn render_report(
    disease: &str,
    symptoms: &[String],
    info: &DiseaseInfo,
    confidence: f64,
) -> String {
    let sym_str = if symptoms.is_empty() {
        "various symptoms".to_string()
    } else {
        symptoms
            .iter()
            .take(6)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines: Vec<String> = Vec::new();
    lines.push("## Analysis Report".to_string());
    lines.push(String::new());
    lines.push(format!("**Symptoms Detected:** {sym_str}"));
    lines.push(format!("**Most Likely Condition:** {disease}"));
    lines.push(format!(
        "**Confidence Level:** {} ({:.1}%)",
        confidence_label(confidence),
        confidence * 100.0
    ));
    lines.push(format!("**Severity Score:** {:.1} / 7", info.severity_score));
    lines.push(format!("**Risk Classification:** {}", info.risk_level));
    lines.push(String::new());

    if !info.description.is_empty() {
        lines.push("### About This Condition".to_string());
        lines.push(info.description.clone());
        lines.push(String::new());
    }

    if info.is_emergency {
        lines.push("### ⚠️ EMERGENCY NOTICE".to_string());
        lines.push(
            "Based on the identified symptoms and condition, this may be a **medical emergency**. \
             Please call emergency services (112 / 108) immediately or proceed to the nearest \
             emergency room without delay. Do NOT drive yourself."
                .to_string(),
        );
        lines.push(String::new());
    }

    lines.push("### Recommended Precautions".to_string());
    for (i, precaution) in info.precautions.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, capitalise(precaution)));
    }
    lines.push(String::new());

    lines.push("### General Advice".to_string());
    lines.push(general_advice(info.risk_level).to_string());
    lines.push(String::new());

    lines.push("---".to_string());
    lines.push(
        "*⚠️ Disclaimer: This analysis is AI-generated and is intended for informational purposes \
         only. It does NOT replace professional medical advice, diagnosis, or treatment. Always \
         consult a qualified healthcare professional for medical decisions.*"
            .to_string(),
    );

    lines.join("\n")
}

/// Exactly one advice branch fires per risk level.
fn general_advice(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Critical | RiskLevel::High => {
            "Given the high severity of the detected symptoms, it is strongly advised to seek \
             professional medical attention immediately. Do not self-medicate without consulting \
             a doctor."
        }
        RiskLevel::Medium => {
            "Your symptoms suggest a moderate-severity condition. Schedule an appointment with a \
             healthcare provider soon. Monitor your symptoms and seek emergency care if they \
             worsen."
        }
        RiskLevel::Low => {
            "Your symptoms appear to be of low severity. Rest, hydrate well, and monitor your \
             condition. Consult a doctor if symptoms persist for more than 3 days."
        }
    }
}

/// Uppercase the first character, leave the rest untouched.
fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalise;

    #[test]
    fn capitalise_first_character_only() {
        assert_eq!(capitalise("drink plenty of water"), "Drink plenty of water");
        assert_eq!(capitalise(""), "");
    }
}
