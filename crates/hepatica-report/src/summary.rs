//! Terminal rendering of assessments, guidance, and disclaimers.

use std::fmt;

use crate::assessment::RiskAssessment;
use crate::band::RiskBand;
use crate::chart::influence_chart_ascii;

/// Shown under every rendered assessment.
pub const DISCLAIMER: &str =
    "This tool demonstrates AI-assisted health risk screening using synthetic data. \
     Not intended for clinical use.";

/// Preventive guidance bullets shown with every assessment.
pub fn preventive_guidance() -> &'static [&'static str] {
    &[
        "Reduce or avoid alcohol consumption",
        "Maintain gradual weight loss (5-10%)",
        "Exercise at least 30 minutes daily",
        "Prefer whole foods over processed foods",
        "Avoid self-medication",
        "Always consult a healthcare professional for diagnosis and treatment",
    ]
}

/// Width of the risk progress bar in characters.
const PROGRESS_WIDTH: usize = 40;

fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * PROGRESS_WIDTH) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        percent
    )
}

impl RiskAssessment {
    /// Format as an ASCII report for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nRisk Assessment Result\n");
        output.push_str(&format!("Generated: {}\n", self.generated_at));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if let Some(bmi) = self.bmi {
            output.push_str(&format!("  Calculated BMI:           {:.2}\n", bmi));
        }
        output.push_str(&format!(
            "  Estimated Risk:           {}\n",
            progress_bar(self.risk_percent)
        ));
        output.push_str(&format!("  Risk Category:            {}\n", self.band));

        if !self.influences.is_empty() {
            output.push_str("\nNormalized Feature Influence:\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            output.push_str(&influence_chart_ascii(&self.influences, 32));
        }

        output.push_str("\nPreventive Guidance:\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for item in preventive_guidance() {
            output.push_str(&format!("  - {item}\n"));
        }

        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(DISCLAIMER);
        output.push('\n');

        output
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} risk ({}%, probability {:.3})",
            self.band, self.risk_percent, self.probability
        )
    }
}

/// One-line banner for a risk band, mirroring the original traffic-light
/// labels.
pub fn band_banner(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Low => "LOW RISK",
        RiskBand::Moderate => "MODERATE RISK",
        RiskBand::High => "HIGH RISK",
    }
}
