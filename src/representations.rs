//! Representations
//! Functions that convert scales from one representation to another.
//! Intended to be chained by the callers in main.

use scale::Scale;
use serde_json;

/// A scale flattened out for machine-readable output.
#[derive(Debug, PartialEq, Serialize)]
pub struct ScaleSummary {
    pub tonic: String,
    pub tonality: String,
    pub tones: Vec<String>,
    pub subdominant: String,
    pub dominant: String,
}

/// Everything the tool knows about one tonic.
#[derive(Debug, Serialize)]
pub struct ScaleReport {
    pub tonic: String,
    pub expanded: Vec<ScaleSummary>,
    pub chromatic: Vec<ScaleSummary>,
}

pub fn scale_to_summary(scale: &Scale) -> ScaleSummary {
    ScaleSummary {
        tonic: scale.tonic(),
        tonality: scale.tonality().name().to_string(),
        tones: scale.tones(),
        subdominant: scale.subdominant(),
        dominant: scale.dominant(),
    }
}

pub fn scales_to_summaries(scales: &[Scale]) -> Vec<ScaleSummary> {
    scales.iter().map(scale_to_summary).collect()
}

/// The expansion and the chromatic family of a tonic, as pretty JSON.
pub fn report_to_json(tonic: &str, expanded: &[Scale], chromatic: &[Scale]) -> String {
    let report = ScaleReport {
        tonic: tonic.to_string(),
        expanded: scales_to_summaries(expanded),
        chromatic: scales_to_summaries(chromatic),
    };

    serde_json::to_string_pretty(&report).expect("Can't serialise report.")
}
