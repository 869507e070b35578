//! Content fingerprint tying a printed report to its data.

use fc_project::MeasurementSet;
use fc_sizing::SizingResult;
use sha2::{Digest, Sha256};

pub fn compute_fingerprint(measurements: &MeasurementSet, result: &SizingResult) -> String {
    let mut hasher = Sha256::new();

    let measurements_json = serde_json::to_string(measurements).unwrap_or_default();
    hasher.update(measurements_json.as_bytes());

    let result_json = serde_json::to_string(result).unwrap_or_default();
    hasher.update(result_json.as_bytes());

    let digest = hasher.finalize();
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_project::MeasurementInput;
    use fc_sizing::{AreaBasedInput, SizingConfig, SizingMethod};

    fn measured(area: f64) -> (MeasurementSet, SizingResult) {
        let input = AreaBasedInput::new(area, 50.0, None);
        let result = input.size(&SizingConfig::default(), None).unwrap();
        (
            MeasurementSet {
                input: MeasurementInput::AreaBased(input),
                climate_projection_factor: None,
            },
            result,
        )
    }

    #[test]
    fn fingerprint_stability() {
        let (m, r) = measured(2.0);
        assert_eq!(compute_fingerprint(&m, &r), compute_fingerprint(&m, &r));
        assert_eq!(compute_fingerprint(&m, &r).len(), 64);
    }

    #[test]
    fn fingerprint_differs_for_different_inputs() {
        let (m1, r1) = measured(2.0);
        let (m2, r2) = measured(2.5);
        assert_ne!(compute_fingerprint(&m1, &r1), compute_fingerprint(&m2, &r2));
    }
}
