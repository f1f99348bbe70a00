use crate::error::InputError;
use crate::task::TaskKind;

/// Turns raw form entries into the task's input vector.
///
/// Entries map 1:1, in order, onto [`TaskKind::features`]. A blank entry
/// takes the form default 0. There is no range checking: out-of-domain
/// values pass through to the model unchanged.
///
/// # Errors
/// [`InputError::CountMismatch`] if the entry count differs from the feature
/// count; [`InputError::NotNumeric`] naming the first feature whose entry
/// does not parse.
pub fn parse_vector(task: TaskKind, entries: &[String]) -> Result<Vec<f32>, InputError> {
    let features = task.features();
    if entries.len() != features.len() {
        return Err(InputError::CountMismatch {
            got: entries.len(),
            expected: features.len(),
        });
    }

    features
        .iter()
        .zip(entries)
        .map(|(&feature, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                return Ok(0.0);
            }
            entry.parse::<f32>().map_err(|_| InputError::NotNumeric {
                feature,
                value: entry.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_in_feature_order() {
        let raw = entries(&["2", "120", "70", "20", "79", "25.0", "0.5", "33"]);
        let vector = parse_vector(TaskKind::Diabetes, &raw).unwrap();
        assert_eq!(vector, vec![2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0]);
    }

    #[test]
    fn blank_entries_default_to_zero() {
        let raw = entries(&["", "  ", "1.5", "", "", "", ""]);
        let vector = parse_vector(TaskKind::Thyroid, &raw).unwrap();
        assert_eq!(vector, vec![0.0, 0.0, 1.5, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn out_of_domain_values_pass_through() {
        let raw = entries(&["-40", "1e6", "0", "0", "0", "0", "0"]);
        let vector = parse_vector(TaskKind::Thyroid, &raw).unwrap();
        assert_eq!(vector[0], -40.0);
        assert_eq!(vector[1], 1.0e6);
    }

    #[test]
    fn short_vector_is_a_count_mismatch() {
        let raw = entries(&["1", "2", "3", "4", "5", "6"]);
        let err = parse_vector(TaskKind::Thyroid, &raw).unwrap_err();
        assert!(
            matches!(err, InputError::CountMismatch { got: 6, expected: 7 }),
            "got {err:?}"
        );
    }

    #[test]
    fn non_numeric_entry_names_the_feature() {
        let raw = entries(&["2", "abc", "70", "20", "79", "25.0", "0.5", "33"]);
        let err = parse_vector(TaskKind::Diabetes, &raw).unwrap_err();
        match err {
            InputError::NotNumeric { feature, value } => {
                assert_eq!(feature, "Glucose");
                assert_eq!(value, "abc");
            }
            other => panic!("expected NotNumeric, got {other:?}"),
        }
    }
}
