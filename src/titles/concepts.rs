use std::collections::BTreeSet;

use crate::types::Annotation;

/// Unique labels of the annotations scoring above the interest threshold,
/// sorted.
pub fn interesting_concepts(annotations: &[Annotation]) -> Vec<String> {
    annotations
        .iter()
        .filter(|a| a.is_interesting())
        .map(|a| a.concept.label.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_by_score() {
        let annotations = vec![
            Annotation::new("ice cream", 0.9),
            Annotation::new("summer", 0.7),
            Annotation::new("rain", 0.3),
        ];

        assert_eq!(interesting_concepts(&annotations), vec!["ice cream", "summer"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let annotations = vec![
            Annotation::new("whale", 0.95),
            Annotation::new("whale", 0.8),
            Annotation::new("whale", 0.2),
        ];

        assert_eq!(interesting_concepts(&annotations), vec!["whale"]);
    }

    #[test]
    fn test_nothing_interesting() {
        assert!(interesting_concepts(&[Annotation::new("rain", 0.615)]).is_empty());
        assert!(interesting_concepts(&[]).is_empty());
    }
}
