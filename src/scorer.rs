/*!
This module classifies the paired gold and system judgments of each example
and aggregates them into per-gender and overall tallies.
*/
use crate::annotation::{AnnotationMap, Gender};
use crate::metrics::Tally;
use log::warn;
use std::collections::BTreeMap;

/// Confusion bucket of a single coreference judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    TrueNegative,
    FalseNegative,
}

/// Classifies one name's judgment. An absent system judgment counts against
/// recall regardless of gold.
pub fn classify(gold: bool, system: Option<bool>) -> Outcome {
    match (gold, system) {
        (_, None) => Outcome::FalseNegative,
        (true, Some(true)) => Outcome::TruePositive,
        (false, Some(true)) => Outcome::FalsePositive,
        (false, Some(false)) => Outcome::TrueNegative,
        (true, Some(false)) => Outcome::FalseNegative,
    }
}

/// Scores the system annotations against gold.
///
/// Returns a map from gender to the tally of that gender's judgments. The
/// `None` key holds the overall tally, so every judgment is counted twice:
/// once overall and once under the gold gender of its example. Examples
/// absent from the system annotations are scored as if both judgments were
/// missing.
pub fn calculate_scores(
    gold_annotations: &AnnotationMap,
    system_annotations: &AnnotationMap,
) -> BTreeMap<Option<Gender>, Tally> {
    let mut scores = BTreeMap::new();
    for (example_id, gold_annotation) in gold_annotations {
        let system_annotation = system_annotations
            .get(example_id)
            .copied()
            .unwrap_or_default();

        let judgments = [
            (gold_annotation.name_a_coref, system_annotation.name_a_coref),
            (gold_annotation.name_b_coref, system_annotation.name_b_coref),
        ];
        let outcomes = judgments.map(|(gold, system)| {
            if system.is_none() {
                warn!("Missing output for {}", example_id);
            }
            // A gold judgment should never be absent, but an unparseable
            // label degrades to a negative one rather than stopping the run.
            classify(gold.unwrap_or(false), system)
        });

        for scope in [None, Some(gold_annotation.gender)] {
            let tally: &mut Tally = scores.entry(scope).or_default();
            for outcome in outcomes {
                tally.record(outcome);
            }
        }
    }
    scores
}
