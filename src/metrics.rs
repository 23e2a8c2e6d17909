/*!
This module holds the confusion tally of a scored category and the metrics
derived from it. All metrics live on the 0-100 scale and degrade to 0.0 when
their denominator is zero.
*/
use crate::scorer::Outcome;
use serde::{Deserialize, Serialize};

/// Confusion counts of the coreference judgments of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl Tally {
    /// Adds one judgment outcome to the tally.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.true_positives += 1,
            Outcome::FalsePositive => self.false_positives += 1,
            Outcome::TrueNegative => self.true_negatives += 1,
            Outcome::FalseNegative => self.false_negatives += 1,
        }
    }

    /// Recall of the tally, as a percentage.
    pub fn recall(&self) -> f32 {
        let denominator = self.true_positives + self.false_negatives;
        if denominator == 0 {
            return 0.0;
        }
        100.0 * self.true_positives as f32 / denominator as f32
    }

    /// Precision of the tally, as a percentage.
    pub fn precision(&self) -> f32 {
        let denominator = self.true_positives + self.false_positives;
        if denominator == 0 {
            return 0.0;
        }
        100.0 * self.true_positives as f32 / denominator as f32
    }

    /// Harmonic mean of recall and precision, as a percentage.
    pub fn f1(&self) -> f32 {
        let recall = self.recall();
        let precision = self.precision();
        let denominator = precision + recall;
        if denominator == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / denominator
    }
}
