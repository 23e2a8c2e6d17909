/*!
This module turns the tallies produced by the scorer into a scorecard, the
human-readable summary of the run. The scorecard always reports the same
three categories in the same order, whether or not any example fell into
them.
*/
use crate::annotation::Gender;
use crate::metrics::Tally;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// The categories of the scorecard, in display order.
const DISPLAY_CATEGORIES: [(Option<Gender>, &str); 3] = [
    (None, "Overall"),
    (Some(Gender::Masculine), "Masculine"),
    (Some(Gender::Feminine), "Feminine"),
];

/// Derived metrics and raw tally of one scorecard category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    /// The display name of the category: `Overall`, `Masculine` or
    /// `Feminine`.
    pub category: String,
    /// Recall metric, on the 0-100 scale.
    pub recall: f32,
    /// Precision metric, on the 0-100 scale.
    pub precision: f32,
    /// F1 metric, on the 0-100 scale.
    pub f1: f32,
    /// The confusion counts the metrics were derived from.
    pub tally: Tally,
}

/// The scorecard holds the metrics of the three reported categories and the
/// bias ratio of the run. It can be used to display the results (i.e.
/// prettyprint them) or be consumed through its accessors. The scorecard can
/// be built with the `score_files` function or directly from a map of
/// tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    categories: Vec<CategoryMetrics>,
    bias: Option<f32>,
}

impl Scorecard {
    /// Derives the scorecard of the given scores. Categories missing from
    /// the map are reported with empty tallies. The bias ratio divides the
    /// feminine F1 by the masculine F1 and is absent whenever either of the
    /// two is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gapeval::{Gender, Scorecard, Tally};
    /// use std::collections::BTreeMap;
    ///
    /// let tally = Tally {
    ///     true_positives: 1,
    ///     true_negatives: 1,
    ///     ..Tally::default()
    /// };
    /// let mut scores = BTreeMap::new();
    /// scores.insert(None, tally);
    /// scores.insert(Some(Gender::Feminine), tally);
    ///
    /// let scorecard = Scorecard::from_scores(&scores);
    ///
    /// let expected = concat!(
    ///     "Overall recall: 100.0 precision: 100.0 f1: 100.0\n",
    ///     "\t\ttp 1\tfp 0\n",
    ///     "\t\tfn 0\ttn 1\n",
    ///     "Masculine recall: 0.0 precision: 0.0 f1: 0.0\n",
    ///     "\t\ttp 0\tfp 0\n",
    ///     "\t\tfn 0\ttn 0\n",
    ///     "Feminine recall: 100.0 precision: 100.0 f1: 100.0\n",
    ///     "\t\ttp 1\tfp 0\n",
    ///     "\t\tfn 0\ttn 1\n",
    ///     "Bias (F/M): -\n",
    /// );
    /// assert_eq!(expected, scorecard.to_string());
    /// ```
    pub fn from_scores(scores: &BTreeMap<Option<Gender>, Tally>) -> Self {
        let categories = DISPLAY_CATEGORIES
            .iter()
            .map(|(scope, display_name)| {
                let tally = scores.get(scope).copied().unwrap_or_default();
                CategoryMetrics {
                    category: display_name.to_string(),
                    recall: tally.recall(),
                    precision: tally.precision(),
                    f1: tally.f1(),
                    tally,
                }
            })
            .collect();

        let f1_of = |gender| {
            scores
                .get(&Some(gender))
                .copied()
                .unwrap_or_default()
                .f1()
        };
        let masculine_f1 = f1_of(Gender::Masculine);
        let feminine_f1 = f1_of(Gender::Feminine);
        let bias = if masculine_f1 != 0.0 && feminine_f1 != 0.0 {
            Some(feminine_f1 / masculine_f1)
        } else {
            None
        };

        Scorecard { categories, bias }
    }

    /// The metrics of the reported categories, in display order.
    pub fn categories(&self) -> &[CategoryMetrics] {
        &self.categories
    }

    /// Ratio of the feminine F1 to the masculine F1, or `None` when either
    /// F1 is zero.
    pub fn bias(&self) -> Option<f32> {
        self.bias
    }
}

impl Display for Scorecard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for metrics in &self.categories {
            writeln!(
                f,
                "{} recall: {:.1} precision: {:.1} f1: {:.1}",
                metrics.category, metrics.recall, metrics.precision, metrics.f1
            )?;
            writeln!(
                f,
                "\t\ttp {}\tfp {}",
                metrics.tally.true_positives, metrics.tally.false_positives
            )?;
            writeln!(
                f,
                "\t\tfn {}\ttn {}",
                metrics.tally.false_negatives, metrics.tally.true_negatives
            )?;
        }
        match self.bias {
            Some(bias) => writeln!(f, "Bias (F/M): {:.2}", bias),
            None => writeln!(f, "Bias (F/M): -"),
        }
    }
}
