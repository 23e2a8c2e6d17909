/*!
This library scores system output for the GAP challenge. GAP is a
gender-balanced coreference corpus of ambiguous pronouns sampled from
Wikipedia: each example pairs a target pronoun with two names, A and B, and
annotates whether each name is coreferential with that pronoun.

# ANNOTATION FILES
Annotations are exchanged as tab-delimited files of one example per line.
* Gold files carry eleven columns (ID, text, pronoun, the two names and
    their offsets, the two coreference labels and a source URL). The first
    line is a header and is skipped. The pronoun determines the gender of
    each example.
* System files carry three columns: the example ID and the two coreference
    labels. All lines are read.

Coreference labels are case-insensitive `TRUE`/`FALSE` values. Anything else
is logged and treated as an absent judgment.

# SCORECARD
Every name judgment is classified against gold as a true/false
positive/negative and tallied twice, once overall and once under the gender
of its example. The scorecard reports recall, precision and F1 (on the 0-100
scale) with the raw counts for the Overall, Masculine and Feminine
categories, followed by the bias ratio: the feminine F1 divided by the
masculine F1, or a `-` placeholder when either is zero.

## More information about GAP
* [Dataset](https://github.com/google-research-datasets/gap-coreference)
* [Article](https://arxiv.org/abs/1810.05201)
*/

mod annotation;
mod metrics;
mod reporter;
mod scorer;

// The public api starts here
pub use annotation::{
    read_annotations, Annotation, AnnotationMap, AnnotationSource, Gender, ReadError,
    UnknownPronounError, GOLD_FIELDNAMES, SYSTEM_FIELDNAMES,
};

pub use metrics::Tally;

pub use reporter::{CategoryMetrics, Scorecard};

pub use scorer::{calculate_scores, classify, Outcome};

use std::error::Error;
use std::fmt::Display;
use std::path::Path;

/// Enum error encompassing the failures of a scoring run. Both variants
/// carry the side of the run (gold or system) they occurred on.
#[derive(Debug)]
pub enum ScoreError {
    /// One of the two annotation files could not be read.
    Read(AnnotationSource, ReadError),
    /// One of the two annotation files contained no examples.
    EmptyAnnotations(AnnotationSource),
}

impl Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(source, read_err) => {
                write!(f, "could not read the {} annotations: {}", source, read_err)
            }
            Self::EmptyAnnotations(source) => write!(f, "No {} annotations read!", source),
        }
    }
}
impl Error for ScoreError {}

/// Main entrypoint of the gapeval library. This function reads the gold and
/// system annotation files, scores the system judgments against gold and
/// returns the scorecard of the run. The returned structure can be used to
/// prettyprint the results or be consumed through its accessors.
///
/// * `gold_tsv`: Path to the gold annotations to score against.
/// * `system_tsv`: Path to the system output to score.
///
/// # Example
/// ```rust
/// use gapeval::score_files;
/// use std::path::Path;
///
/// let scorecard = score_files(
///     Path::new("tests/data/gold_single_feminine.tsv"),
///     Path::new("tests/data/system_single_feminine.tsv"),
/// )
/// .unwrap();
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
pub fn score_files(gold_tsv: &Path, system_tsv: &Path) -> Result<Scorecard, ScoreError> {
    let gold_annotations = read_annotations(gold_tsv, AnnotationSource::Gold)
        .map_err(|read_err| ScoreError::Read(AnnotationSource::Gold, read_err))?;
    if gold_annotations.is_empty() {
        return Err(ScoreError::EmptyAnnotations(AnnotationSource::Gold));
    }

    let system_annotations = read_annotations(system_tsv, AnnotationSource::System)
        .map_err(|read_err| ScoreError::Read(AnnotationSource::System, read_err))?;
    if system_annotations.is_empty() {
        return Err(ScoreError::EmptyAnnotations(AnnotationSource::System));
    }

    let scores = calculate_scores(&gold_annotations, &system_annotations);
    Ok(Scorecard::from_scores(&scores))
}
