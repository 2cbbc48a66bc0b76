//! Word segmentation command

use crate::error::WordleError;
use crate::segment::Segmenter;
use serde::{Deserialize, Serialize};

/// Segmentation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentResult {
    pub segmented: Vec<String>,
}

/// Split `text` with the given segmenter
///
/// # Errors
///
/// Returns `WordleError::EmptyInput` if the text is blank.
pub fn run_wordseg<S: Segmenter + ?Sized>(
    segmenter: &S,
    text: &str,
) -> Result<SegmentResult, WordleError> {
    let segmented = segmenter.segment(text)?;
    Ok(SegmentResult { segmented })
}
