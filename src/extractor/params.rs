use super::ParamExtractor;
use crate::sequence::ParamSequence;

/// Splits on `/` and drops empty segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultParamExtractor;

impl ParamExtractor for DefaultParamExtractor {
    fn extract_params(&self, pathname: &str) -> ParamSequence {
        let mut params = ParamSequence::new();
        for segment in pathname.split('/').filter(|segment| !segment.is_empty()) {
            params.push(segment);
        }
        params
    }
}
