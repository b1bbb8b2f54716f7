use crate::error::GenerationError;

/// Slice from the first `{` to the last `}`, inclusive.
///
/// No repair is attempted; the slice may still fail to parse.
pub fn extract_json_candidate(raw: &str) -> Result<&str, GenerationError> {
    let start = raw
        .find('{')
        .ok_or_else(|| GenerationError::Extraction("no '{' in completion output".to_string()))?;
    let end = raw
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| {
            GenerationError::Extraction("no closing '}' after the first '{'".to_string())
        })?;
    Ok(&raw[start..=end])
}
