use crate::errors::ArgumentError;
use crate::guard::Argument;
use base64::{Engine as _, engine::general_purpose};

/// Standard alphabet with `=` padding over the UTF-8 bytes of `text`.
pub(super) fn encode<'a>(text: impl Into<Option<&'a str>>) -> Result<String, ArgumentError> {
    let text = Argument::require_not_null(text.into(), "text", None)?;
    Ok(general_purpose::STANDARD.encode(text.as_bytes()))
}

/// Spaces, tabs and line breaks are skipped, so wrapped input decodes.
/// Decoded bytes that are not valid UTF-8 are replaced with U+FFFD.
pub(super) fn decode<'a>(encoded: impl Into<Option<&'a str>>) -> Result<String, ArgumentError> {
    let encoded = Argument::require_not_null(encoded.into(), "encoded", None)?;

    let compact: String = encoded
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .collect();

    let bytes = general_purpose::STANDARD.decode(compact).map_err(|e| {
        log::debug!("Rejected base64 input: {e}");
        ArgumentError::invalid_format("encoded", format!("Invalid base64: {e}"))
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
