use crate::errors::AppError;
use crate::recording::RecordingConfiguration;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Base64 of the configuration's JSON form, suitable for a link parameter.
pub fn encode_share_token(configuration: &RecordingConfiguration) -> Result<String, AppError> {
    let json = serde_json::to_string(configuration)?;
    Ok(STANDARD.encode(json))
}

pub fn decode_share_token(token: &str) -> Result<RecordingConfiguration, AppError> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|e| AppError::Share(format!("token is not valid base64: {}", e)))?;
    let json = String::from_utf8(bytes).map_err(|e| AppError::Share(format!("token is not UTF-8: {}", e)))?;
    let configuration: RecordingConfiguration = serde_json::from_str(&json)
        .map_err(|e| AppError::Share(format!("token does not hold a recording configuration: {}", e)))?;
    configuration.validate()?;
    Ok(configuration)
}
