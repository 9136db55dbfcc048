use super::error::GatewayError;

/// An action becomes one path segment of `POST {api_base}/{action}`.
pub fn validate_action(action: &str) -> Result<(), GatewayError> {
    if action.trim().is_empty() {
        return Err(GatewayError::invalid_action(
            "Action cannot be empty or whitespace only",
        ));
    }
    if action.contains(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '-') {
        return Err(GatewayError::invalid_action(format!(
            "'{action}' can only contain alphanumeric characters, underscores, and hyphens"
        )));
    }
    Ok(())
}
