use crate::model::Season;

/// # Errors
///
/// Will return `Err` if the season is not `YYYY-YY`
pub fn check_season(raw: &str) -> Result<Season, String> {
    Season::parse(raw).map_err(|e| e.to_string())
}

/// # Errors
///
/// Will return `Err` if the url is not http or https
pub fn check_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!("'{raw}' must start with http:// or https://"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// # Errors
///
/// Will return `Err` if the timeout is not a positive number of seconds
pub fn check_timeout(raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err("timeout must be at least one second".to_string()),
        Ok(secs) => Ok(secs),
        Err(e) => Err(format!("'{raw}' is not a number of seconds: {e}")),
    }
}
