use chrono::NaiveDateTime;

pub fn get_rapidapi_key() -> Result<String, String> {
    std::env::var("RAPIDAPI_KEY").map_err(|e| e.to_string())
}

pub fn get_rapidapi_host() -> String {
    std::env::var("RAPIDAPI_HOST")
        .unwrap_or_else(|_| "linkedin-data-api.p.rapidapi.com".to_string())
}

/// Parses the fixed-width prefix of an upstream `postedDate` value.
/// The upstream appends a timezone suffix after the 19-character timestamp.
pub fn parse_posted_date(raw: &str) -> Option<NaiveDateTime> {
    let prefix = raw.get(..19)?;
    NaiveDateTime::parse_from_str(prefix, "%Y-%m-%d %H:%M:%S").ok()
}
