use chrono::{DateTime, SecondsFormat, Utc};
use essensys_core::{AppError, AppResult};
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Formats a timestamp as RFC 3339 with its full sub-second precision.
///
/// Clients echo `updated_at` back as `expected_updated_at`, so the rendering
/// must round-trip exactly.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an optional `expected_updated_at` precondition.
pub fn parse_expected_updated_at(value: Option<&str>) -> AppResult<Option<DateTime<Utc>>> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            DateTime::parse_from_rfc3339(value)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|error| {
                    AppError::Validation(format!(
                        "invalid expected_updated_at '{value}': {error}"
                    ))
                })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use essensys_core::AppError;

    use super::{format_timestamp, parse_expected_updated_at};

    #[test]
    fn formatted_timestamps_parse_back_to_the_same_instant() {
        let instant = Utc
            .timestamp_opt(1_760_000_000, 123_456_000)
            .single()
            .unwrap_or_else(|| unreachable!());

        let rendered = format_timestamp(instant);
        let parsed = parse_expected_updated_at(Some(rendered.as_str()));

        assert_eq!(parsed.ok().flatten(), Some(instant));
    }

    #[test]
    fn blank_precondition_is_absent() {
        assert!(matches!(parse_expected_updated_at(Some("  ")), Ok(None)));
        assert!(matches!(parse_expected_updated_at(None), Ok(None)));
    }

    #[test]
    fn malformed_precondition_is_a_validation_error() {
        assert!(matches!(
            parse_expected_updated_at(Some("yesterday")),
            Err(AppError::Validation(_))
        ));
    }
}
