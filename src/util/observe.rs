//! Observation sinks for fetch outcomes.
//!
//! DESIGN
//! ======
//! Views report each settled fetch through `ObservationSink` instead of
//! writing to the console directly, so tests can record entries while the
//! browser build routes them to `console_log` via the `log` facade.
//! Both outcomes render their body as JSON: the payload on success, the
//! tagged `FetchError` on failure.

use log::Level;

use crate::state::protected::ProtectedResourceResult;

pub const SUCCESS_LABEL: &str = "Success";
pub const ERROR_LABEL: &str = "Error Fetching data";

/// Destination for one entry per settled fetch.
pub trait ObservationSink {
    fn observe(&self, result: &ProtectedResourceResult);
}

/// Render the diagnostic line for a fetch outcome.
pub fn observation_line(result: &ProtectedResourceResult) -> String {
    match result {
        ProtectedResourceResult::Success(payload) => format!("{SUCCESS_LABEL}: {payload}"),
        ProtectedResourceResult::Failure(err) => {
            let cause = serde_json::to_string(err).unwrap_or_else(|_| err.to_string());
            format!("{ERROR_LABEL}: {cause}")
        }
    }
}

/// Log level for a fetch outcome: info on success, error on failure.
pub fn observation_level(result: &ProtectedResourceResult) -> Level {
    if result.is_success() { Level::Info } else { Level::Error }
}

/// Sink that writes through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ObservationSink for LogSink {
    fn observe(&self, result: &ProtectedResourceResult) {
        log::log!(observation_level(result), "{}", observation_line(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::error::FetchError;

    #[test]
    fn success_line_embeds_payload_json() {
        let result = ProtectedResourceResult::Success(serde_json::json!({ "id": 1 }));
        assert_eq!(observation_line(&result), r#"Success: {"id":1}"#);
    }

    #[test]
    fn failure_line_embeds_tagged_cause() {
        let result = ProtectedResourceResult::Failure(FetchError::Authorization {
            status: 401,
            message: "Unauthorized".to_owned(),
        });
        assert_eq!(
            observation_line(&result),
            r#"Error Fetching data: {"kind":"authorization","status":401,"message":"Unauthorized"}"#
        );
    }

    #[test]
    fn success_logs_at_info() {
        let result = ProtectedResourceResult::Success(serde_json::Value::Null);
        assert_eq!(observation_level(&result), Level::Info);
    }

    #[test]
    fn every_failure_logs_at_error() {
        let failures = [
            FetchError::transport("offline"),
            FetchError::Authorization { status: 403, message: "Forbidden".to_owned() },
            FetchError::Server { status: 500, message: String::new() },
            FetchError::decoding("eof"),
        ];
        for failure in failures {
            assert_eq!(observation_level(&ProtectedResourceResult::Failure(failure)), Level::Error);
        }
    }
}
