//! Error types for the BCRA statistics client.

use chrono::NaiveDate;
use thiserror::Error;

use crate::series::InvalidDate;

/// Error type for BCRA monetary-series and exchange-rate requests.
#[derive(Debug, Error)]
pub enum BcraError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A date input did not parse as `YYYY-MM-DD`
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),

    /// Non-2xx response, with any server-supplied messages
    #[error("BCRA replied {status}: {}", .messages.join("; "))]
    Remote {
        /// HTTP status code
        status: u16,
        /// Messages from the response's `errorMessages` field, or the raw body
        messages: Vec<String>,
    },

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// The range returned no records at all — distinct from a transport error
    #[error("no data for variable {variable_id} between {start} and {end}")]
    NoData {
        /// The requested series id
        variable_id: u32,
        /// Window start
        start: NaiveDate,
        /// Window end
        end: NaiveDate,
    },
}

/// Result type alias for BCRA operations.
pub type BcraResult<T> = Result<T, BcraError>;

/// Error body format of the BCRA APIs.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    /// Server-supplied error messages
    #[serde(default, rename = "errorMessages")]
    pub error_messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_deserialize() {
        let json = r#"{"status": 400, "errorMessages": ["Fecha desde no válida"]}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error_messages, vec!["Fecha desde no válida"]);
    }

    #[test]
    fn test_error_body_tolerates_missing_messages() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error_messages.is_empty());
    }

    #[test]
    fn test_remote_error_display() {
        let err = BcraError::Remote {
            status: 404,
            messages: vec!["no existe".to_string(), "idVariable".to_string()],
        };
        assert_eq!(err.to_string(), "BCRA replied 404: no existe; idVariable");
    }
}
