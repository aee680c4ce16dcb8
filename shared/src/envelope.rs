use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::ApiError;

/// The `{ success, data, error }` wrapper every backend response uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `false` means `error` explains why.
    #[serde(default)]
    pub success: bool,
    /// Payload; `null` or absent for writes that return nothing.
    pub data: Option<T>,
    /// Backend-provided failure text.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Turn the envelope into its payload, or the backend's error text.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(self.error.unwrap_or_default()))
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a raw HTTP response into the envelope payload.
///
/// A parseable envelope always wins over the status code, so a `400` carrying
/// `{"success":false,"error":"..."}` surfaces the backend text rather than a
/// bare status. An empty 2xx body (e.g. `204` after a delete) is a success
/// without data.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return if is_success(status) {
            Ok(None)
        } else {
            Err(ApiError::Http {
                status,
            })
        };
    }

    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) if envelope.success && !is_success(status) => Err(ApiError::Http {
            status,
        }),
        Ok(envelope) => {
            let result = envelope.into_result();
            if let Err(err) = &result {
                tracing::warn!(status, error = %err, "backend rejected request");
            }
            result
        },
        Err(_) if !is_success(status) => Err(ApiError::Http {
            status,
        }),
        Err(err) => Err(ApiError::Decode(err.to_string())),
    }
}

/// Same as [`decode_envelope`] but a missing `data` is an error.
pub fn decode_required<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode_envelope(status, body)?
        .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let data: Option<Vec<u32>> =
            decode_envelope(200, r#"{"success":true,"data":[1,2,3]}"#).expect("decode");
        assert_eq!(data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn null_data_is_none_not_error() {
        let data: Option<Vec<u32>> =
            decode_envelope(200, r#"{"success":true,"data":null}"#).expect("decode");
        assert_eq!(data, None);
    }

    #[test]
    fn failure_envelope_surfaces_backend_text_even_on_4xx() {
        let err = decode_envelope::<Value>(400, r#"{"success":false,"error":"Title is required"}"#)
            .expect_err("must fail");
        assert_eq!(err, ApiError::Rejected("Title is required".to_string()));
    }

    #[test]
    fn failure_envelope_on_2xx_is_still_an_error() {
        let err = decode_envelope::<Value>(200, r#"{"success":false}"#).expect_err("must fail");
        assert_eq!(err.user_message(), "Unknown error");
    }

    #[test]
    fn non_envelope_error_page_maps_to_http_status() {
        let err = decode_envelope::<Value>(502, "<html>Bad gateway</html>").expect_err("must fail");
        assert_eq!(
            err,
            ApiError::Http {
                status: 502
            }
        );
    }

    #[test]
    fn garbage_on_2xx_is_a_decode_error() {
        let err = decode_envelope::<Value>(200, "not json").expect_err("must fail");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn empty_no_content_is_success() {
        let data = decode_envelope::<Value>(204, "").expect("decode");
        assert!(data.is_none());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Acknowledged {
        id: String,
    }

    #[test]
    fn absent_data_decodes_for_payloads_without_default() {
        let data = decode_envelope::<Acknowledged>(200, r#"{"success":true}"#).expect("decode");
        assert_eq!(data, None);
        let data = decode_envelope::<Acknowledged>(201, r#"{"success":true,"data":{"id":"7"}}"#)
            .expect("decode");
        assert_eq!(
            data,
            Some(Acknowledged {
                id: "7".to_string()
            })
        );
    }

    #[test]
    fn required_data_must_be_present() {
        let err = decode_required::<Value>(200, r#"{"success":true}"#).expect_err("must fail");
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
