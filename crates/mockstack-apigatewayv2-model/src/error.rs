//! API Gateway v2 error types.
//!
//! API Gateway v2 reports the error code in the `x-amzn-ErrorType` header and
//! a JSON body carrying `message`.

use std::fmt;

/// Well-known API Gateway v2 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiGatewayV2ErrorCode {
    /// A required parameter is missing or a value is invalid.
    #[default]
    BadRequestException,
    /// The referenced resource does not exist.
    NotFoundException,
    /// The request conflicts with the current resource state.
    ConflictException,
    /// Unexpected failure inside the emulator.
    InternalServerError,
}

impl ApiGatewayV2ErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequestException => "BadRequestException",
            Self::NotFoundException => "NotFoundException",
            Self::ConflictException => "ConflictException",
            Self::InternalServerError => "InternalServerError",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::BadRequestException => http::StatusCode::BAD_REQUEST,
            Self::NotFoundException => http::StatusCode::NOT_FOUND,
            Self::ConflictException => http::StatusCode::CONFLICT,
            Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiGatewayV2ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API Gateway v2 error response.
#[derive(Debug)]
pub struct ApiGatewayV2Error {
    /// The error code.
    pub code: ApiGatewayV2ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for ApiGatewayV2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiGatewayV2Error({}): {}", self.code, self.message)
    }
}

impl std::error::Error for ApiGatewayV2Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl ApiGatewayV2Error {
    /// Create a new error from an error code.
    #[must_use]
    pub fn new(code: ApiGatewayV2ErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new error with a custom message.
    #[must_use]
    pub fn with_message(code: ApiGatewayV2ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Missing or invalid parameter.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(ApiGatewayV2ErrorCode::BadRequestException, message)
    }

    /// Generic not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ApiGatewayV2ErrorCode::NotFoundException, message)
    }

    /// The API does not exist.
    #[must_use]
    pub fn api_not_found(api_id: &str) -> Self {
        Self::not_found(format!("Invalid API identifier specified {api_id}"))
    }

    /// The authorizer does not exist.
    #[must_use]
    pub fn authorizer_not_found(authorizer_id: &str) -> Self {
        Self::not_found(format!(
            "Invalid Authorizer identifier specified {authorizer_id}"
        ))
    }

    /// Conflicting state.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(ApiGatewayV2ErrorCode::ConflictException, message)
    }

    /// Internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(ApiGatewayV2ErrorCode::InternalServerError, message)
    }
}

/// Create an `ApiGatewayV2Error` from an error code.
///
/// # Examples
///
/// ```
/// use mockstack_apigatewayv2_model::apigatewayv2_error;
/// use mockstack_apigatewayv2_model::error::ApiGatewayV2ErrorCode;
///
/// let err = apigatewayv2_error!(NotFoundException);
/// assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);
///
/// let err = apigatewayv2_error!(BadRequestException, "Name is a required parameter");
/// assert_eq!(err.message, "Name is a required parameter");
/// ```
#[macro_export]
macro_rules! apigatewayv2_error {
    ($code:ident) => {
        $crate::error::ApiGatewayV2Error::new($crate::error::ApiGatewayV2ErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::ApiGatewayV2Error::with_message(
            $crate::error::ApiGatewayV2ErrorCode::$code,
            $msg,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_codes_to_status() {
        assert_eq!(
            ApiGatewayV2Error::api_not_found("abc").status_code,
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiGatewayV2Error::bad_request("x").status_code,
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_format_not_found_messages() {
        let err = ApiGatewayV2Error::authorizer_not_found("unknown");
        assert_eq!(err.code.as_str(), "NotFoundException");
        assert_eq!(err.message, "Invalid Authorizer identifier specified unknown");
        assert_eq!(
            err.to_string(),
            "ApiGatewayV2Error(NotFoundException): Invalid Authorizer identifier specified unknown"
        );
    }
}
