//! IAM error types.
//!
//! IAM uses the awsQuery protocol: errors are reported as an XML `<Error>`
//! element with `<Code>` and an optional `<Message>`.

use std::fmt;

/// Well-known IAM error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum IamErrorCode {
    /// The referenced entity does not exist.
    NoSuchEntity,
    /// An entity with the same name already exists.
    EntityAlreadyExists,
    /// A rename collides with an existing entity.
    Conflict,
    /// The entity is still referenced and cannot be deleted.
    DeleteConflict,
    /// A parameter failed validation.
    ValidationError,
    /// A parameter is syntactically invalid.
    InvalidInput,
    /// The policy document could not be parsed.
    MalformedPolicyDocument,
    /// An account quota would be exceeded.
    LimitExceeded,
    /// Unexpected failure inside the emulator.
    #[default]
    ServiceFailure,
    /// A legacy error that carries its entire text in the code slot and no
    /// message. Group creation conflicts are reported this way.
    Legacy(String),
}

impl IamErrorCode {
    /// Returns the error code string as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoSuchEntity => "NoSuchEntity",
            Self::EntityAlreadyExists => "EntityAlreadyExists",
            Self::Conflict => "Conflict",
            Self::DeleteConflict => "DeleteConflict",
            Self::ValidationError => "ValidationError",
            Self::InvalidInput => "InvalidInput",
            Self::MalformedPolicyDocument => "MalformedPolicyDocument",
            Self::LimitExceeded => "LimitExceeded",
            Self::ServiceFailure => "ServiceFailure",
            Self::Legacy(text) => text,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::NoSuchEntity => http::StatusCode::NOT_FOUND,
            Self::EntityAlreadyExists
            | Self::Conflict
            | Self::DeleteConflict
            | Self::LimitExceeded
            | Self::Legacy(_) => http::StatusCode::CONFLICT,
            Self::ValidationError | Self::InvalidInput | Self::MalformedPolicyDocument => {
                http::StatusCode::BAD_REQUEST
            }
            Self::ServiceFailure => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for IamErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An IAM error response.
#[derive(Debug)]
pub struct IamError {
    /// The error code.
    pub code: IamErrorCode,
    /// A human-readable error message. Absent for legacy errors.
    pub message: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for IamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message {
            Some(ref message) => write!(f, "IamError({}): {message}", self.code),
            None => write!(f, "IamError({})", self.code),
        }
    }
}

impl std::error::Error for IamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl IamError {
    /// Create a new error from an error code, without a message.
    #[must_use]
    pub fn new(code: IamErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: None,
            code,
            source: None,
        }
    }

    /// Create a new error with a custom message.
    #[must_use]
    pub fn with_message(code: IamErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: Some(message.into()),
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

    /// The `<Code>` a transport layer must emit.
    #[must_use]
    pub fn wire_code(&self) -> &str {
        self.code.as_str()
    }

    /// The `<Message>` a transport layer must emit, if any.
    #[must_use]
    pub fn wire_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // -- Convenience constructors --

    /// Generic missing-entity error.
    #[must_use]
    pub fn no_such_entity(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::NoSuchEntity, message)
    }

    /// The group does not exist (lookups and membership changes).
    #[must_use]
    pub fn group_not_found(group_name: &str) -> Self {
        Self::no_such_entity(format!("Group {group_name} not found"))
    }

    /// The group does not exist (update and delete).
    #[must_use]
    pub fn group_cannot_be_found(group_name: &str) -> Self {
        Self::no_such_entity(format!(
            "The group with name {group_name} cannot be found."
        ))
    }

    /// The user does not exist.
    #[must_use]
    pub fn user_not_found(user_name: &str) -> Self {
        Self::no_such_entity(format!("The user with name {user_name} cannot be found."))
    }

    /// The inline policy does not exist on its owner.
    #[must_use]
    pub fn inline_policy_not_found(policy_name: &str) -> Self {
        Self::no_such_entity(format!("Policy {policy_name} not found"))
    }

    /// The managed policy does not exist or is not attached.
    #[must_use]
    pub fn policy_not_found(policy_arn: &str) -> Self {
        Self::no_such_entity(format!("Policy {policy_arn} was not found."))
    }

    /// Group creation conflict, reported the legacy way.
    #[must_use]
    pub fn group_already_exists(group_name: &str) -> Self {
        Self::new(IamErrorCode::Legacy(format!(
            "Group {group_name} already exists"
        )))
    }

    /// Entity already exists.
    #[must_use]
    pub fn entity_already_exists(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::EntityAlreadyExists, message)
    }

    /// Rename conflict.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::Conflict, message)
    }

    /// Entity is still referenced.
    #[must_use]
    pub fn delete_conflict(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::DeleteConflict, message)
    }

    /// Parameter validation failure.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::ValidationError, message)
    }

    /// Syntactically invalid input.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::InvalidInput, message)
    }

    /// Unparseable policy document.
    #[must_use]
    pub fn malformed_policy_document(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::MalformedPolicyDocument, message)
    }

    /// Quota exceeded.
    #[must_use]
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::LimitExceeded, message)
    }

    /// Internal error.
    #[must_use]
    pub fn service_failure(message: impl Into<String>) -> Self {
        Self::with_message(IamErrorCode::ServiceFailure, message)
    }
}

/// Create an `IamError` from an error code.
///
/// # Examples
///
/// ```
/// use mockstack_iam_model::iam_error;
/// use mockstack_iam_model::error::IamErrorCode;
///
/// let err = iam_error!(ServiceFailure);
/// assert_eq!(err.code, IamErrorCode::ServiceFailure);
/// assert!(err.message.is_none());
///
/// let err = iam_error!(NoSuchEntity, "Group g not found");
/// assert_eq!(err.wire_message(), Some("Group g not found"));
/// ```
#[macro_export]
macro_rules! iam_error {
    ($code:ident) => {
        $crate::error::IamError::new($crate::error::IamErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::IamError::with_message($crate::error::IamErrorCode::$code, $msg)
    };
}
