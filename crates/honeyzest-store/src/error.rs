//! # Store Error Type
//!
//! Errors returned by store operations, plus the serializable report views
//! show to shoppers and admins.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  View calls store.place_order()                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  No session?      ── StoreError::NotAuthenticated ──┐                  │
//! │  Nothing priced?  ── StoreError::EmptyCart ─────────┤                  │
//! │  Bad input?       ── CoreError::Validation ─────────┤                  │
//! │         │                                           ▼                   │
//! │         ▼                                  ErrorReport { code, msg }    │
//! │  Ok(order)                                          │                   │
//! │                                                     ▼                   │
//! │                                             toast in the view           │
//! │                                                                         │
//! │  Every Err leaves the store exactly as it was.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use honeyzest_core::{CoreError, UserId, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No account matches the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The operation needs a signed-in user.
    #[error("Please login to continue")]
    NotAuthenticated,

    /// The signed-in user lacks the role the operation needs.
    #[error("Administrator privileges required to {action}")]
    Forbidden { action: &'static str },

    /// Administrator accounts cannot be removed.
    #[error("User {0} is an administrator and cannot be deleted")]
    AdminProtected(UserId),

    /// Checkout with nothing (or nothing resolvable) in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Every `ORD-nnnn` number is taken.
    #[error("No order numbers left")]
    OrderIdsExhausted,

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Machine-readable error codes for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    Unauthenticated,
    Forbidden,
    CartError,
    Internal,
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::InvalidCredentials | StoreError::NotAuthenticated => {
                ErrorCode::Unauthenticated
            }
            StoreError::Forbidden { .. } | StoreError::AdminProtected(_) => ErrorCode::Forbidden,
            StoreError::EmptyCart => ErrorCode::CartError,
            StoreError::OrderIdsExhausted => ErrorCode::Internal,
            StoreError::Core(core) => match core {
                CoreError::ProductNotFound(_)
                | CoreError::BlogNotFound(_)
                | CoreError::UserNotFound(_)
                | CoreError::OrderNotFound(_)
                | CoreError::ReviewNotFound { .. }
                | CoreError::CommentNotFound { .. }
                | CoreError::NotificationNotFound(_)
                | CoreError::FaqNotFound(_) => ErrorCode::NotFound,
                CoreError::QuantityTooLarge { .. } => ErrorCode::CartError,
                CoreError::UnknownCurrency(_)
                | CoreError::UnknownLanguage(_)
                | CoreError::UnknownTheme(_)
                | CoreError::UnknownCategory(_)
                | CoreError::AmountOverflow
                | CoreError::Validation(_) => ErrorCode::ValidationError,
            },
        }
    }
}

/// What a view receives when an operation fails.
///
/// ```json
/// { "code": "CART_ERROR", "message": "Your cart is empty" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&StoreError> for ErrorReport {
    fn from(err: &StoreError) -> Self {
        ErrorReport {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ErrorReport {
    fn from(err: StoreError) -> Self {
        ErrorReport::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeyzest_core::ProductId;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::EmptyCart.code(), ErrorCode::CartError);
        assert_eq!(
            StoreError::AdminProtected(UserId::new(1)).code(),
            ErrorCode::Forbidden
        );
        assert_eq!(
            StoreError::from(CoreError::ProductNotFound(ProductId::new(9))).code(),
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_error_report_serialization() {
        let report = ErrorReport::from(StoreError::Forbidden {
            action: "delete products",
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "FORBIDDEN");
        assert_eq!(
            json["message"],
            "Administrator privileges required to delete products"
        );
    }
}
