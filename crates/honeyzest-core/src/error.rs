//! # Error Types
//!
//! Domain-specific error types for honeyzest-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  honeyzest-core errors (this file)                                     │
//! │  ├── CoreError        - Missing entities, bad codes, limits            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  honeyzest-store errors (separate crate)                               │
//! │  └── StoreError       - Session, permission and checkout failures      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ErrorReport → View   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::{BlogId, CommentId, FaqId, NotificationId, OrderId, ProductId, ReviewId, UserId};

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// Every variant leaves the store untouched: operations validate and look up
/// first, then mutate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Blog post not found: {0}")]
    BlogNotFound(BlogId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Review {review} not found on product {product}")]
    ReviewNotFound { product: ProductId, review: ReviewId },

    #[error("Comment {comment} not found on blog post {blog}")]
    CommentNotFound { blog: BlogId, comment: CommentId },

    #[error("Notification not found: {0}")]
    NotificationNotFound(NotificationId),

    #[error("FAQ entry not found: {0}")]
    FaqNotFound(FaqId),

    /// Item quantity would exceed [`crate::MAX_ITEM_QUANTITY`].
    #[error("Quantity of product {product} cannot exceed {max}")]
    QuantityTooLarge { product: ProductId, max: u32 },

    /// A line total or order total left the representable range.
    #[error("Amount is too large to total")]
    AmountOverflow,

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown product category: {0}")]
    UnknownCategory(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., an email that is already registered).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            product: ProductId::new(3),
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity of product 3 cannot exceed 999");

        let err = CoreError::OrderNotFound(OrderId::from_number(1234));
        assert_eq!(err.to_string(), "Order not found: ORD-1234");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "email".to_string(),
            value: "john@gmail.com".to_string(),
        };
        assert_eq!(err.to_string(), "email 'john@gmail.com' already exists");

        let err = ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "rating must be between 1 and 5");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
