//! # Authentication & Accounts
//!
//! ## Session State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │               login / register (success)                               │
//! │   Anonymous ─────────────────────────────────► Authenticated(user)     │
//! │       ▲                                              │                  │
//! │       └──────────────────── logout ──────────────────┘                  │
//! │                                                                         │
//! │   logout clears the cart and favorites too.                            │
//! │   A failed login or register leaves the session as it was.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Credentials are compared as plain text (see [`honeyzest_core::User`]).

use chrono::Utc;
use honeyzest_core::validation::{validate_email, validate_password, validate_person_name};
use honeyzest_core::{CoreError, Role, User, UserId, ValidationError};
use tracing::{debug, info, warn};

use super::Store;
use crate::error::{StoreError, StoreResult};

impl Store {
    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session
            .and_then(|id| self.users.iter().find(|u| u.id == id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Signs in with an exact email and password match.
    ///
    /// On success the session switches to the account and a login
    /// notification is added. On failure nothing changes.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<&User> {
        let Some(user_id) = self
            .users
            .iter()
            .find(|u| u.matches_credentials(email, password))
            .map(|u| u.id)
        else {
            warn!("Login rejected");
            return Err(StoreError::InvalidCredentials);
        };

        self.session = Some(user_id);
        self.add_notification(format!(
            "Logged in successfully at {}",
            Utc::now().format("%H:%M:%S")
        ));
        info!(user_id = %user_id, "User logged in");

        self.require_user()
    }

    /// Creates a member account and signs it in.
    ///
    /// ## Errors
    /// - `Duplicate` if the email is already registered (exact match)
    /// - `Required` / `InvalidFormat` for empty name, bad email, empty password
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> StoreResult<&User> {
        validate_person_name(name)?;
        validate_email(email)?;
        validate_password(password)?;

        if self.users.iter().any(|u| u.email == email) {
            warn!("Registration rejected: email already registered");
            return Err(ValidationError::Duplicate {
                field: "email".to_string(),
                value: email.to_string(),
            }
            .into());
        }

        let user = User {
            id: self.ids.user(),
            name: name.trim().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Member,
        };
        let user_id = user.id;
        self.users.push(user);
        self.session = Some(user_id);
        self.add_notification("Welcome to the family! Complete your profile.");
        info!(user_id = %user_id, "User registered");

        self.require_user()
    }

    /// Ends the session and empties the cart and favorites.
    /// Calling it while signed out is a no-op.
    pub fn logout(&mut self) {
        if let Some(user_id) = self.session.take() {
            info!(user_id = %user_id, "User logged out");
        }
        self.cart.clear();
        self.favorites.clear();
        debug!("Cart and favorites cleared");
    }

    /// Removes a member account. Admin only.
    ///
    /// Administrator accounts are refused with `AdminProtected` no matter
    /// who asks.
    pub fn delete_user(&mut self, id: UserId) -> StoreResult<User> {
        self.require_admin("delete users")?;

        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(CoreError::UserNotFound(id))?;

        if self.users[index].is_admin() {
            warn!(user_id = %id, "Refused to delete administrator");
            return Err(StoreError::AdminProtected(id));
        }

        let removed = self.users.remove(index);
        info!(user_id = %id, "User deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_seeded_admin() {
        let mut store = Store::seeded();
        let user = store.login("admin@honeyzest.com", "123").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(store.is_authenticated());
        assert!(store.notifications()[0].message.starts_with("Logged in successfully at "));
    }

    #[test]
    fn test_login_wrong_password_leaves_session_unchanged() {
        let mut store = Store::seeded();
        let feed = store.notifications().len();

        assert!(matches!(
            store.login("admin@honeyzest.com", "wrong"),
            Err(StoreError::InvalidCredentials)
        ));
        assert!(store.current_user().is_none());
        assert_eq!(store.notifications().len(), feed);

        store.login("john@gmail.com", "123").unwrap();
        assert!(store.login("admin@honeyzest.com", "wrong").is_err());
        assert_eq!(store.current_user().unwrap().email, "john@gmail.com");
    }

    #[test]
    fn test_login_email_is_case_sensitive() {
        let mut store = Store::seeded();
        assert!(store.login("Admin@HoneyZest.com", "123").is_err());
    }

    #[test]
    fn test_register_creates_member_and_signs_in() {
        let mut store = Store::seeded();
        let before = store.users().len();

        let user = store.register("Grace W.", "grace@gmail.com", "pw").unwrap();
        assert_eq!(user.role, Role::Member);
        let id = user.id;

        assert_eq!(store.users().len(), before + 1);
        assert_eq!(store.current_user().map(|u| u.id), Some(id));
        assert!(store.users().iter().filter(|u| u.id == id).count() == 1);
        assert_eq!(
            store.notifications()[0].message,
            "Welcome to the family! Complete your profile."
        );
    }

    #[test]
    fn test_register_duplicate_email_fails() {
        let mut store = Store::seeded();
        let before = store.users().len();

        let err = store.register("Imposter", "john@gmail.com", "x").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
        assert_eq!(store.users().len(), before);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_logout_clears_cart_and_favorites_and_is_idempotent() {
        let mut store = Store::seeded();
        store.login("john@gmail.com", "123").unwrap();
        store.add_to_cart(honeyzest_core::ProductId::new(1)).unwrap();
        store.toggle_favorite(honeyzest_core::ProductId::new(2)).unwrap();

        store.logout();
        assert!(store.current_user().is_none());
        assert!(store.cart().is_empty());
        assert!(store.favorites().is_empty());

        store.logout();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_delete_user_protects_admins() {
        let mut store = Store::seeded();
        store.login("admin@honeyzest.com", "123").unwrap();
        let admin_id = store.current_user().unwrap().id;

        assert!(matches!(
            store.delete_user(admin_id),
            Err(StoreError::AdminProtected(id)) if id == admin_id
        ));
        assert!(store.users().iter().any(|u| u.id == admin_id));
    }

    #[test]
    fn test_delete_user_requires_admin() {
        let mut store = Store::seeded();
        let sarah = store
            .users()
            .iter()
            .find(|u| u.email == "sarah@gmail.com")
            .unwrap()
            .id;

        assert!(matches!(
            store.delete_user(sarah),
            Err(StoreError::NotAuthenticated)
        ));

        store.login("john@gmail.com", "123").unwrap();
        assert!(matches!(
            store.delete_user(sarah),
            Err(StoreError::Forbidden { .. })
        ));

        store.logout();
        store.login("admin@honeyzest.com", "123").unwrap();
        let removed = store.delete_user(sarah).unwrap();
        assert_eq!(removed.email, "sarah@gmail.com");
        assert!(matches!(
            store.delete_user(sarah),
            Err(StoreError::Core(CoreError::UserNotFound(_)))
        ));
    }
}
