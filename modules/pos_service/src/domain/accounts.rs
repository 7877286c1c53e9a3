//! Account service - staff account creation and login

use super::repository::UserRepository;
use super::validation::validate_account;
use crate::contract::{NewAccount, PosError, User};
use std::sync::Arc;

/// Domain service for staff accounts
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl AccountService {
    /// Create a new service instance
    pub fn new(users: Arc<dyn UserRepository>, hash_cost: u32) -> Self {
        Self { users, hash_cost }
    }

    /// Create an account, storing only the bcrypt hash of the password
    pub async fn create_account(&self, account: NewAccount) -> Result<(), PosError> {
        validate_account(&account)?;

        let cost = self.hash_cost;
        let password = account.password;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(PosError::store)?
            .map_err(|e| PosError::Store {
                message: format!("Failed to hash password: {}", e),
            })?;

        let user = User {
            username: account.username,
            password_hash,
            role: account.role,
        };

        let created = self
            .users
            .create(&user)
            .await
            .map_err(PosError::store)?;

        if !created {
            return Err(PosError::validation(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }

        tracing::info!(username = %user.username, role = %user.role, "Account created");
        Ok(())
    }

    /// Check credentials and return the user's role
    pub async fn login(&self, username: &str, password: &str) -> Result<String, PosError> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(PosError::store)?
            .ok_or(PosError::InvalidCredentials)?;

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(PosError::store)?
            .map_err(|e| {
                tracing::error!(username, error = %e, "Stored password hash is unreadable");
                PosError::Store {
                    message: format!("Failed to verify password: {}", e),
                }
            })?;

        if !matches {
            tracing::info!(username, "Login rejected");
            return Err(PosError::InvalidCredentials);
        }

        Ok(user.role)
    }
}
