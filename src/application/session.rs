//! Mocked sign-in
//!
//! Any non-empty credentials are accepted. The signed-in user is persisted so
//! later invocations can greet them, but entries are never scoped per user.

use crate::application::notify::{LogNotifier, Notifier};
use crate::domain::User;
use crate::error::{EmotiqError, Result};
use crate::infrastructure::SessionStorage;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

/// Identity handed out by `login`
pub const DEMO_USER_ID: &str = "user-1";
pub const DEMO_USER_NAME: &str = "Demo User";

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub struct SessionService<S: SessionStorage> {
    storage: S,
    notifier: Box<dyn Notifier>,
}

impl<S: SessionStorage> SessionService<S> {
    pub fn new(storage: S) -> Self {
        SessionService {
            storage,
            notifier: Box::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Currently signed-in user, if any
    pub fn current(&self) -> Result<Option<User>> {
        self.storage.load_user()
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.trim().is_empty() || password.is_empty() {
            self.notifier.error("Invalid credentials");
            return Err(EmotiqError::Auth("Invalid credentials".to_string()));
        }

        let user = User::new(DEMO_USER_ID, DEMO_USER_NAME, email.trim());
        self.persist(&user, "Failed to log in")?;
        info!(user = %user.id, "signed in");
        self.notifier.success("Welcome back!");
        Ok(user)
    }

    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || password.is_empty() {
            return Err(EmotiqError::Validation(
                "Name and password are required".to_string(),
            ));
        }
        Self::validate_email(email)?;

        let user = User::new(format!("user-{}", uuid::Uuid::new_v4()), name, email);
        self.persist(&user, "Failed to create account")?;
        info!(user = %user.id, "account created");
        self.notifier.success("Account created successfully!");
        Ok(user)
    }

    pub fn logout(&self) -> Result<()> {
        self.storage.clear_user()?;
        info!("signed out");
        self.notifier.info("You've been logged out");
        Ok(())
    }

    /// Change the signed-in user's name and email
    pub fn update_profile(&self, name: &str, email: &str) -> Result<User> {
        let Some(mut user) = self.current()? else {
            return Err(EmotiqError::Auth("Not signed in".to_string()));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(EmotiqError::Validation("Name is required".to_string()));
        }
        Self::validate_email(email.trim())?;

        user.name = name.to_string();
        user.email = email.trim().to_string();
        self.persist(&user, "Failed to save profile")?;
        self.notifier.success("Profile saved successfully!");
        Ok(user)
    }

    fn validate_email(email: &str) -> Result<()> {
        if !email_regex().is_match(email) {
            return Err(EmotiqError::Validation(format!(
                "Invalid email address: '{}'",
                email
            )));
        }
        Ok(())
    }

    fn persist(&self, user: &User, failure: &str) -> Result<()> {
        self.storage.save_user(user).inspect_err(|_| {
            self.notifier.error(failure);
        })
    }
}
