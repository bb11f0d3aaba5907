//! Session login against the fixed credential map

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{Credentials, MenuSection, Notification, Notifications, UserProfile},
};

pub struct AuthService<'a> {
    config: &'a AuthConfig,
    session: &'a mut Option<UserProfile>,
    notifications: &'a mut Notifications,
}

impl<'a> AuthService<'a> {
    pub fn new(
        config: &'a AuthConfig,
        session: &'a mut Option<UserProfile>,
        notifications: &'a mut Notifications,
    ) -> Self {
        Self {
            config,
            session,
            notifications,
        }
    }

    /// Profile for the credentials, if the pair is known
    fn lookup(&self, credentials: &Credentials) -> Option<UserProfile> {
        let account = self.config.accounts.iter().find(|a| a.email == credentials.email)?;
        if credentials.password != self.config.shared_password {
            return None;
        }
        Some(UserProfile {
            email: account.email.clone(),
            role: account.role,
            name: account.name.clone(),
            department: account.department,
        })
    }

    /// Start a session. The previous session, if any, is replaced.
    pub fn login(&mut self, credentials: &Credentials) -> AppResult<UserProfile> {
        let Some(profile) = self.lookup(credentials) else {
            tracing::warn!("Failed login attempt for {}", credentials.email);
            self.notifications
                .push(Notification::failure("Login Failed", "Invalid email or password"));
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        };

        tracing::info!("User {} logged in as {}", profile.email, profile.role);
        self.notifications.push(Notification::success(
            "Login Successful",
            format!("Welcome back, {}!", profile.name),
        ));
        *self.session = Some(profile.clone());
        Ok(profile)
    }

    pub fn logout(&mut self) -> Option<UserProfile> {
        let profile = self.session.take()?;
        tracing::info!("User {} logged out", profile.email);
        self.notifications.push(Notification::success(
            "Logged Out",
            "You have been successfully logged out",
        ));
        Some(profile)
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.session.as_ref()
    }

    /// Check that the current user may open `section`
    pub fn open_section(&self, section: MenuSection) -> AppResult<&UserProfile> {
        let profile = self
            .session
            .as_ref()
            .ok_or_else(|| AppError::Authentication("Not logged in".to_string()))?;
        profile.require_section(section)?;
        Ok(profile)
    }
}
