use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::password;
use crate::error::{ensure, AppResult};
use crate::profiles::repo_types::FitnessGoal;

lazy_static! {
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Lower-cased, trimmed address, or a 400 when it does not look like one.
fn normalize_email(raw: &str) -> AppResult<String> {
    let email = raw.trim().to_lowercase();
    ensure(EMAIL_SHAPE.is_match(&email), "Invalid email")?;
    Ok(email)
}

/// Token type used to distinguish Access and Refresh JWTs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT payload.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,       // user ID
    pub exp: usize,      // expiration time
    pub iat: usize,      // issued at
    pub iss: String,     // issuer
    pub aud: String,     // audience
    pub kind: TokenKind, // access or refresh
}

/// Registration also seeds the profile with the chosen goal.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub fitness_goal: FitnessGoal,
}

impl RegisterRequest {
    pub fn normalize(&mut self) -> AppResult<()> {
        self.email = normalize_email(&self.email)?;
        ensure(
            self.password.chars().count() >= password::MIN_LEN,
            "Password too short",
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn normalize(&mut self) -> AppResult<()> {
        self.email = normalize_email(&self.email)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned after register, login or refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(json: &str) -> RegisterRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn register_normalizes_email_and_defaults_goal() {
        let mut req = register(r#"{"email": "  Runner@Example.COM ", "password": "tempo-run-5k"}"#);
        req.normalize().unwrap();
        assert_eq!(req.email, "runner@example.com");
        assert_eq!(req.fitness_goal, FitnessGoal::Maintain);
    }

    #[test]
    fn register_rejects_bad_email_and_short_password() {
        let mut req = register(r#"{"email": "runner@example", "password": "tempo-run-5k"}"#);
        assert!(req.normalize().is_err());

        let mut req = register(r#"{"email": "runner@example.com", "password": "short"}"#);
        assert!(req.normalize().is_err());

        let mut req = register(
            r#"{"email": "runner@example.com", "password": "long-enough", "fitness_goal": "gain_muscle"}"#,
        );
        req.normalize().unwrap();
        assert_eq!(req.fitness_goal, FitnessGoal::GainMuscle);
    }

    #[test]
    fn login_rejects_whitespace_in_address() {
        let mut req: LoginRequest =
            serde_json::from_str(r#"{"email": "run ner@example.com", "password": "x"}"#).unwrap();
        assert!(req.normalize().is_err());
    }
}
