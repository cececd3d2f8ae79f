//! Auth data models.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::{
    domain::profiles::models::PersonId,
    session::{SessionIdentity, SessionToken, UserType},
};

/// Login request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Successful login as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: SessionToken,
    pub user_type: UserType,
    pub user_id: PersonId,
    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<LoginResponse> for SessionIdentity {
    fn from(response: LoginResponse) -> Self {
        let display_name = [response.first_name.as_deref(), response.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let display_name = if display_name.is_empty() {
            response.email.clone()
        } else {
            display_name
        };

        Self {
            token: response.token,
            user_type: response.user_type,
            user_id: response.user_id,
            email: response.email,
            display_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn login_response_becomes_identity() -> TestResult {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "abc.def",
            "userType": "seller",
            "userId": 2,
            "email": "sam@example.com",
            "firstName": "Sam",
            "lastName": "Seller"
        }))?;

        let identity = SessionIdentity::from(response);

        assert_eq!(identity.token.expose(), "abc.def");
        assert_eq!(identity.user_type, UserType::Seller);
        assert_eq!(identity.display_name, "Sam Seller");
        assert_eq!(identity.customer_id(), None);

        Ok(())
    }

    #[test]
    fn nameless_identity_falls_back_to_email() -> TestResult {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "t",
            "userType": "customer",
            "userId": 5,
            "email": "ada@example.com",
            "firstName": null
        }))?;

        assert_eq!(SessionIdentity::from(response).display_name, "ada@example.com");

        Ok(())
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("ada@example.com", "hunter2"));

        assert!(!rendered.contains("hunter2"), "password leaked: {rendered}");
    }
}
