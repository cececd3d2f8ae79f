//! Session Models

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

use crate::domain::profiles::models::PersonId;

/// The three account roles the backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Seller,
    Owner,
}

impl UserType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Seller => "seller",
            Self::Owner => "owner",
        }
    }

    /// Backend collection path segment for this role.
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Customer => "customers",
            Self::Seller => "sellers",
            Self::Owner => "owners",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown user type `{0}`")]
pub struct UnknownUserType(String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "customer" | "customers" => Ok(Self::Customer),
            "seller" | "sellers" => Ok(Self::Seller),
            "owner" | "owners" => Ok(Self::Owner),
            _ => Err(UnknownUserType(value.to_string())),
        }
    }
}

/// Bearer token issued by the backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(**redacted**)")
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// The logged-in user, persisted under the same keys the web client used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(rename = "authToken")]
    pub token: SessionToken,

    #[serde(rename = "userType")]
    pub user_type: UserType,

    #[serde(rename = "userId")]
    pub user_id: PersonId,

    #[serde(rename = "userEmail")]
    pub email: String,

    #[serde(rename = "userName")]
    pub display_name: String,
}

impl SessionIdentity {
    /// The customer id, when the logged-in user is a customer.
    pub fn customer_id(&self) -> Option<PersonId> {
        (self.user_type == UserType::Customer).then_some(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn identity(user_type: UserType) -> SessionIdentity {
        SessionIdentity {
            token: SessionToken::new("secret-token"),
            user_type,
            user_id: PersonId::new(5),
            email: "grace@example.com".to_string(),
            display_name: "Grace Customer".to_string(),
        }
    }

    #[test]
    fn persisted_with_storage_keys() -> TestResult {
        assert_eq!(
            serde_json::to_value(identity(UserType::Customer))?,
            json!({
                "authToken": "secret-token",
                "userType": "customer",
                "userId": 5,
                "userEmail": "grace@example.com",
                "userName": "Grace Customer"
            })
        );

        Ok(())
    }

    #[test]
    fn debug_output_redacts_token() {
        let rendered = format!("{:?}", identity(UserType::Seller));

        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn only_customers_have_a_customer_id() {
        assert_eq!(
            identity(UserType::Customer).customer_id(),
            Some(PersonId::new(5))
        );
        assert_eq!(identity(UserType::Owner).customer_id(), None);
    }

    #[test]
    fn user_type_parses_collection_names() -> TestResult {
        assert_eq!("Sellers".parse::<UserType>()?, UserType::Seller);
        assert!("admin".parse::<UserType>().is_err());

        Ok(())
    }
}
