//! Profile Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::products::models::ProductStockId, ids::TypedId, session::models::UserType,
};

/// Person Id, shared by customers, sellers and owners.
pub type PersonId = TypedId<Profile>;

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Single-line rendering that skips blank parts.
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.province,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Profile Model
///
/// One shape for every role. Role specific details are absent for the roles
/// they do not apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub person_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<Address>,
    pub email: String,

    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub product_stock_ids: Vec<ProductStockId>,
    pub stand_id: Option<i64>,

    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub stand_ids: Vec<i64>,
    pub total_rent: Option<Decimal>,
    pub has_available_stands: Option<bool>,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Profile Update Model
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            date_of_birth: profile.date_of_birth.clone(),
            phone_number: profile.phone_number.clone(),
            address: profile.address.clone(),
        }
    }
}

/// Registration Model
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("user_type", &self.user_type)
            .field("password", &"**redacted**")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_owner_with_role_details() -> TestResult {
        let profile: Profile = serde_json::from_value(json!({
            "personId": 9,
            "firstName": "Olga",
            "lastName": "Owner",
            "email": "olga@example.com",
            "address": { "street": "1 Main St", "city": "Springfield", "country": "US" },
            "standIds": [1, 2],
            "totalRent": 1250.5,
            "hasAvailableStands": true
        }))?;

        assert_eq!(profile.display_name(), "Olga Owner");
        assert_eq!(profile.stand_ids, vec![1, 2]);
        assert!(profile.product_stock_ids.is_empty());
        assert_eq!(profile.total_rent, Some(Decimal::new(12505, 1)));

        Ok(())
    }

    #[test]
    fn address_one_line_skips_blank_parts() {
        let address = Address {
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            province: Some("  ".to_string()),
            country: Some("US".to_string()),
            ..Address::default()
        };

        assert_eq!(address.one_line(), "1 Main St, Springfield, US");
    }

    #[test]
    fn registration_debug_hides_password() {
        let registration = Registration {
            first_name: "Grace".to_string(),
            last_name: "Customer".to_string(),
            date_of_birth: None,
            phone_number: None,
            address: None,
            email: "grace@example.com".to_string(),
            password: "hunter2".to_string(),
            user_type: UserType::Customer,
        };

        assert!(!format!("{registration:?}").contains("hunter2"));
    }
}
