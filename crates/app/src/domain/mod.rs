//! Storefront Domain Concerns

pub mod carts;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod profiles;

use serde::{Deserialize, Deserializer};

/// Deserialize a field the backend may send as `null`, falling back to the
/// type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
