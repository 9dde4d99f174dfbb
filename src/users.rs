//! Users

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<UserSummary>;

/// Entry of the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User id
    pub id: UserId,

    /// Login email
    pub email: String,

    /// Display name
    pub name: String,

    /// Preferred currency code
    pub currency: String,
}

/// Account details used both to register and to update a user.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// National identity or tax number
    pub dni_cif: String,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Postal address
    pub address: String,

    /// Phone number
    pub phone: String,

    /// Account password
    pub password: String,

    /// Preferred currency code, e.g. `EUR`
    pub currency: String,

    /// Preferred language
    pub language: String,
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("dni_cif", &self.dni_cif)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("phone", &self.phone)
            .field("password", &"**redacted**")
            .field("currency", &self.currency)
            .field("language", &self.language)
            .finish()
    }
}

/// Partial profile edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    /// New identity or tax number
    pub dni_cif: Option<String>,

    /// New display name
    pub name: Option<String>,

    /// New login email
    pub email: Option<String>,

    /// New postal address
    pub address: Option<String>,

    /// New phone number
    pub phone: Option<String>,

    /// New password
    pub password: Option<String>,

    /// New currency code
    pub currency: Option<String>,

    /// New language
    pub language: Option<String>,
}

impl ProfileChanges {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the changes on top of `profile`.
    pub fn apply(self, mut profile: UserProfile) -> UserProfile {
        let fields = [
            (self.dni_cif, &mut profile.dni_cif),
            (self.name, &mut profile.name),
            (self.email, &mut profile.email),
            (self.address, &mut profile.address),
            (self.phone, &mut profile.phone),
            (self.password, &mut profile.password),
            (self.currency, &mut profile.currency),
            (self.language, &mut profile.language),
        ];

        for (change, field) in fields {
            if let Some(value) = change {
                *field = value;
            }
        }

        profile
    }
}

/// Login form credentials.
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Login email
    pub email: String,

    /// Password
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Successful login payload.
#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    /// Authenticated user id
    pub id: UserId,

    /// Granted authorities
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Bearer token
    pub jwt: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("id", &self.id)
            .field("authorities", &self.authorities)
            .field("jwt", &"**redacted**")
            .finish()
    }
}
