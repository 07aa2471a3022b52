use serde::Deserialize;

/// User record as served by the directory endpoint. String fields may be
/// missing or `null` upstream; accessors read those as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Required; it keys the rendered list, so a record without one fails the decode.
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: Option<String>,
}

/// Fields the search query can match against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Username,
    Email,
    Phone,
}

impl SearchField {
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Username => "username",
            SearchField::Email => "email",
            SearchField::Phone => "phone",
        }
    }
}

impl User {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    pub fn city(&self) -> Option<&str> {
        self.address
            .as_ref()
            .and_then(|address| address.city.as_deref())
            .filter(|city| !city.trim().is_empty())
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|company| company.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => self.name(),
            SearchField::Username => self.username(),
            SearchField::Email => self.email(),
            SearchField::Phone => self.phone(),
        }
    }
}
