use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The fixed parts of a structured postal address.
///
/// The declaration order is the order in which the parts
/// are joined into a single address line.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum AddressField {
    #[strum(serialize = "addr1")]    Addr1,
    #[strum(serialize = "addr2")]    Addr2,
    #[strum(serialize = "city")]     City,
    #[strum(serialize = "state")]    State,
    #[strum(serialize = "postcode")] Postcode,
}

impl AddressField {
    pub const ALL: [Self; 5] = [
        Self::Addr1,
        Self::Addr2,
        Self::City,
        Self::State,
        Self::Postcode,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub addr1    : Option<String>,
    pub addr2    : Option<String>,
    pub city     : Option<String>,
    pub state    : Option<String>,
    pub postcode : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.addr1.is_none()
            && self.addr2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postcode.is_none()
    }

    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Addr1 => self.addr1.as_deref(),
            AddressField::Addr2 => self.addr2.as_deref(),
            AddressField::City => self.city.as_deref(),
            AddressField::State => self.state.as_deref(),
            AddressField::Postcode => self.postcode.as_deref(),
        }
    }

    pub fn set(&mut self, field: AddressField, value: Option<String>) {
        let slot = match field {
            AddressField::Addr1 => &mut self.addr1,
            AddressField::Addr2 => &mut self.addr2,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Postcode => &mut self.postcode,
        };
        *slot = value;
    }

    /// Iterate over all parts in their declared order,
    /// independent of how the address has been assembled.
    pub fn parts(&self) -> impl Iterator<Item = (AddressField, Option<&str>)> + '_ {
        AddressField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

impl<S: Into<String>> FromIterator<(AddressField, S)> for Address {
    fn from_iter<I: IntoIterator<Item = (AddressField, S)>>(iter: I) -> Self {
        let mut addr = Self::default();
        for (field, value) in iter {
            addr.set(field, Some(value.into()));
        }
        addr
    }
}

/// The address as it has been entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// A single free-form text, e.g. the content of a text area.
    Text(String),
    Structured(Address),
}

impl Default for AddressInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<String> for AddressInput {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<&str> for AddressInput {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

impl From<Address> for AddressInput {
    fn from(from: Address) -> Self {
        Self::Structured(from)
    }
}
