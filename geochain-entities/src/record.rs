use crate::{address::*, geo::*};

/// The message that is stored if no provider was able to locate the address.
pub const NOT_FOUND_MESSAGE: &str = "This address could not be geocoded.";

/// Either the resolved position or the reason why there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Located(Coordinates),
    Failed(String),
}

/// The result of a single address resolution.
///
/// A record is never updated. Resolving the address again
/// produces a new record that supersedes the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeRecord {
    raw_input: AddressInput,
    normalized_address: String,
    resolution: Resolution,
}

impl GeocodeRecord {
    pub fn located(
        raw_input: AddressInput,
        normalized_address: String,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            raw_input,
            normalized_address,
            resolution: Resolution::Located(coordinates),
        }
    }

    /// A blank message is replaced by [`NOT_FOUND_MESSAGE`].
    pub fn failed(
        raw_input: AddressInput,
        normalized_address: String,
        error_message: impl Into<String>,
    ) -> Self {
        let mut error_message = error_message.into();
        if error_message.trim().is_empty() {
            error_message = NOT_FOUND_MESSAGE.to_owned();
        }
        Self {
            raw_input,
            normalized_address,
            resolution: Resolution::Failed(error_message),
        }
    }

    pub fn not_found(raw_input: AddressInput, normalized_address: String) -> Self {
        Self::failed(raw_input, normalized_address, NOT_FOUND_MESSAGE)
    }

    pub fn raw_input(&self) -> &AddressInput {
        &self.raw_input
    }

    pub fn normalized_address(&self) -> &str {
        &self.normalized_address
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self.resolution {
            Resolution::Located(pos) => Some(pos),
            Resolution::Failed(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Located(_) => None,
            Resolution::Failed(msg) => Some(msg),
        }
    }

    pub fn into_parts(self) -> (AddressInput, String, Resolution) {
        let Self {
            raw_input,
            normalized_address,
            resolution,
        } = self;
        (raw_input, normalized_address, resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn located_record_has_no_error() {
        let pos = Coordinates::try_from_lat_lng_deg(1.0, 2.0).unwrap();
        let record = GeocodeRecord::located("somewhere".into(), "somewhere".into(), pos);
        assert_eq!(Some(pos), record.coordinates());
        assert_eq!(None, record.error_message());
    }

    #[test]
    fn not_found_record_has_no_coordinates() {
        let record = GeocodeRecord::not_found("nowhere".into(), "nowhere".into());
        assert_eq!(None, record.coordinates());
        assert_eq!(Some(NOT_FOUND_MESSAGE), record.error_message());
        let (raw, normalized, _) = record.into_parts();
        assert_eq!(AddressInput::Text("nowhere".into()), raw);
        assert_eq!("nowhere", normalized);
    }

    #[test]
    fn failed_record_always_has_a_message() {
        for msg in ["", "  \n"] {
            let record = GeocodeRecord::failed("x".into(), "x".into(), msg);
            assert_eq!(Some(NOT_FOUND_MESSAGE), record.error_message());
        }
        let record = GeocodeRecord::failed("x".into(), "x".into(), "quota exceeded");
        assert_eq!(Some("quota exceeded"), record.error_message());
    }
}
