use geochain_entities as e;
use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("A record has either coordinates or an error message")]
    Ambiguous,
    #[error("Latitude and longitude must be given together")]
    IncompleteCoordinates,
    #[error(transparent)]
    Coordinates(#[from] e::geo::CoordinatesError),
}

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            addr1,
            addr2,
            city,
            state,
            postcode,
        } = from;
        Self {
            addr1,
            addr2,
            city,
            state,
            postcode,
        }
    }
}

impl From<Address> for e::address::Address {
    fn from(from: Address) -> Self {
        let Address {
            addr1,
            addr2,
            city,
            state,
            postcode,
        } = from;
        Self {
            addr1,
            addr2,
            city,
            state,
            postcode,
        }
    }
}

impl From<e::address::AddressInput> for AddressInput {
    fn from(from: e::address::AddressInput) -> Self {
        use e::address::AddressInput as E;
        match from {
            E::Text(text) => Self::Text(text),
            E::Structured(address) => Self::Structured(address.into()),
        }
    }
}

impl From<AddressInput> for e::address::AddressInput {
    fn from(from: AddressInput) -> Self {
        match from {
            AddressInput::Text(text) => Self::Text(text),
            AddressInput::Structured(address) => Self::Structured(address.into()),
        }
    }
}

impl From<e::record::GeocodeRecord> for GeocodeRecord {
    fn from(from: e::record::GeocodeRecord) -> Self {
        let (raw, address, resolution) = from.into_parts();
        let (latitude, longitude, error) = match resolution {
            e::record::Resolution::Located(pos) => {
                let (lat, lng) = pos.to_lat_lng_deg();
                (Some(lat), Some(lng), None)
            }
            e::record::Resolution::Failed(msg) => (None, None, Some(msg)),
        };
        Self {
            raw: raw.into(),
            address,
            latitude,
            longitude,
            error,
        }
    }
}

impl TryFrom<GeocodeRecord> for e::record::GeocodeRecord {
    type Error = RecordError;

    fn try_from(from: GeocodeRecord) -> Result<Self, Self::Error> {
        let GeocodeRecord {
            raw,
            address,
            latitude,
            longitude,
            error,
        } = from;
        let error = error.filter(|msg| !msg.trim().is_empty());
        match (latitude, longitude, error) {
            (Some(lat), Some(lng), None) => {
                let pos = e::geo::Coordinates::try_from_lat_lng_deg(lat, lng)?;
                Ok(Self::located(raw.into(), address, pos))
            }
            (None, None, Some(msg)) => Ok(Self::failed(raw.into(), address, msg)),
            (Some(_), Some(_), Some(_)) | (None, None, None) => Err(RecordError::Ambiguous),
            _ => Err(RecordError::IncompleteCoordinates),
        }
    }
}
