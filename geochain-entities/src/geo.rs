use std::{fmt, str::FromStr};
use thiserror::Error;

pub const LAT_DEG_MAX: f64 = 90.0;
pub const LNG_DEG_MAX: f64 = 180.0;

/// A validated geographical position in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinatesError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
    #[error("Failed to parse coordinates: {0}")]
    Parse(String),
}

impl Coordinates {
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordinatesError> {
        let lat = lat.into();
        let lng = lng.into();
        if !lat.is_finite() || lat.abs() > LAT_DEG_MAX {
            return Err(CoordinatesError::Latitude(lat));
        }
        if !lng.is_finite() || lng.abs() > LNG_DEG_MAX {
            return Err(CoordinatesError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat, lng)) = s.split_once(',') else {
            return Err(CoordinatesError::Parse(s.to_owned()));
        };
        match (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
            (Ok(lat), Ok(lng)) => Self::try_from_lat_lng_deg(lat, lng),
            _ => Err(CoordinatesError::Parse(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_degrees() {
        assert!(Coordinates::try_from_lat_lng_deg(90.0, 180.0).is_ok());
        assert!(Coordinates::try_from_lat_lng_deg(-90.0, -180.0).is_ok());
        assert_eq!(
            Err(CoordinatesError::Latitude(90.5)),
            Coordinates::try_from_lat_lng_deg(90.5, 0.0)
        );
        assert_eq!(
            Err(CoordinatesError::Longitude(-180.1)),
            Coordinates::try_from_lat_lng_deg(0.0, -180.1)
        );
        assert!(Coordinates::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(Coordinates::try_from_lat_lng_deg(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn parse_and_display() {
        let pos: Coordinates = "48.137, 11.575".parse().unwrap();
        assert_eq!((48.137, 11.575), pos.to_lat_lng_deg());
        assert_eq!("48.137,11.575", pos.to_string());
        assert!("48.137".parse::<Coordinates>().is_err());
        assert!("north,south".parse::<Coordinates>().is_err());
    }
}
