use std::rc::Rc;

use geochain_core::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    settings::ProviderParams,
};

use super::{scheme, AddressParam, Candidates, JsonApi, Position};

pub fn data_science_toolkit(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let endpoint = format!(
        "{}://www.datasciencetoolkit.org/street2coordinates",
        scheme(params)
    );
    let api = JsonApi::new(
        ProviderKind::DataScienceToolkit,
        transport,
        &endpoint,
        AddressParam::PathSegment { suffix: "" },
        Candidates::Values(""),
        Position::LatLng {
            lat: "/latitude",
            lng: "/longitude",
        },
    )?;
    Ok(Box::new(api))
}
