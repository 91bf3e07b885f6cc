pub mod geocode;
pub mod http;
