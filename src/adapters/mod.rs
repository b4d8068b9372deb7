// Adapters layer: concrete HTTP clients for the external services.

pub mod newsapi;
pub mod nominatim;
pub mod openweather;
pub mod tomtom;

pub use newsapi::NewsApi;
pub use nominatim::NominatimGeocoder;
pub use openweather::OpenWeather;
pub use tomtom::TomTomTraffic;
