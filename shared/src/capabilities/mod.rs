//! Capabilities the shell fulfils for the profile screen.
//!
//! Render and Http come from Crux; geolocation and navigation are ours.

mod geolocation;
mod http;
mod navigate;

pub use self::geolocation::{
    Geolocation, GeolocationError, GeolocationOperation, GeolocationResult, Position,
};
pub use self::http::{
    lookup_url, read_lookup_response, LookupError, LookupResponse, MAX_URL_LENGTH,
    PETS_PATH_SEGMENT,
};
pub use self::navigate::{Navigate, NavigateOperation, NavigationTarget};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::event::Event;

// Field types are spelled out: the Effect derive names its variants after them.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub geolocation: Geolocation<Event>,
    pub navigate: Navigate<Event>,
}
