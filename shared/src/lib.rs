//! Shared core of the lost pet profile screen.
//!
//! The core fetches a pet record by the identifier in the route, derives what
//! the screen shows, and runs the "share my location with the owner" flow.
//! Shells render [`ViewModel`] and fulfil the effects in [`Capabilities`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod event;
pub mod locale;
pub mod model;
pub mod pet;
pub mod share;
pub mod view;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::AppConfig;
pub use crux_core::App as CruxApp;
pub use event::{Coordinate, Event, PetId, RouteParams};
pub use locale::Locale;
pub use model::{Model, ShareFlow};
pub use pet::{resolve_category_label, AnimalType, PetIcon, PetRecord};
pub use share::{DeepLink, ShareChannel, ShareMessage};
pub use view::ViewModel;

use capabilities::{GeolocationError, LookupError};
use config::ConfigError;
use event::CoordinateError;
use share::ShareError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MissingIdentifier,
    Lookup,
    MissingPhoneNumber,
    Geolocation,
    GeolocationUnsupported,
    Configuration,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingIdentifier => "MISSING_IDENTIFIER",
            Self::Lookup => "LOOKUP_FAILED",
            Self::MissingPhoneNumber => "PHONE_UNAVAILABLE",
            Self::Geolocation => "LOCATION_ERROR",
            Self::GeolocationUnsupported => "LOCATION_UNSUPPORTED",
            Self::Configuration => "CONFIGURATION_ERROR",
        }
    }
}

/// Error surfaced to the user. The text is looked up per locale when shown;
/// `internal_message` only goes to diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub internal_message: Option<String>,
}

impl AppError {
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            internal_message: None,
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal_message = Some(internal.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn user_facing_message(&self, locale: Locale) -> &'static str {
        let strings = locale.strings();
        match self.kind {
            ErrorKind::MissingIdentifier => strings.missing_identifier,
            ErrorKind::Lookup => strings.lookup_failed,
            ErrorKind::MissingPhoneNumber => strings.phone_unavailable,
            ErrorKind::Geolocation => strings.location_unavailable,
            ErrorKind::GeolocationUnsupported => strings.location_unsupported,
            ErrorKind::Configuration => strings.invalid_configuration,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(internal) = &self.internal_message {
            write!(f, " {internal}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::new(ErrorKind::Lookup).with_internal(e.to_string())
    }
}

impl From<GeolocationError> for AppError {
    fn from(e: GeolocationError) -> Self {
        let kind = match e {
            GeolocationError::Unsupported => ErrorKind::GeolocationUnsupported,
            GeolocationError::PermissionDenied
            | GeolocationError::PositionUnavailable { .. }
            | GeolocationError::Timeout => ErrorKind::Geolocation,
        };
        AppError::new(kind).with_internal(e.to_string())
    }
}

impl From<CoordinateError> for AppError {
    fn from(e: CoordinateError) -> Self {
        AppError::new(ErrorKind::Geolocation).with_internal(e.to_string())
    }
}

impl From<ShareError> for AppError {
    fn from(e: ShareError) -> Self {
        AppError::new(ErrorKind::MissingPhoneNumber).with_internal(e.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::new(ErrorKind::Configuration).with_internal(e.to_string())
    }
}
