use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::capabilities::{GeolocationResult, LookupResponse};
use crate::config::AppConfig;
use crate::locale::Locale;
use crate::share::ShareChannel;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(PetId);

// --- Route parameters handed over by the shell's router ---

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub const ID: &'static str = "id";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The pet identifier, if the route carries a non-blank one.
    #[must_use]
    pub fn pet_id(&self) -> Option<PetId> {
        self.get(Self::ID)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(PetId::new)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// --- Coordinate: validated, NaN-safe ---

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinate is not finite")]
    NonFinite,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
    }
}

impl Eq for Coordinate {}

// --- Event enum ---

#[derive(Serialize, Deserialize, Debug)]
pub enum Event {
    // Lifecycle
    Configure(Box<AppConfig>),
    LocaleChanged {
        locale: Locale,
    },
    RouteActivated(RouteParams),
    ScreenClosed,

    // Share flow
    ShareLocationRequested,
    ShareChannelChosen {
        channel: ShareChannel,
    },
    ShareCancelled,
    NoticeDismissed,

    // Capability responses (boxed to keep the enum small)
    #[serde(skip)]
    PetFetched {
        id: PetId,
        response: Box<LookupResponse>,
    },
    #[serde(skip)]
    PositionReceived(Box<GeolocationResult>),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Configure(_) => "configure",
            Self::LocaleChanged { .. } => "locale_changed",
            Self::RouteActivated(_) => "route_activated",
            Self::ScreenClosed => "screen_closed",
            Self::ShareLocationRequested => "share_location_requested",
            Self::ShareChannelChosen { .. } => "share_channel_chosen",
            Self::ShareCancelled => "share_cancelled",
            Self::NoticeDismissed => "notice_dismissed",
            Self::PetFetched { .. } => "pet_fetched",
            Self::PositionReceived(_) => "position_received",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::ShareLocationRequested
                | Self::ShareChannelChosen { .. }
                | Self::ShareCancelled
                | Self::NoticeDismissed
        )
    }
}
