use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::event::PetId;
use crate::locale::Locale;
use crate::pet::PetRecord;
use crate::share::{DeepLink, ShareMessage};
use crate::AppError;

/// Location sharing: Idle → Locating → Choosing → Dispatched.
///
/// Dispatched is a resting state like Idle; a new share request starts over.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub enum ShareFlow {
    #[default]
    Idle,
    Locating,
    Choosing {
        message: ShareMessage,
    },
    Dispatched {
        link: DeepLink,
    },
}

impl ShareFlow {
    /// A position request or a choice prompt is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Locating | Self::Choosing { .. })
    }
}

/// Screen state. Everything except `config` is per visit.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Model {
    pub config: AppConfig,

    /// Identifier of the lookup in flight or last completed.
    pub requested_id: Option<PetId>,
    pub pet: Option<PetRecord>,
    pub is_loading: bool,
    pub error: Option<AppError>,

    pub share: ShareFlow,
    /// Dismissible share-flow message; never replaces the profile.
    pub notice: Option<AppError>,
}

impl Model {
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Localized text of the screen error, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error
            .as_ref()
            .map(|e| e.user_facing_message(self.locale()))
    }

    #[must_use]
    pub fn notice_message(&self) -> Option<&'static str> {
        self.notice
            .as_ref()
            .map(|e| e.user_facing_message(self.locale()))
    }

    /// Drops the visit's state, keeping configuration.
    pub fn reset_screen(&mut self) {
        *self = Self {
            config: std::mem::take(&mut self.config),
            ..Self::default()
        };
    }
}
