use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::model::{Model, ShareFlow};
use crate::pet::{resolve_category_label, PetIcon, PetRecord};
use crate::share::ShareChannel;
use crate::AppError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFacingError {
    pub message: String,
    pub error_code: String,
}

impl UserFacingError {
    fn new(error: &AppError, locale: Locale) -> Self {
        Self {
            message: error.user_facing_message(locale).to_owned(),
            error_code: error.code().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetView {
    pub id: String,
    pub name: Option<String>,
    pub category_label: String,
    pub icon: PetIcon,
    pub glyph: String,
    pub phone_numbers: Vec<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub owner_name: Option<String>,
}

impl PetView {
    fn new(pet: &PetRecord, locale: Locale) -> Self {
        let icon = pet.icon();
        Self {
            id: pet.id.to_string(),
            name: pet.name.clone(),
            category_label: resolve_category_label(pet.category_code(), Some(pet), locale),
            icon,
            glyph: icon.glyph().to_owned(),
            phone_numbers: pet.phone_numbers.clone(),
            breed: pet.breed.clone(),
            color: pet.color.clone(),
            age: pet.age.clone(),
            gender: pet.gender.clone(),
            description: pet.description.clone(),
            photo_url: pet.photo_url.clone(),
            owner_name: pet.owner_name.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareOptionView {
    pub channel: ShareChannel,
    pub label: String,
}

/// Choice prompt the shell presents while the flow is choosing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharePromptView {
    pub header: String,
    pub message: String,
    pub options: Vec<ShareOptionView>,
    pub cancel_label: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShareStatus {
    Idle,
    Locating,
    Choosing,
    Dispatched,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareView {
    pub status: ShareStatus,
    /// The share control is enabled: a record is shown and no request is pending.
    pub can_share: bool,
    pub prompt: Option<SharePromptView>,
}

impl ShareView {
    fn new(model: &Model) -> Self {
        let status = match model.share {
            ShareFlow::Idle => ShareStatus::Idle,
            ShareFlow::Locating => ShareStatus::Locating,
            ShareFlow::Choosing { .. } => ShareStatus::Choosing,
            ShareFlow::Dispatched { .. } => ShareStatus::Dispatched,
        };

        let prompt = matches!(model.share, ShareFlow::Choosing { .. }).then(|| {
            let strings = model.locale().strings();
            SharePromptView {
                header: strings.share_prompt_header.to_owned(),
                message: strings.share_prompt_message.to_owned(),
                options: ShareChannel::ALL
                    .iter()
                    .map(|&channel| ShareOptionView {
                        channel,
                        label: channel.label().to_owned(),
                    })
                    .collect(),
                cancel_label: strings.share_cancel.to_owned(),
            }
        });

        Self {
            status,
            can_share: model.pet.is_some() && !model.share.is_busy(),
            prompt,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub is_loading: bool,
    pub error: Option<UserFacingError>,
    pub pet: Option<PetView>,
    pub share: ShareView,
    pub notice: Option<UserFacingError>,
    pub locale: Locale,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let locale = model.locale();
        Self {
            is_loading: model.is_loading,
            error: model.error.as_ref().map(|e| UserFacingError::new(e, locale)),
            pet: model.pet.as_ref().map(|pet| PetView::new(pet, locale)),
            share: ShareView::new(model),
            notice: model.notice.as_ref().map(|e| UserFacingError::new(e, locale)),
            locale,
        }
    }
}
