//! Fixed string catalogue for the profile screen.
//!
//! The app ships in French; English is kept for shells running in an English
//! locale. Every user-visible string the core produces comes from here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Fr => &FR,
            Self::En => &EN,
        }
    }
}

/// Screen copy for one locale.
#[derive(Debug)]
pub struct Strings {
    pub missing_identifier: &'static str,
    pub lookup_failed: &'static str,
    pub phone_unavailable: &'static str,
    pub location_unavailable: &'static str,
    pub location_unsupported: &'static str,
    pub invalid_configuration: &'static str,
    pub share_prompt_header: &'static str,
    pub share_prompt_message: &'static str,
    pub share_cancel: &'static str,
    pub found_sentence: &'static str,
    pub placeholder: &'static str,
    categories: [&'static str; 11],
}

impl Strings {
    /// Label for a lowercase category code from the static table.
    #[must_use]
    pub fn category(&self, code: &str) -> Option<&'static str> {
        let index = match code {
            "dog" => 0,
            "cat" => 1,
            "bird" => 2,
            "rabbit" => 3,
            "hamster" => 4,
            "fish" => 5,
            "turtle" => 6,
            "snake" => 7,
            "lizard" => 8,
            "horse" => 9,
            "other" => 10,
            _ => return None,
        };
        Some(self.categories[index])
    }
}

static FR: Strings = Strings {
    missing_identifier: "ID de l'animal non fourni",
    lookup_failed: "Erreur lors du chargement des informations de l'animal",
    phone_unavailable: "Numéro de téléphone non disponible",
    location_unavailable:
        "Impossible d'accéder à votre localisation. Assurez-vous d'avoir donné les permissions.",
    location_unsupported: "La géolocalisation n'est pas supportée par votre appareil",
    invalid_configuration: "Configuration invalide",
    share_prompt_header: "Choisir le moyen",
    share_prompt_message: "Comment voulez-vous partager votre localisation ?",
    share_cancel: "Annuler",
    found_sentence: "J'ai trouvé ton animal et voilà ma localisation :",
    placeholder: "-",
    categories: [
        "Chien", "Chat", "Oiseau", "Lapin", "Hamster", "Poisson", "Tortue", "Serpent", "Lézard",
        "Cheval", "Autre",
    ],
};

static EN: Strings = Strings {
    missing_identifier: "Pet ID not provided",
    lookup_failed: "Error while loading the pet's information",
    phone_unavailable: "Phone number not available",
    location_unavailable:
        "Unable to access your location. Make sure you have granted the permission.",
    location_unsupported: "Geolocation is not supported by your device",
    invalid_configuration: "Invalid configuration",
    share_prompt_header: "Choose a method",
    share_prompt_message: "How would you like to share your location?",
    share_cancel: "Cancel",
    found_sentence: "I found your pet and here is my location:",
    placeholder: "-",
    categories: [
        "Dog", "Cat", "Bird", "Rabbit", "Hamster", "Fish", "Turtle", "Snake", "Lizard", "Horse",
        "Other",
    ],
};
