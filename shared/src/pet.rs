//! The pet record served by the lookup API and the fixed tables used to
//! present it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::event::PetId;
use crate::locale::Locale;

/// Category of a pet: a code such as `dog` and an optional display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AnimalTypeWire")]
pub struct AnimalType {
    pub code: Option<String>,
    pub label: Option<String>,
}

// The API sends either `"dog"` or `{ "code": "dog", "label": "Chien" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnimalTypeWire {
    Code(String),
    Detailed {
        #[serde(default, alias = "value")]
        code: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<AnimalTypeWire> for AnimalType {
    fn from(wire: AnimalTypeWire) -> Self {
        match wire {
            AnimalTypeWire::Code(code) => Self {
                code: Some(code),
                label: None,
            },
            AnimalTypeWire::Detailed { code, label } => Self { code, label },
        }
    }
}

impl AnimalType {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        non_empty(self.code.as_deref())
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        non_empty(self.label.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    #[serde(deserialize_with = "pet_id")]
    pub id: PetId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub animal_type: Option<AnimalType>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

impl PetRecord {
    #[must_use]
    pub fn new(id: PetId) -> Self {
        Self {
            id,
            name: None,
            animal_type: None,
            phone_numbers: Vec::new(),
            breed: None,
            color: None,
            age: None,
            gender: None,
            description: None,
            photo_url: None,
            owner_name: None,
        }
    }

    #[must_use]
    pub fn category_code(&self) -> Option<&str> {
        self.animal_type.as_ref().and_then(AnimalType::code)
    }

    #[must_use]
    pub fn category_label(&self) -> Option<&str> {
        self.animal_type.as_ref().and_then(AnimalType::label)
    }

    /// First contact number, if the owner left any.
    #[must_use]
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_numbers.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_phone(&self) -> bool {
        !self.phone_numbers.is_empty()
    }

    #[must_use]
    pub fn icon(&self) -> PetIcon {
        PetIcon::for_label(self.category_label())
    }
}

/// Human-readable label for a category code.
///
/// Falls back in order: the loaded record's explicit label, the locale's static
/// table (case-insensitive), the code itself, then the placeholder dash.
#[must_use]
pub fn resolve_category_label(code: Option<&str>, record: Option<&PetRecord>, locale: Locale) -> String {
    if let Some(label) = record.and_then(PetRecord::category_label) {
        return label.to_owned();
    }

    let strings = locale.strings();
    match non_empty(code) {
        Some(code) => strings
            .category(&code.to_lowercase())
            .unwrap_or(code)
            .to_owned(),
        None => strings.placeholder.to_owned(),
    }
}

/// Decorative glyph shown next to the pet's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetIcon {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Hamster,
    Fish,
    Turtle,
    Snake,
    Lizard,
    Horse,
    #[default]
    Paw,
}

impl PetIcon {
    #[must_use]
    pub fn for_label(label: Option<&str>) -> Self {
        let key = non_empty(label).map_or_else(|| "other".to_owned(), str::to_lowercase);
        match key.as_str() {
            "dog" => Self::Dog,
            "cat" => Self::Cat,
            "bird" => Self::Bird,
            "rabbit" => Self::Rabbit,
            "hamster" => Self::Hamster,
            "fish" => Self::Fish,
            "turtle" => Self::Turtle,
            "snake" => Self::Snake,
            "lizard" => Self::Lizard,
            "horse" => Self::Horse,
            _ => Self::Paw,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dog => "🐕",
            Self::Cat => "🐱",
            Self::Bird => "🐦",
            Self::Rabbit => "🐰",
            Self::Hamster => "🐹",
            Self::Fish => "🐠",
            Self::Turtle => "🐢",
            Self::Snake => "🐍",
            Self::Lizard => "🦎",
            Self::Horse => "🐴",
            Self::Paw => "🐾",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

// Some backends serialise numeric primary keys.
fn pet_id<'de, D>(deserializer: D) -> Result<PetId, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(|v| PetId::new(v.into_text()))
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrNumber>::deserialize(deserializer).map(|v| v.map(TextOrNumber::into_text))
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record_with(animal_type: Option<AnimalType>) -> PetRecord {
        PetRecord {
            animal_type,
            ..PetRecord::new(PetId::new("1"))
        }
    }

    fn labelled(label: &str) -> Option<AnimalType> {
        Some(AnimalType {
            code: None,
            label: Some(label.into()),
        })
    }

    #[test]
    fn decodes_full_record() {
        let json = r#"{
            "id": "42",
            "name": "Rex",
            "animalType": { "code": "dog", "label": "Dog" },
            "phoneNumbers": ["21612345678", "+33 6 12 34 56 78"],
            "breed": "Labrador",
            "age": 3,
            "photoUrl": "https://cdn.example.com/rex.jpg",
            "microchip": "unused"
        }"#;
        let record: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "42");
        assert_eq!(record.name.as_deref(), Some("Rex"));
        assert_eq!(record.category_code(), Some("dog"));
        assert_eq!(record.category_label(), Some("Dog"));
        assert_eq!(record.primary_phone(), Some("21612345678"));
        assert_eq!(record.age.as_deref(), Some("3"));
        assert_eq!(record.photo_url.as_deref(), Some("https://cdn.example.com/rex.jpg"));
    }

    #[test]
    fn decodes_bare_category_code_and_numeric_id() {
        let record: PetRecord =
            serde_json::from_str(r#"{ "id": 7, "animalType": "cat" }"#).unwrap();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.category_code(), Some("cat"));
        assert_eq!(record.category_label(), None);
        assert!(!record.has_phone());
    }

    #[test]
    fn null_phone_list_is_empty() {
        let record: PetRecord =
            serde_json::from_str(r#"{ "id": "1", "phoneNumbers": null }"#).unwrap();
        assert!(record.phone_numbers.is_empty());
        assert_eq!(record.primary_phone(), None);
    }

    #[test]
    fn record_without_id_is_rejected() {
        assert!(serde_json::from_str::<PetRecord>(r#"{ "name": "Rex" }"#).is_err());
    }

    #[test]
    fn explicit_label_wins() {
        let record = record_with(labelled("Berger Allemand"));
        let label = resolve_category_label(Some("dog"), Some(&record), Locale::Fr);
        assert_eq!(label, "Berger Allemand");
    }

    #[test]
    fn uppercase_code_resolves_through_table() {
        assert_eq!(resolve_category_label(Some("DOG"), None, Locale::En), "Dog");
        assert_eq!(resolve_category_label(Some("DOG"), None, Locale::Fr), "Chien");

        let record = record_with(Some(AnimalType {
            code: Some("DOG".into()),
            label: None,
        }));
        assert_eq!(resolve_category_label(Some("DOG"), Some(&record), Locale::En), "Dog");
    }

    #[test]
    fn unknown_code_passes_through() {
        assert_eq!(resolve_category_label(Some("Ferret"), None, Locale::En), "Ferret");
    }

    #[test]
    fn nothing_available_gives_dash() {
        assert_eq!(resolve_category_label(None, None, Locale::En), "-");
        assert_eq!(resolve_category_label(Some(""), None, Locale::Fr), "-");

        let record = record_with(labelled(""));
        assert_eq!(resolve_category_label(None, Some(&record), Locale::En), "-");
    }

    #[test]
    fn blank_label_is_kept_verbatim() {
        let record = record_with(labelled(" "));
        assert_eq!(
            resolve_category_label(Some("dog"), Some(&record), Locale::Fr),
            " "
        );
        assert_eq!(resolve_category_label(Some(" "), None, Locale::Fr), " ");
        assert_eq!(record.icon(), PetIcon::Paw);
    }

    #[test]
    fn icon_uses_label_case_insensitively() {
        assert_eq!(record_with(labelled("Dog")).icon(), PetIcon::Dog);
        assert_eq!(record_with(labelled("HORSE")).icon(), PetIcon::Horse);
        assert_eq!(PetIcon::Dog.glyph(), "🐕");
    }

    #[test]
    fn icon_defaults_to_paw() {
        assert_eq!(record_with(None).icon(), PetIcon::Paw);
        assert_eq!(record_with(labelled("Ferret")).icon(), PetIcon::Paw);
        assert_eq!(record_with(labelled("other")).icon(), PetIcon::Paw);
        assert_eq!(PetIcon::Paw.glyph(), "🐾");
    }

    #[test]
    fn icons_are_distinct() {
        let icons = [
            PetIcon::Dog,
            PetIcon::Cat,
            PetIcon::Bird,
            PetIcon::Rabbit,
            PetIcon::Hamster,
            PetIcon::Fish,
            PetIcon::Turtle,
            PetIcon::Snake,
            PetIcon::Lizard,
            PetIcon::Horse,
            PetIcon::Paw,
        ];
        let glyphs: std::collections::HashSet<_> = icons.iter().map(|i| i.glyph()).collect();
        assert_eq!(glyphs.len(), icons.len());
    }

    proptest! {
        #[test]
        fn label_lookup_ignores_case(mask in proptest::collection::vec(any::<bool>(), 6)) {
            let code: String = "rabbit"
                .chars()
                .zip(mask)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(resolve_category_label(Some(&code), None, Locale::En), "Rabbit");
            prop_assert_eq!(PetIcon::for_label(Some(&code)), PetIcon::Rabbit);
        }
    }
}
