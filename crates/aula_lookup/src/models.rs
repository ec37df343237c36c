//! Response models for both catalogues.
//!
//! Field names follow the wire format. Unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `{name, url}` reference used by the character API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedLink {
    /// Display name.
    pub name: String,
    /// Resource URL, empty when unknown.
    #[serde(default)]
    pub url: String,
}

/// Paging block of a character search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total matches.
    pub count: u32,
    /// Total pages.
    pub pages: u32,
    /// Next page URL.
    pub next: Option<String>,
    /// Previous page URL.
    pub prev: Option<String>,
}

/// One page of character search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Paging metadata.
    #[serde(default)]
    pub info: PageInfo,
    /// Matches on this page.
    #[serde(default)]
    pub results: Vec<Character>,
}

/// A character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Numeric id.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// `Alive`, `Dead` or `unknown`.
    pub status: String,
    /// Species.
    pub species: String,
    /// Sub-type, often empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Gender.
    pub gender: String,
    /// Place of origin.
    pub origin: NamedLink,
    /// Last known location.
    pub location: NamedLink,
    /// Portrait URL.
    pub image: String,
    /// URLs of the episodes the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
    /// Record URL.
    #[serde(default)]
    pub url: String,
    /// Creation timestamp as sent by the API.
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// Number of episodes the character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Sub-type, or `"Unspecified"` when the API leaves it blank.
    pub fn kind_or_default(&self) -> &str {
        if self.kind.is_empty() {
            "Unspecified"
        } else {
            &self.kind
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} #{}", self.name, self.id)?;
        writeln!(f, "  Status:   {}", self.status)?;
        writeln!(f, "  Species:  {} ({})", self.species, self.kind_or_default())?;
        writeln!(f, "  Gender:   {}", self.gender)?;
        writeln!(f, "  Origin:   {}", self.origin.name)?;
        writeln!(f, "  Location: {}", self.location.name)?;
        writeln!(f, "  Episodes: {}", self.episode_count())?;
        write!(f, "  Image:    {}", self.image)
    }
}

/// `{name, url}` reference used by the creature API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
    /// Resource URL.
    #[serde(default)]
    pub url: String,
}

/// A creature's type in a given slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Slot order.
    pub slot: u8,
    /// The type.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A creature's ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// The ability.
    pub ability: NamedResource,
    /// Hidden abilities only appear under special conditions.
    #[serde(default)]
    pub is_hidden: bool,
    /// Slot order.
    #[serde(default)]
    pub slot: u8,
}

/// Dream-world artwork.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DreamWorld {
    /// Front artwork URL.
    pub front_default: Option<String>,
}

/// Alternative sprite sets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    /// Dream-world artwork, if any.
    #[serde(default)]
    pub dream_world: Option<DreamWorld>,
}

/// Sprite URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sprites {
    /// Default front sprite.
    pub front_default: Option<String>,
    /// Other sprite sets.
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// A creature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// National number.
    pub id: u32,
    /// Lower-case name.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Experience for defeating it, absent for some forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Types in slot order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Abilities in slot order.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: Sprites,
}

impl Creature {
    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Name with the first letter capitalised.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Type names joined with `", "`.
    pub fn type_names(&self) -> String {
        self.types
            .iter()
            .map(|t| t.kind.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Ability names joined with `", "`.
    pub fn ability_names(&self) -> String {
        self.abilities
            .iter()
            .map(|a| a.ability.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Dream-world artwork, falling back to the default sprite.
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.dream_world.as_ref())
            .and_then(|d| d.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} #{}", self.display_name(), self.id)?;
        writeln!(f, "  Height:     {:.1} m", self.height_m())?;
        writeln!(f, "  Weight:     {:.1} kg", self.weight_kg())?;
        writeln!(f, "  Types:      {}", capitalize(&self.type_names()))?;
        writeln!(f, "  Abilities:  {}", capitalize(&self.ability_names()))?;
        match self.base_experience {
            Some(xp) => writeln!(f, "  Experience: {}", xp)?,
            None => writeln!(f, "  Experience: -")?,
        }
        write!(f, "  Artwork:    {}", self.artwork().unwrap_or("-"))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature() -> Creature {
        serde_json::from_str(
            r#"{
                "id": 25, "name": "pikachu", "height": 4, "weight": 60,
                "base_experience": 112,
                "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
                "abilities": [
                    {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
                    {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
                ],
                "sprites": {"front_default": "front.png", "other": {"dream_world": {"front_default": null}}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_unit_conversions() {
        let c = creature();
        assert!((c.height_m() - 0.4).abs() < 1e-9);
        assert!((c.weight_kg() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_joined_names() {
        let c = creature();
        assert_eq!(c.type_names(), "electric");
        assert_eq!(c.ability_names(), "static, lightning-rod");
        assert_eq!(c.display_name(), "Pikachu");
    }

    #[test]
    fn test_artwork_falls_back_to_default_sprite() {
        let mut c = creature();
        assert_eq!(c.artwork(), Some("front.png"));
        c.sprites.other = Some(OtherSprites {
            dream_world: Some(DreamWorld {
                front_default: Some("dream.svg".into()),
            }),
        });
        assert_eq!(c.artwork(), Some("dream.svg"));
    }

    #[test]
    fn test_display_formats_one_decimal() {
        let text = creature().to_string();
        assert!(text.starts_with("Pikachu #25"));
        assert!(text.contains("0.4 m"));
        assert!(text.contains("6.0 kg"));
        assert!(text.contains("Static, lightning-rod"));
    }

    #[test]
    fn test_blank_kind_defaults() {
        let c: Character = serde_json::from_str(
            r#"{"id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human",
                "type": "", "gender": "Male",
                "origin": {"name": "Earth (C-137)", "url": ""},
                "location": {"name": "Citadel of Ricks", "url": ""},
                "image": "rick.jpeg", "episode": ["e1", "e2"]}"#,
        )
        .unwrap();
        assert_eq!(c.kind_or_default(), "Unspecified");
        assert_eq!(c.episode_count(), 2);
    }
}
