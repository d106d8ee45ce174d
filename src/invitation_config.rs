// src/invitation_config.rs
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

const EMBEDDED_CONTENT: &str = include_str!("../content/invitation.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationConfig {
    pub title: String,
    pub couple: Couple,
    pub greeting: Greeting,
    pub event: EventInfo,
    pub hero_image: String,
    pub music: TrackConfig,
    pub gallery: Vec<String>,
    pub venue: Venue,
    pub contacts: Vec<Contact>,
    pub accounts: Accounts,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Couple {
    pub groom: Person,
    pub bride: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Name used in headings, e.g. "봉구".
    pub given_name: String,
    pub full_name: String,
    pub romanized: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub heading: String,
    pub lines: Vec<String>,
    pub families: Vec<FamilyLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyLine {
    pub parents: String,
    pub relation: String,
    pub child: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub year: u32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
    pub short_date: String,
    pub hero_line: String,
    pub venue_line: String,
    pub date_label: String,
    pub time_label: String,
    pub year_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub src: String,
    pub title: String,
    pub artist: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_looped")]
    pub looped: bool,
}

fn default_volume() -> f64 {
    0.3
}

fn default_looped() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub hall: String,
    pub address: String,
    pub map_image: String,
    pub transit: Vec<TransitRoute>,
    pub parking: Parking,
    pub advisory: Vec<String>,
    pub map_links: Vec<MapLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    pub station: String,
    pub lines: String,
    pub directions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parking {
    pub headline: String,
    pub detail: String,
    pub lots: Vec<String>,
    pub attendant_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    Naver,
    Kakao,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLink {
    pub provider: MapProvider,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub role: String,
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accounts {
    pub intro: Vec<String>,
    pub sides: Vec<AccountSide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSide {
    pub label: String,
    pub holders: Vec<AccountHolder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountHolder {
    pub id: String,
    pub label: String,
    pub bank: String,
    #[serde(default)]
    pub number: String,
}

impl AccountHolder {
    pub fn has_number(&self) -> bool {
        !self.number.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTone {
    Neutral,
    Rose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub icon: String,
    pub title: String,
    pub tone: NoticeTone,
    pub body: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

impl InvitationConfig {
    /// Content compiled into the bundle.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: InvitationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.music.src.trim().is_empty() {
            return Err(ConfigError::Invalid("music source is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.music.volume) {
            return Err(ConfigError::Invalid(format!(
                "music volume {} is outside 0.0..=1.0",
                self.music.volume
            )));
        }
        if !is_valid_date(self.event.year, self.event.month, self.event.day) {
            return Err(ConfigError::Invalid(format!(
                "event date {}-{}-{} does not exist",
                self.event.year, self.event.month, self.event.day
            )));
        }
        if let Some(contact) = self.contacts.iter().find(|c| c.phone.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "contact '{}' has no phone number",
                contact.name
            )));
        }
        Ok(())
    }

    /// Ids of gift-account holders listed without a number.
    pub fn blank_accounts(&self) -> Vec<&str> {
        self.accounts
            .sides
            .iter()
            .flat_map(|side| side.holders.iter())
            .filter(|holder| !holder.has_number())
            .map(|holder| holder.id.as_str())
            .collect()
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            src: String::from("wedding-song.mp3"),
            title: String::new(),
            artist: String::new(),
            volume: default_volume(),
            looped: default_looped(),
        }
    }
}

fn is_valid_date(year: u32, month: u32, day: u32) -> bool {
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}
