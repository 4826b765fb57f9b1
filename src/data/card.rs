//! Contains representations for card data.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Everything the form collects for one card.
///
/// The rendered date is not part of the data: it is read from a
/// [`Clock`](crate::clock::Clock) whenever the scene is composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardData {
    pub name: String,
    pub friend_code: String,
    pub favorite_weapon: String,
    #[serde(deserialize_with = "text")]
    pub level: String,
    #[serde(deserialize_with = "text")]
    pub rank_level: String,
    /// `None` when the source named a voice chat this card does not know.
    #[serde(deserialize_with = "lenient_voice_chat")]
    pub voice_chat: Option<VoiceChat>,
    pub favorite_play_rules: BTreeSet<PlayRule>,
    pub acceptable_play_rules: BTreeSet<PlayRule>,
    pub memo: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceChat {
    Discord,
    Line,
    NintendoSwitchOnline,
    None,
}

impl VoiceChat {
    pub const ALL: [VoiceChat; 4] = [
        VoiceChat::Discord,
        VoiceChat::Line,
        VoiceChat::NintendoSwitchOnline,
        VoiceChat::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceChat::Discord => "DISCORD",
            VoiceChat::Line => "LINE",
            VoiceChat::NintendoSwitchOnline => "NINTENDO_SWITCH_ONLINE",
            VoiceChat::None => "NONE",
        }
    }
}

impl FromStr for VoiceChat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceChat::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown voice chat `{s}`"))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayRule {
    TurfWar,
    SalmonRun,
    TableturfBattle,
    SplatZones,
    Rainmaker,
    TowerControl,
    ClamBlitz,
}

impl PlayRule {
    pub const ALL: [PlayRule; 7] = [
        PlayRule::TurfWar,
        PlayRule::SalmonRun,
        PlayRule::TableturfBattle,
        PlayRule::SplatZones,
        PlayRule::Rainmaker,
        PlayRule::TowerControl,
        PlayRule::ClamBlitz,
    ];
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or an integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.to_string())
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.to_string())
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.to_string())
    }
}

/// Levels are free text on the card, but data files often carry them as numbers.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}

struct VoiceChatVisitor;

impl<'de> Visitor<'de> for VoiceChatVisitor {
    type Value = Option<VoiceChat>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a voice chat name")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.parse::<VoiceChat>().ok())
    }
}

fn lenient_voice_chat<'de, D>(deserializer: D) -> Result<Option<VoiceChat>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(VoiceChatVisitor)
}
