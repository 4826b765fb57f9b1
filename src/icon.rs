//! Resolves which hand-drawn marks are visible on a card.
//!
//! Voice chat gets one circle per choice. Each play rule gets a circle when it
//! is a favorite and a triangle when it is merely acceptable; both can be on.

use crate::data::{PlayRule, VoiceChat};
use crate::image::AssetKey;

use std::collections::BTreeSet;

/// Scale applied to the hand-drawn marks, which are drawn much larger than needed.
pub const ICON_SCALE: f64 = 0.2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IconShape {
    Circle,
    Triangle,
}

impl IconShape {
    pub fn asset(&self) -> AssetKey {
        match self {
            IconShape::Circle => AssetKey::Circle,
            IconShape::Triangle => AssetKey::Triangle,
        }
    }
}

/// What an icon marks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IconId {
    VoiceChat(VoiceChat),
    Favorite(PlayRule),
    Acceptable(PlayRule),
}

impl IconId {
    pub fn shape(&self) -> IconShape {
        match self {
            IconId::VoiceChat(_) | IconId::Favorite(_) => IconShape::Circle,
            IconId::Acceptable(_) => IconShape::Triangle,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IconSlot {
    pub id: IconId,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Clockwise, in degrees, around `(x, y)`.
    pub rotation: f64,
}

impl IconSlot {
    const fn at(id: IconId, x: f64, y: f64, rotation: f64) -> Self {
        Self {
            id,
            x,
            y,
            scale: ICON_SCALE,
            rotation,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedIcon {
    pub slot: IconSlot,
    pub visible: bool,
}

impl ResolvedIcon {
    pub fn shape(&self) -> IconShape {
        self.slot.id.shape()
    }

    pub fn opacity(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}

pub fn voice_chat_slot(voice_chat: VoiceChat) -> IconSlot {
    let id = IconId::VoiceChat(voice_chat);
    match voice_chat {
        VoiceChat::Discord => IconSlot::at(id, 310.0, 495.0, 0.0),
        VoiceChat::Line => IconSlot::at(id, 410.0, 498.0, 0.0),
        VoiceChat::NintendoSwitchOnline => IconSlot::at(id, 513.0, 498.0, 0.0),
        VoiceChat::None => IconSlot::at(id, 615.0, 500.0, 0.0),
    }
}

pub fn favorite_slot(rule: PlayRule) -> IconSlot {
    let id = IconId::Favorite(rule);
    match rule {
        PlayRule::TurfWar => IconSlot::at(id, 283.0, 645.0, 0.0),
        PlayRule::SalmonRun => IconSlot::at(id, 440.0, 643.0, 0.0),
        PlayRule::TableturfBattle => IconSlot::at(id, 592.0, 644.0, 0.0),
        PlayRule::SplatZones => IconSlot::at(id, 286.0, 730.0, 0.0),
        PlayRule::Rainmaker => IconSlot::at(id, 439.0, 732.0, 0.0),
        PlayRule::TowerControl => IconSlot::at(id, 592.0, 730.0, 0.0),
        PlayRule::ClamBlitz => IconSlot::at(id, 748.0, 728.0, 0.0),
    }
}

pub fn acceptable_slot(rule: PlayRule) -> IconSlot {
    let id = IconId::Acceptable(rule);
    match rule {
        PlayRule::TurfWar => IconSlot::at(id, 305.0, 640.0, 20.0),
        PlayRule::SalmonRun => IconSlot::at(id, 479.0, 634.0, 30.0),
        PlayRule::TableturfBattle => IconSlot::at(id, 690.0, 710.0, 150.0),
        PlayRule::SplatZones => IconSlot::at(id, 325.0, 725.0, 35.0),
        PlayRule::Rainmaker => IconSlot::at(id, 496.0, 723.0, 45.0),
        PlayRule::TowerControl => IconSlot::at(id, 585.0, 805.0, -80.0),
        PlayRule::ClamBlitz => IconSlot::at(id, 745.0, 812.0, -90.0),
    }
}

/// Computes every icon with its visibility.
///
/// Voice chat icons come first in [`VoiceChat::ALL`] order, then each rule of
/// [`PlayRule::ALL`] contributes its favorite icon followed by its acceptable one.
pub fn resolve(
    voice_chat: Option<VoiceChat>,
    favorite: &BTreeSet<PlayRule>,
    acceptable: &BTreeSet<PlayRule>,
) -> Vec<ResolvedIcon> {
    let voice = VoiceChat::ALL.into_iter().map(|v| ResolvedIcon {
        slot: voice_chat_slot(v),
        visible: voice_chat == Some(v),
    });
    let rules = PlayRule::ALL.into_iter().flat_map(|rule| {
        [
            ResolvedIcon {
                slot: favorite_slot(rule),
                visible: favorite.contains(&rule),
            },
            ResolvedIcon {
                slot: acceptable_slot(rule),
                visible: acceptable.contains(&rule),
            },
        ]
    });
    voice.chain(rules).collect()
}
