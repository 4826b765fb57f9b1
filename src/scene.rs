//! Turns card data into an ordered list of draw commands.

use crate::data::CardData;
use crate::icon::{self, ResolvedIcon};
use crate::image::AssetKey;
use crate::layout::{self, FieldId, LayoutSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub content: String,
    pub slot: &'static LayoutSlot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageCommand {
    pub asset: AssetKey,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl ImageCommand {
    fn background() -> Self {
        Self {
            asset: AssetKey::Template,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    fn icon(icon: &ResolvedIcon) -> Self {
        Self {
            asset: icon.shape().asset(),
            x: icon.slot.x,
            y: icon.slot.y,
            scale: icon.slot.scale,
            rotation: icon.slot.rotation,
            opacity: icon.opacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawLayer {
    Image(ImageCommand),
    Text(TextCommand),
}

/// Draw layers bottom to top: background, text, then icons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene(pub Vec<DrawLayer>);

impl Scene {
    pub fn compose(data: &CardData, rendered_date: &str) -> Self {
        let mut layers = vec![DrawLayer::Image(ImageCommand::background())];
        layers.extend(FieldId::ALL.into_iter().map(|id| {
            DrawLayer::Text(TextCommand {
                content: field_text(data, rendered_date, id).to_string(),
                slot: layout::slot(id),
            })
        }));
        let icons = icon::resolve(
            data.voice_chat,
            &data.favorite_play_rules,
            &data.acceptable_play_rules,
        );
        layers.extend(icons.iter().map(|i| DrawLayer::Image(ImageCommand::icon(i))));
        Self(layers)
    }

    pub fn layers(&self) -> &[DrawLayer] {
        &self.0
    }

    pub fn text(&self, id: FieldId) -> Option<&str> {
        self.0.iter().find_map(|layer| match layer {
            DrawLayer::Text(t) if t.slot.id == id => Some(t.content.as_str()),
            _ => None,
        })
    }
}

fn field_text<'a>(data: &'a CardData, rendered_date: &'a str, id: FieldId) -> &'a str {
    match id {
        FieldId::Name => &data.name,
        FieldId::FriendCode => &data.friend_code,
        FieldId::FavoriteWeapon => &data.favorite_weapon,
        FieldId::RenderedDate => rendered_date,
        FieldId::Level => &data.level,
        FieldId::RankLevel => &data.rank_level,
        FieldId::Memo => &data.memo,
    }
}
