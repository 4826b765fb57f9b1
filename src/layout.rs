//! Fixed placement of every text field on the card, in scene coordinates.

use crate::image::Color;

/// Width of the scene coordinate space.
pub const SCENE_WIDTH: f64 = 1920.0;
/// Height of the scene coordinate space.
pub const SCENE_HEIGHT: f64 = 1080.0;

pub const FONT_FAMILY: &str = "naikaifont";
pub const FONT_COLOR: Color = Color::hex(0x5c4c42);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    FriendCode,
    FavoriteWeapon,
    RenderedDate,
    Level,
    RankLevel,
    Memo,
}

impl FieldId {
    /// Fields in the order their text layers are stacked.
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::FriendCode,
        FieldId::FavoriteWeapon,
        FieldId::RenderedDate,
        FieldId::Level,
        FieldId::RankLevel,
        FieldId::Memo,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutSlot {
    pub id: FieldId,
    pub x: f64,
    pub y: f64,
    /// Text box as `(width, height)`. Unboxed text grows from `(x, y)`.
    pub size: Option<(f64, f64)>,
    pub align: HAlign,
    pub valign: VAlign,
    pub font_size: f64,
    pub font_family: &'static str,
    pub color: Color,
}

impl LayoutSlot {
    const fn boxed(
        id: FieldId,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        align: HAlign,
        font_size: f64,
    ) -> Self {
        Self {
            id,
            x,
            y,
            size: Some((w, h)),
            align,
            valign: VAlign::Middle,
            font_size,
            font_family: FONT_FAMILY,
            color: FONT_COLOR,
        }
    }

    const fn free(id: FieldId, x: f64, y: f64, font_size: f64) -> Self {
        Self {
            id,
            x,
            y,
            size: None,
            align: HAlign::Left,
            valign: VAlign::Top,
            font_size,
            font_family: FONT_FAMILY,
            color: FONT_COLOR,
        }
    }
}

static NAME: LayoutSlot =
    LayoutSlot::boxed(FieldId::Name, 300.0, 130.0, 480.0, 80.0, HAlign::Center, 48.0);
static FRIEND_CODE: LayoutSlot = LayoutSlot::free(FieldId::FriendCode, 368.0, 253.0, 36.0);
static FAVORITE_WEAPON: LayoutSlot =
    LayoutSlot::boxed(FieldId::FavoriteWeapon, 320.0, 360.0, 420.0, 80.0, HAlign::Center, 36.0);
static RENDERED_DATE: LayoutSlot =
    LayoutSlot::boxed(FieldId::RenderedDate, 1510.0, 518.0, 287.0, 50.0, HAlign::Center, 36.0);
static LEVEL: LayoutSlot =
    LayoutSlot::boxed(FieldId::Level, 1218.0, 695.0, 80.0, 80.0, HAlign::Center, 56.0);
static RANK_LEVEL: LayoutSlot =
    LayoutSlot::boxed(FieldId::RankLevel, 1452.0, 695.0, 80.0, 80.0, HAlign::Center, 56.0);
static MEMO: LayoutSlot =
    LayoutSlot::boxed(FieldId::Memo, 300.0, 860.0, 1480.0, 115.0, HAlign::Left, 48.0);

/// Looks up the slot a field is drawn into.
pub fn slot(id: FieldId) -> &'static LayoutSlot {
    match id {
        FieldId::Name => &NAME,
        FieldId::FriendCode => &FRIEND_CODE,
        FieldId::FavoriteWeapon => &FAVORITE_WEAPON,
        FieldId::RenderedDate => &RENDERED_DATE,
        FieldId::Level => &LEVEL,
        FieldId::RankLevel => &RANK_LEVEL,
        FieldId::Memo => &MEMO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_owns_its_slot() {
        for id in FieldId::ALL {
            assert_eq!(slot(id).id, id);
        }
    }

    #[test]
    fn slots_fit_in_scene() {
        for id in FieldId::ALL {
            let s = slot(id);
            let (w, h) = s.size.unwrap_or((0.0, 0.0));
            assert!(s.x >= 0.0 && s.x + w <= SCENE_WIDTH, "{id:?}");
            assert!(s.y >= 0.0 && s.y + h <= SCENE_HEIGHT, "{id:?}");
        }
    }

    #[test]
    fn friend_code_is_unboxed() {
        let s = slot(FieldId::FriendCode);
        assert_eq!(s.size, None);
        assert_eq!((s.x, s.y, s.font_size), (368.0, 253.0, 36.0));
    }

    #[test]
    fn memo_is_left_aligned_and_centered_vertically() {
        let s = slot(FieldId::Memo);
        assert_eq!(s.align, HAlign::Left);
        assert_eq!(s.valign, VAlign::Middle);
        assert_eq!(s.size, Some((1480.0, 115.0)));
    }
}
