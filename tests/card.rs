use gamecard::clock::FixedClock;
use gamecard::data::{CardData, PlayRule, VoiceChat};
use gamecard::export::{Download, EncodedImage, DOWNLOAD_FILENAME};
use gamecard::image::{AssetKey, Raster};
use gamecard::layout::FieldId;
use gamecard::stage::{StageGeometry, Viewer};
use gamecard::{GameCard, Result};

use cairo::{Context, Format, ImageSurface};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::rc::Rc;
use time::macros::date;

#[derive(Clone, Default)]
struct Frames(Rc<RefCell<Vec<StageGeometry>>>);

impl Frames {
    fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl Viewer for Frames {
    fn present(&mut self, geometry: StageGeometry, surface: &ImageSurface) {
        assert_eq!((surface.width(), surface.height()), (geometry.width, geometry.height));
        self.0.borrow_mut().push(geometry);
    }
}

#[derive(Clone, Default)]
struct Saved(Rc<RefCell<Vec<(String, EncodedImage)>>>);

impl Download for Saved {
    fn save(&mut self, filename: &str, image: &EncodedImage) -> Result<()> {
        self.0.borrow_mut().push((filename.to_string(), image.clone()));
        Ok(())
    }
}

fn sample() -> CardData {
    CardData {
        name: "Agent 3".into(),
        friend_code: "SW-1234-5678-9012".into(),
        favorite_weapon: "Hero Shot".into(),
        level: "42".into(),
        rank_level: "S+".into(),
        voice_chat: Some(VoiceChat::Discord),
        favorite_play_rules: BTreeSet::from([PlayRule::TurfWar]),
        acceptable_play_rules: BTreeSet::from([PlayRule::SalmonRun]),
        memo: "Stay fresh!".into(),
    }
}

fn card(saved: &Saved, frames: &Frames) -> GameCard {
    GameCard::new(sample(), saved.clone())
        .with_clock(FixedClock(date!(2022 - 09 - 09)))
        .with_viewer(frames.clone())
}

fn solid(w: i32, h: i32, rgb: (f64, f64, f64)) -> Raster {
    let surface = ImageSurface::create(Format::ARgb32, w, h).unwrap();
    {
        let cr = Context::new(&surface).unwrap();
        cr.set_source_rgb(rgb.0, rgb.1, rgb.2);
        cr.paint().unwrap();
    }
    surface.flush();
    surface.into()
}

fn pixel(image: &EncodedImage, x: usize, y: usize) -> [u8; 4] {
    let decoder = png::Decoder::new(Cursor::new(image.bytes()));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgba);
    let i = (y * info.width as usize + x) * 4;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

// scaled marks are filtered, so allow a little rounding
fn is_blue(px: [u8; 4]) -> bool {
    px[0] < 16 && px[1] < 16 && px[2] > 240 && px[3] > 240
}

#[test]
fn mount_scales_to_container() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    assert_eq!(card.geometry(), None);
    assert!(card.mount(960.0).is_some());
    assert_eq!(card.scale(), 0.5);
    assert_eq!(
        card.geometry(),
        Some(StageGeometry {
            width: 960,
            height: 540,
            scale: 0.5
        })
    );
    assert_eq!(frames.count(), 1);
}

#[test]
fn mount_happens_once() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let trigger = card.mount(480.0);
    assert!(trigger.is_some());
    assert!(card.mount(1920.0).is_none());
    assert_eq!(card.scale(), 0.25);
    assert_eq!(card.geometry().map(|g| g.width), Some(480));
}

#[test]
fn unmeasured_container_has_zero_scale() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let trigger = card.mount(0.0).unwrap();
    assert_eq!(card.scale(), 0.0);
    assert_eq!(card.geometry().map(|g| (g.width, g.height)), Some((0, 0)));
    let image = trigger.export().unwrap();
    assert_eq!(image.dimensions().unwrap(), (1920, 1080));
}

#[test]
fn export_is_native_whatever_the_width() {
    for width in [480.0, 960.0, 1920.0] {
        let (saved, frames) = (Saved::default(), Frames::default());
        let card = card(&saved, &frames);
        let trigger = card.mount(width).unwrap();
        trigger.call();
        let saved = saved.0.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, DOWNLOAD_FILENAME);
        assert_eq!(saved[0].1.dimensions().unwrap(), (1920, 1080));
    }
}

#[test]
fn export_restores_stage_without_presenting() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let trigger = card.mount(960.0).unwrap();
    let before = card.geometry();
    let presented = frames.count();
    trigger.call();
    assert_eq!(card.geometry(), before);
    assert_eq!(frames.count(), presented);
    assert!(frames
        .0
        .borrow()
        .iter()
        .all(|g| *g != StageGeometry::native()));
}

#[test]
fn exports_are_byte_identical() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    card.resolve(AssetKey::Template, solid(64, 64, (0.9, 0.9, 0.8)));
    let trigger = card.mount(960.0).unwrap();
    let first = trigger.export().unwrap();
    let second = trigger.export().unwrap();
    assert_eq!(first, second);
    assert_eq!(saved.0.borrow().len(), 2);
}

#[test]
fn dropped_card_export_is_a_no_op() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let trigger = card.mount(960.0).unwrap().into_fn();
    drop(card);
    trigger();
    assert!(saved.0.borrow().is_empty());
}

#[test]
fn rendered_date_comes_from_clock() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    assert_eq!(card.scene().text(FieldId::RenderedDate), Some("2022/9/9"));
    let card = card.with_date_style(gamecard::clock::DateStyle::En);
    assert_eq!(card.scene().text(FieldId::RenderedDate), Some("9/9/2022"));
}

#[test]
fn resolving_assets_redraws() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let trigger = card.mount(960.0).unwrap();
    assert_eq!(card.pending_assets(), AssetKey::ALL.to_vec());

    let empty = trigger.export().unwrap();
    assert_eq!(pixel(&empty, 0, 0)[3], 0);

    card.resolve(AssetKey::Template, solid(1920, 1080, (1.0, 0.0, 0.0)));
    assert_eq!(frames.count(), 2);
    assert_eq!(card.pending_assets(), vec![AssetKey::Circle, AssetKey::Triangle]);

    let image = trigger.export().unwrap();
    assert_eq!(pixel(&image, 0, 0), [255, 0, 0, 255]);
    assert_eq!(pixel(&image, 1919, 1079), [255, 0, 0, 255]);
}

#[test]
fn only_visible_icons_are_painted() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let trigger = card.mount(480.0).unwrap();
    // scaled by 0.2, a 100px mark covers 20px from its slot position
    card.resolve(AssetKey::Circle, solid(100, 100, (0.0, 0.0, 1.0)));

    let image = trigger.export().unwrap();
    // discord circle
    assert!(is_blue(pixel(&image, 315, 500)));
    // line circle
    assert_eq!(pixel(&image, 415, 503)[3], 0);
    // turf war favorite circle
    assert!(is_blue(pixel(&image, 288, 650)));
    // clam blitz favorite circle
    assert_eq!(pixel(&image, 753, 733)[3], 0);

    let mut data = card.data();
    data.voice_chat = Some(VoiceChat::Line);
    card.set_data(data);
    let image = trigger.export().unwrap();
    assert_eq!(pixel(&image, 315, 500)[3], 0);
    assert!(is_blue(pixel(&image, 415, 503)));
}

#[test]
fn unknown_voice_chat_hides_every_voice_icon() {
    let (saved, frames) = (Saved::default(), Frames::default());
    let card = card(&saved, &frames);
    let mut data = card.data();
    data.voice_chat = None;
    card.set_data(data);
    let trigger = card.mount(480.0).unwrap();
    card.resolve(AssetKey::Circle, solid(100, 100, (0.0, 0.0, 1.0)));
    let image = trigger.export().unwrap();
    for (x, y) in [(310, 495), (410, 498), (513, 498), (615, 500)] {
        assert_eq!(pixel(&image, x + 5, y + 5)[3], 0, "({x}, {y})");
    }
}
