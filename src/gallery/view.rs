use chrono::{Local, TimeZone};
use std::fmt::Display;

use crate::items::{Collection, ItemId, ItemKind, SavedItem};

pub const EMPTY_TITLE: &str = "No items saved yet";
pub const EMPTY_HINT: &str =
    "Right-click on any image or selected text on a webpage and choose \"Save to extension\"";

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    Cards(Vec<Card>),
}

impl GalleryView {
    pub fn cards(&self) -> &[Card] {
        match self {
            GalleryView::Cards(cards) => cards,
            GalleryView::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GalleryView::Empty { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: ItemId,
    pub kind: ItemKind,
    pub actions: Vec<CardAction>,
    pub body: CardBody,
    pub note: Option<String>,
    pub timestamp: String,
}

impl Card {
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn action_labels(&self) -> Vec<&'static str> {
        self.actions.iter().map(CardAction::label).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    Copy { text: String },
    EditNote { has_note: bool },
    Delete,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Copy { .. } => "Copy",
            CardAction::EditNote { has_note: true } => "Edit Note",
            CardAction::EditNote { has_note: false } => "Add Note",
            CardAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardBody {
    Image { src: String },
    Text { text: String },
}

/// Render with timestamps in the local time zone.
pub fn render(collection: &Collection) -> GalleryView {
    render_in(collection, &Local)
}

pub fn render_in<Tz>(collection: &Collection, tz: &Tz) -> GalleryView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if collection.is_empty() {
        return GalleryView::Empty {
            title: EMPTY_TITLE,
            hint: EMPTY_HINT,
        };
    }

    GalleryView::Cards(collection.items().iter().map(|i| card(i, tz)).collect())
}

fn card<Tz>(item: &SavedItem, tz: &Tz) -> Card
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let has_note = item.has_note();
    let (actions, body) = match item.kind {
        ItemKind::Image => (
            vec![CardAction::EditNote { has_note }, CardAction::Delete],
            CardBody::Image {
                src: item.content.clone(),
            },
        ),
        ItemKind::Text => (
            vec![
                CardAction::Copy {
                    text: item.content.clone(),
                },
                CardAction::Delete,
            ],
            CardBody::Text {
                text: item.content.clone(),
            },
        ),
    };

    Card {
        id: item.id,
        kind: item.kind,
        actions,
        body,
        note: if has_note { item.note.clone() } else { None },
        timestamp: format_timestamp(item.timestamp, tz),
    }
}

/// `1/31/2024, 3:04:05 PM`
pub fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => millis.to_string(),
    }
}
