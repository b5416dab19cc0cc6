use std::fmt::Write;

use super::view::{Card, CardAction, CardBody, GalleryView};

/// Popup markup for the items container.
pub fn render_html(view: &GalleryView) -> String {
    let mut out = String::new();
    match view {
        GalleryView::Empty { title, hint } => {
            let _ = write!(
                out,
                "<div class=\"empty-state\"><h3>{}</h3><p>{}</p></div>",
                escape(title),
                escape(hint)
            );
        }
        GalleryView::Cards(cards) => {
            for card in cards {
                write_card(&mut out, card);
            }
        }
    }
    out
}

fn write_card(out: &mut String, card: &Card) {
    let _ = write!(
        out,
        "<div class=\"item\"><div class=\"item-header\"><span class=\"item-type\">{}</span><div class=\"item-actions\">",
        card.type_label()
    );
    for action in &card.actions {
        write_action(out, card, action);
    }
    out.push_str("</div></div>");

    match &card.body {
        CardBody::Image { src } => {
            let _ = write!(
                out,
                "<img src=\"{}\" class=\"item-image\" alt=\"Saved image\">",
                escape(src)
            );
        }
        CardBody::Text { text } => {
            let _ = write!(out, "<div class=\"item-text\">{}</div>", escape(text));
        }
    }

    if let Some(note) = &card.note {
        let _ = write!(
            out,
            "<div class=\"item-note\"><div class=\"item-note-text\">{}</div></div>",
            escape(note)
        );
    }

    let _ = write!(
        out,
        "<div class=\"item-timestamp\">{}</div></div>",
        escape(&card.timestamp)
    );
}

fn write_action(out: &mut String, card: &Card, action: &CardAction) {
    let _ = match action {
        CardAction::Copy { text } => write!(
            out,
            "<button class=\"copy-btn\" data-text=\"{}\">{}</button>",
            escape(text),
            action.label()
        ),
        CardAction::EditNote { .. } => write!(
            out,
            "<button class=\"edit-note-btn\" data-id=\"{}\">{}</button>",
            card.id,
            action.label()
        ),
        CardAction::Delete => write!(
            out,
            "<button class=\"delete-btn\" data-id=\"{}\">{}</button>",
            card.id,
            action.label()
        ),
    };
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
