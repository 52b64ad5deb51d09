use crate::constants::{ERROR_ID, HELP_ID, INFO_ID, SHOW_CLASS};
use fractal_core::{MessageBoard, MessageKind};
use web_sys as web;

#[inline]
fn set_shown(document: &web::Document, id: &str, shown: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = if shown {
            cl.add_1(SHOW_CLASS)
        } else {
            cl.remove_1(SHOW_CLASS)
        };
    }
}

#[inline]
pub fn is_shown(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(SHOW_CLASS))
        .unwrap_or(false)
}

#[inline]
pub fn set_help(document: &web::Document, visible: bool) {
    if is_shown(document, HELP_ID) != visible {
        set_shown(document, HELP_ID, visible);
    }
}

/// Mirror the message board into the info/error elements.
pub fn render_messages(document: &web::Document, board: &MessageBoard) {
    match board.current() {
        Some(msg) => {
            let (target, other) = match msg.kind {
                MessageKind::Info => (INFO_ID, ERROR_ID),
                MessageKind::Error => (ERROR_ID, INFO_ID),
            };
            if let Some(el) = document.get_element_by_id(target) {
                el.set_text_content(Some(&msg.text));
            }
            set_shown(document, other, false);
            set_shown(document, target, true);
        }
        None => {
            set_shown(document, INFO_ID, false);
            set_shown(document, ERROR_ID, false);
        }
    }
}
