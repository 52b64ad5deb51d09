use crate::constants::MESSAGE_HIDE_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    // Stamped by the first tick after the message was posted
    hide_at_ms: Option<f64>,
}

/// Single transient message slot; the last call wins and restarts the timer.
#[derive(Clone, Debug, Default)]
pub struct MessageBoard {
    current: Option<Message>,
    revision: u64,
}

impl MessageBoard {
    pub fn show_info(&mut self, text: impl Into<String>) {
        self.post(MessageKind::Info, text.into());
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.post(MessageKind::Error, text.into());
    }

    fn post(&mut self, kind: MessageKind, text: String) {
        match kind {
            MessageKind::Info => log::info!("[info] {}", text),
            MessageKind::Error => log::warn!("[error] {}", text),
        }
        self.current = Some(Message {
            kind,
            text,
            hide_at_ms: None,
        });
        self.revision += 1;
    }

    /// Expire the current message once its window has passed.
    pub fn tick(&mut self, now_ms: f64) {
        let Some(msg) = self.current.as_mut() else {
            return;
        };
        match msg.hide_at_ms {
            None => msg.hide_at_ms = Some(now_ms + MESSAGE_HIDE_MS),
            Some(at) if now_ms >= at => {
                self.current = None;
                self.revision += 1;
            }
            Some(_) => {}
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// Bumped on every show/hide so views can redraw only on change.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
