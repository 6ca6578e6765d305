use rand::Rng;
use tokio::sync::broadcast::{Receiver, Sender, channel};
use tokio_stream::wrappers::BroadcastStream;

const CELEBRATION_EMOJI: &[&str] = &["🎉", "✅", "🙌", "🚀", "✨", "👏", "💯", "🔥"];

fn random_emoji() -> &'static str {
    CELEBRATION_EMOJI[rand::rng().random_range(0..CELEBRATION_EMOJI.len())]
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Loading,
}

/// A transient, non-blocking toast. Never alters navigation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// Success toasts get a celebration emoji, same as the old admin UI.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: format!("{} {}", text.into(), random_emoji()),
        }
    }

    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn loading(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Loading,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notifier {
    sender: Sender<Notice>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = channel(16);
        Self { sender: tx }
    }

    pub fn subscribe(&self) -> Receiver<Notice> {
        self.sender.subscribe()
    }

    pub fn stream(&self) -> BroadcastStream<Notice> {
        BroadcastStream::new(self.subscribe())
    }

    /// Sending with no subscribers is fine; the toast just goes unseen.
    pub fn send(&self, notice: Notice) {
        let _ = self.sender.send(notice);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.send(Notice::success(text));
    }

    pub fn failure(&self, text: impl Into<String>) {
        self.send(Notice::failure(text));
    }

    pub fn loading(&self, text: impl Into<String>) {
        self.send(Notice::loading(text));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
