use std::time::Duration;

pub use wallet_ui::component::notification::Kind;

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: Kind,
    pub title: String,
    pub description: Option<String>,
    /// Display duration, the default one if not set.
    pub duration: Option<Duration>,
}

impl Toast {
    fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            duration: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Toasts currently displayed, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: u64,
    list: Vec<(u64, Toast)>,
}

impl Toasts {
    /// Returns the id of the new toast.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.list.push((id, toast));
        id
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let len = self.list.len();
        self.list.retain(|(i, _)| *i != id);
        self.list.len() != len
    }

    pub fn list(&self) -> &[(u64, Toast)] {
        &self.list
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Toast::success("Switched to Solana network"));
        let second = toasts.push(
            Toast::info("Help Center")
                .with_description("Contact support@blockchainwallet.com for assistance.")
                .with_duration(Duration::from_secs(5)),
        );
        assert!(second > first);
        assert_eq!(toasts.list().len(), 2);

        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.list()[0].0, second);
        assert_eq!(toasts.list()[0].1.kind, Kind::Info);

        // Ids are never reused.
        let third = toasts.push(Toast::error("Failed to load wallet data"));
        assert!(third > second);
        assert!(toasts.dismiss(second));
        assert!(toasts.dismiss(third));
        assert!(toasts.is_empty());
    }
}
