use std::sync::Arc;
use std::time::Duration;

use iced::Task;
use wallet_ui::widget::*;

use crate::{
    app::{cache::Cache, message::Message, notification::Toast, state::State, view},
    backend::Backend,
};

pub struct WalletInfoPanel {
    copied: bool,
    /// Number of copies so far, a reset only applies to the latest one.
    copies: u64,
    copied_reset: Duration,
}

impl WalletInfoPanel {
    pub fn new(copied_reset: Duration) -> Self {
        Self {
            copied: false,
            copies: 0,
            copied_reset,
        }
    }

    pub fn copied(&self) -> bool {
        self.copied
    }
}

impl State for WalletInfoPanel {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message> {
        if cache.is_connected() {
            view::wallet_info::wallet_info(&cache.session, self.copied)
        } else {
            view::wallet_info::not_connected()
        }
    }

    fn update(
        &mut self,
        _backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::CopyAddress) => {
                if cache.session.address.is_empty() {
                    return Task::none();
                }
                self.copied = true;
                self.copies += 1;
                let copy = self.copies;
                let reset = self.copied_reset;
                Task::batch(vec![
                    iced::clipboard::write(cache.session.address.clone()),
                    Task::done(Message::Notify(Toast::success("Address copied to clipboard"))),
                    Task::perform(async move { tokio::time::sleep(reset).await }, move |_| {
                        Message::CopiedReset(copy)
                    }),
                ])
            }
            Message::CopiedReset(copy) => {
                if copy == self.copies {
                    self.copied = false;
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn reset(&mut self) {
        self.copied = false;
    }
}
