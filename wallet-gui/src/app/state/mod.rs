mod send;
mod wallet_info;

use std::sync::Arc;

use iced::Task;
use wallet_ui::widget::*;

use super::{cache::Cache, message::Message, view};
use crate::backend::Backend;

pub use send::SendPanel;
pub use wallet_info::WalletInfoPanel;

/// A panel of the dashboard, owning its local state.
pub trait State {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message>;
    fn update(
        &mut self,
        _backend: Arc<dyn Backend + Sync + Send>,
        _cache: &Cache,
        _message: Message,
    ) -> Task<Message> {
        Task::none()
    }
    /// Drops the local state, the wallet was disconnected.
    fn reset(&mut self) {}
}
