use std::sync::Arc;

use iced::Task;
use wallet_ui::{component::form, widget::*};

use crate::{
    app::{
        cache::Cache,
        error::Error,
        message::Message,
        notification::Toast,
        state::State,
        view::{self, SendMessage},
    },
    backend::Backend,
};

/// Returns the amount if it is a finite number strictly above zero.
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

#[derive(Default)]
pub struct SendPanel {
    recipient: form::Value<String>,
    amount: form::Value<String>,
    sending: bool,
}

impl SendPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn recipient(&self) -> &str {
        &self.recipient.value
    }

    pub fn amount(&self) -> &str {
        &self.amount.value
    }

    fn submit(&mut self, backend: Arc<dyn Backend + Sync + Send>, cache: &Cache) -> Task<Message> {
        if self.sending {
            return Task::none();
        }

        let recipient = self.recipient.value.trim().to_string();
        if recipient.is_empty() {
            self.recipient.valid = false;
            return Task::done(Message::Notify(Toast::error(
                "Please enter a recipient address",
            )));
        }

        let Some(amount) = parse_amount(&self.amount.value) else {
            self.amount.valid = false;
            return Task::done(Message::Notify(Toast::error("Please enter a valid amount")));
        };

        self.sending = true;
        let network = cache.network();
        tracing::info!("Sending {} {} to {}", amount, network.ticker(), recipient);
        Task::perform(
            async move {
                backend
                    .send_transaction(network, recipient, amount)
                    .await
                    .map_err(Error::from)
            },
            Message::TransactionSubmitted,
        )
    }
}

impl State for SendPanel {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message> {
        view::send::send_form(cache.network(), &self.recipient, &self.amount, self.sending)
    }

    fn update(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::Send(msg)) => match msg {
                SendMessage::RecipientEdited(recipient) => {
                    self.recipient.value = recipient;
                    self.recipient.valid = true;
                }
                SendMessage::AmountEdited(amount) => {
                    self.amount.value = amount;
                    self.amount.valid = true;
                }
                SendMessage::Submit => return self.submit(backend, cache),
            },
            Message::TransactionSubmitted(res) => {
                self.sending = false;
                if res.is_ok() {
                    self.recipient = form::Value::default();
                    self.amount = form::Value::default();
                }
            }
            _ => {}
        }
        Task::none()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::wallet::{wallet_data, Network},
        backend::BackendError,
        utils::{
            mock::{Call, MockBackend},
            sandbox::Sandbox,
        },
    };

    fn connected_cache(network: Network) -> Cache {
        let mut cache = Cache::new(network);
        cache.session.connect();
        cache
            .session
            .set_wallet_data(network, wallet_data(network));
        cache
    }

    fn edit(msg: SendMessage) -> Message {
        Message::View(view::Message::Send(msg))
    }

    async fn fill(
        backend: Arc<MockBackend>,
        cache: &Cache,
        recipient: &str,
        amount: &str,
    ) -> Sandbox<SendPanel> {
        Sandbox::new(SendPanel::new())
            .update(
                backend.clone(),
                cache,
                edit(SendMessage::RecipientEdited(recipient.to_string())),
            )
            .await
            .update(
                backend,
                cache,
                edit(SendMessage::AmountEdited(amount.to_string())),
            )
            .await
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0.1"), Some(0.1));
        assert_eq!(parse_amount(" 2 "), Some(2.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("0.0"), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[tokio::test]
    async fn test_empty_recipient() {
        let backend = Arc::new(MockBackend::default());
        let cache = connected_cache(Network::Ethereum);
        let sandbox = fill(backend.clone(), &cache, "   ", "0.5")
            .await
            .update(backend.clone(), &cache, edit(SendMessage::Submit))
            .await;

        assert!(sandbox.notified("Please enter a recipient address"));
        assert!(!sandbox.state().is_sending());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_amount() {
        let backend = Arc::new(MockBackend::default());
        let cache = connected_cache(Network::Ethereum);
        for amount in ["", "0", "0.000", "-3", "."] {
            let sandbox = fill(backend.clone(), &cache, "0xabcdef1234567890", amount)
                .await
                .update(backend.clone(), &cache, edit(SendMessage::Submit))
                .await;

            assert!(sandbox.notified("Please enter a valid amount"));
            assert_eq!(sandbox.state().recipient(), "0xabcdef1234567890");
        }
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_send() {
        let backend = Arc::new(MockBackend::default());
        let cache = connected_cache(Network::Solana);
        let sandbox = fill(backend.clone(), &cache, "0xabcdef1234567890", "1.5")
            .await
            .update(backend.clone(), &cache, edit(SendMessage::Submit))
            .await;

        assert_eq!(
            backend.calls(),
            vec![Call::SendTransaction(
                Network::Solana,
                "0xabcdef1234567890".to_string(),
                1.5
            )]
        );
        let panel = sandbox.state();
        assert!(!panel.is_sending());
        assert!(panel.recipient().is_empty());
        assert!(panel.amount().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_keeps_inputs() {
        let backend = Arc::new(MockBackend::default().fail_send(BackendError::Rejected(
            "insufficient funds".to_string(),
        )));
        let cache = connected_cache(Network::Ethereum);
        let sandbox = fill(backend.clone(), &cache, "0xabcdef1234567890", "1")
            .await
            .update(backend.clone(), &cache, edit(SendMessage::Submit))
            .await;

        assert_eq!(backend.calls().len(), 1);
        let panel = sandbox.state();
        assert!(!panel.is_sending());
        assert_eq!(panel.recipient(), "0xabcdef1234567890");
        assert_eq!(panel.amount(), "1");
    }

    #[tokio::test]
    async fn test_duplicate_submit_ignored() {
        let backend: Arc<dyn Backend + Sync + Send> = Arc::new(MockBackend::default());
        let cache = connected_cache(Network::Ethereum);
        let mut panel = SendPanel::new();
        let _ = panel.update(
            backend.clone(),
            &cache,
            edit(SendMessage::RecipientEdited("0xabcdef1234567890".to_string())),
        );
        let _ = panel.update(
            backend.clone(),
            &cache,
            edit(SendMessage::AmountEdited("1".to_string())),
        );

        let _ = panel.update(backend.clone(), &cache, edit(SendMessage::Submit));
        assert!(panel.is_sending());
        let second = panel.update(backend.clone(), &cache, edit(SendMessage::Submit));
        assert!(iced_runtime::task::into_stream(second).is_none());

        panel.reset();
        assert!(!panel.is_sending());
        assert!(panel.recipient().is_empty());
    }
}
