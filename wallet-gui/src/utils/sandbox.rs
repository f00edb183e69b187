use std::collections::VecDeque;
use std::sync::Arc;

use iced::{futures::StreamExt, Task};
use iced_runtime::{task::into_stream, Action};

use crate::{
    app::{cache::Cache, message::Message, notification::Toast, state::State, App},
    backend::Backend,
};

/// Runs `message` and every message produced by the resulting tasks until
/// nothing is left to run. Returns the messages in processing order.
async fn run<F>(mut update: F, message: Message) -> Vec<Message>
where
    F: FnMut(Message) -> Task<Message>,
{
    let mut processed = Vec::new();
    let mut queue = VecDeque::from([message]);
    while let Some(msg) = queue.pop_front() {
        processed.push(msg.clone());
        if let Some(mut stream) = into_stream(update(msg)) {
            while let Some(action) = stream.next().await {
                if let Action::Output(msg) = action {
                    queue.push_back(msg);
                }
            }
        }
    }
    processed
}

fn notified(messages: &[Message], title: &str) -> bool {
    messages
        .iter()
        .any(|msg| matches!(msg, Message::Notify(toast) if toast.title == title))
}

pub struct Sandbox<S: State> {
    state: S,
    messages: Vec<Message>,
}

impl<S: State + 'static> Sandbox<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            messages: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub async fn update(
        mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Self {
        let state = &mut self.state;
        let processed = run(|msg| state.update(backend.clone(), cache, msg), message).await;
        self.messages.extend(processed);
        self
    }

    /// Returns true if a toast with the given title was requested.
    pub fn notified(&self, title: &str) -> bool {
        notified(&self.messages, title)
    }
}

/// Drives the whole app.
pub struct AppSandbox {
    app: App,
    messages: Vec<Message>,
    /// Every toast displayed by the app, expired ones included.
    toasts: Vec<Toast>,
    last_toast: Option<u64>,
}

impl AppSandbox {
    pub fn new(app: App) -> Self {
        Self {
            app,
            messages: Vec::new(),
            toasts: Vec::new(),
            last_toast: None,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub async fn update(mut self, message: Message) -> Self {
        let app = &mut self.app;
        let toasts = &mut self.toasts;
        let last_toast = &mut self.last_toast;
        let processed = run(
            |msg| {
                let task = app.update(msg);
                // Toast ids only grow, the new ones come after the last seen.
                for (id, toast) in app.toasts().list() {
                    if last_toast.map_or(true, |last| *id > last) {
                        *last_toast = Some(*id);
                        toasts.push(toast.clone());
                    }
                }
                task
            },
            message,
        )
        .await;
        self.messages.extend(processed);
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns true if the app displayed a toast with the given title.
    pub fn notified(&self, title: &str) -> bool {
        self.toasts.iter().any(|toast| toast.title == title)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
