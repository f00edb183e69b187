use crate::app::{
    history::History,
    wallet::{Network, Session},
};

/// The data shared by every view of the app.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub session: Session,
    pub history: History,
}

impl Cache {
    pub fn new(network: Network) -> Self {
        Self {
            session: Session::new(network),
            history: History::seed(),
        }
    }

    pub fn network(&self) -> Network {
        self.session.network
    }

    pub fn is_connected(&self) -> bool {
        self.session.connected
    }
}
