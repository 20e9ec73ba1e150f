//! Navigation side effects.

/// Platform navigation: a blocking alert and a page redirect.
pub trait Navigator {
    fn alert(&mut self, message: &str);
    fn redirect(&mut self, destination: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }

    fn redirect(&mut self, destination: &str) {
        (**self).redirect(destination);
    }
}

/// One navigation call, as seen by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Alert(String),
    Redirect(String),
}

/// Navigator that only remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Vec<NavEvent>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[NavEvent] {
        &self.events
    }

    /// Destination of the most recent redirect.
    #[must_use]
    pub fn last_redirect(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            NavEvent::Redirect(dest) => Some(dest.as_str()),
            NavEvent::Alert(_) => None,
        })
    }

    pub fn take(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Navigator for RecordingNavigator {
    fn alert(&mut self, message: &str) {
        self.events.push(NavEvent::Alert(message.to_string()));
    }

    fn redirect(&mut self, destination: &str) {
        self.events.push(NavEvent::Redirect(destination.to_string()));
    }
}
