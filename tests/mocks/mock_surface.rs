use contact_form_core::notifications::{Toast, ToastId};
use contact_form_core::ui::NotificationSurface;
use std::sync::{Arc, Mutex};

/// Mock notification surface for testing.
///
/// Tracks which toast nodes are attached and logs every call in order.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSurface {
    mounted: Arc<Mutex<Vec<Toast>>>,
    events: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts currently attached.
    pub fn mounted(&self) -> Vec<Toast> {
        self.mounted.lock().unwrap().clone()
    }

    /// Messages of the attached toasts.
    pub fn messages(&self) -> Vec<String> {
        self.mounted().into_iter().map(|t| t.message).collect()
    }

    /// Calls received, e.g. `["mount 1", "exit 1", "detach 1"]`.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .count()
    }
}

impl NotificationSurface for MockSurface {
    fn mount(&self, toast: &Toast) {
        self.events.lock().unwrap().push(format!("mount {}", toast.id));
        self.mounted.lock().unwrap().push(toast.clone());
    }

    fn start_exit(&self, id: ToastId) {
        self.events.lock().unwrap().push(format!("exit {}", id));
    }

    fn detach(&self, id: ToastId) {
        self.events.lock().unwrap().push(format!("detach {}", id));
        self.mounted.lock().unwrap().retain(|toast| toast.id != id);
    }
}
