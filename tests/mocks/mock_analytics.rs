use contact_form_core::ui::{AnalyticsEvent, AnalyticsSink};
use std::sync::{Arc, Mutex};

/// Collects analytics events.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

#[allow(dead_code)]
impl MockAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsSink for MockAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
