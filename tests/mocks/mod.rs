pub mod mock_analytics;
pub mod mock_form_view;
pub mod mock_submitter;
pub mod mock_surface;

#[allow(unused_imports)]
pub use mock_analytics::MockAnalytics;
#[allow(unused_imports)]
pub use mock_form_view::MockFormView;
#[allow(unused_imports)]
pub use mock_submitter::{MockResponse, MockSubmitter};
#[allow(unused_imports)]
pub use mock_surface::MockSurface;
