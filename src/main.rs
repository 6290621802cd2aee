//! Contact form - headless entry point
//!
//! Reads one form submission as `key=value` lines from stdin, runs it through
//! the same validation and submission flow the website uses, and prints the
//! outcome. Logs go to stderr.

use anyhow::Result;
use contact_form_core::reviews::seamless_reel;
use contact_form_core::ui::{ConsoleForm, ConsoleToasts, TracingAnalytics};
use contact_form_core::{
    AsyncFormClient, Config, ContactFormController, FormClient, FormFields, Metrics,
    NotificationCenter, NotificationTiming, ReviewsService, SubmissionOutcome,
};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const SUBMIT_LABEL: &str = "Send Message";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Form endpoint: {}", config.form_endpoint);
    let metrics = Metrics::new();

    // Reviews never block the form
    let reviews = ReviewsService::new(&config, metrics.clone());
    let links = match reviews.load().await {
        Ok(section) => {
            if let Some(summary) = &section.summary {
                let reel = seamless_reel(&summary.cards);
                info!(
                    rating = summary.rating_label.as_deref().unwrap_or("-"),
                    reel_cards = reel.len(),
                    "Reviews ready"
                );
            }
            section.links
        }
        Err(e) => {
            warn!("Could not load reviews: {}", e);
            reviews.links()
        }
    };
    if let Some(url) = &links.review {
        println!("Leave a review: {}", url);
    }
    if let Some(url) = &links.maps {
        println!("Find us on Google: {}", url);
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let fields = FormFields::from_lines(&input);

    let form = Arc::new(ConsoleForm::new(SUBMIT_LABEL).with_fields(fields));
    let toasts = Arc::new(ConsoleToasts::new());
    let notifications =
        NotificationCenter::new(toasts, NotificationTiming::from_config(&config));
    let submitter = Arc::new(AsyncFormClient::new(FormClient::new(
        &config,
        metrics.clone(),
    )));

    let mut controller = ContactFormController::new(form.clone(), submitter, notifications)
        .with_analytics(Arc::new(TracingAnalytics))
        .with_metrics(metrics.clone());

    let outcome = controller.handle_submit().await;

    if let SubmissionOutcome::Invalid(_) = outcome {
        for (field, message) in form.field_errors() {
            println!("{}: {}", field, message);
        }
    }

    let summary = metrics.summary();
    info!(
        "Outcome: {:?}, HTTP requests: {}, errors: {}",
        outcome, summary.http_requests_total, summary.http_errors_total
    );

    match outcome {
        SubmissionOutcome::Delivered => Ok(()),
        other => anyhow::bail!("Contact form was not delivered: {:?}", other),
    }
}
