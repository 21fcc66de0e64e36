//! Rejected drafts and submissions leave a warning in the logs, so bad
//! input stays observable in the log pane even though the error itself
//! only reaches the footer notice.

use std::sync::{Arc, Mutex};

use chef_station::services::{Cart, MenuService, OrderBook};
use shared::{Course, MenuItemDraft};
use tracing::{Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Clone, Default)]
struct WarnCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl<S: Subscriber> Layer<S> for WarnCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.messages.lock().unwrap().push(visitor.0);
        }
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Run `f` with a warn-collecting subscriber installed and return the
/// captured messages.
fn capture_warnings(f: impl FnOnce()) -> Vec<String> {
    let capture = WarnCapture::default();
    let messages = capture.messages.clone();
    let subscriber = tracing_subscriber::registry().with(capture);
    tracing::subscriber::with_default(subscriber, f);
    let collected = messages.lock().unwrap().clone();
    collected
}

#[test]
fn test_rejected_dish_drafts_log_warnings() {
    let warnings = capture_warnings(|| {
        let mut menu = MenuService::new();
        let _ = menu.add(&MenuItemDraft::new("", "", Course::Starters, ""));
        let _ = menu.add(&MenuItemDraft::new("Soup", "Tomato", Course::Starters, "abc"));
        menu.add(&MenuItemDraft::new("Soup", "Tomato", Course::Starters, "10"))
            .unwrap();
        let _ = menu.add(&MenuItemDraft::new("soup", "Again", Course::Mains, "12"));
    });

    assert!(warnings.iter().any(|m| m.contains("missing required fields")));
    assert!(warnings.iter().any(|m| m.contains("invalid price")));
    assert!(warnings.iter().any(|m| m.contains("duplicate name")));
}

#[test]
fn test_rejected_submissions_log_warnings() {
    let warnings = capture_warnings(|| {
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();
        let _ = orders.submit(&mut cart, "", "");
        let _ = orders.submit(&mut cart, "Alice", "");
    });

    assert!(warnings.iter().any(|m| m.contains("customer name missing")));
    assert!(warnings.iter().any(|m| m.contains("cart empty")));
}
