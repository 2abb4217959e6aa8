use std::sync::Arc;

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "restaurant";

/// `Logger` port backed by the global `tracing` subscriber.
///
/// Every event carries a `component` field (`catalog`, `cart`, `checkout`...)
/// so one area can be filtered out of the combined output.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn shared(component: &'static str) -> Arc<dyn Logger> {
        Arc::new(Self::new(component))
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_component_name() {
        let logger = TracingLogger::new("checkout");

        assert_eq!(logger.component(), "checkout");
    }

    #[test]
    fn should_log_without_installed_subscriber() {
        let logger = TracingLogger::shared("cart");

        logger.info("cart updated");
        logger.warn("cart store unavailable");
    }
}
