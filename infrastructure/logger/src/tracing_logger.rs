use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port adapter that forwards every message to `tracing`,
/// tagged with the component that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("recipe-snap")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recipe_snap", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recipe_snap", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recipe_snap", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recipe_snap", component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_recipe_snap_component() {
        assert_eq!(TracingLogger::default().component(), "recipe-snap");
    }

    #[test]
    fn should_log_without_installed_subscriber() {
        let logger = TracingLogger::new("test");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.debug("debug");
    }
}
