/// Logging port used by the application layer.
/// Adapters decide where the lines go (see the `logger` crate).
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
