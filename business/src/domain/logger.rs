use crate::domain::photo::model::PhotoPayload;

/// Logging port shared by the use cases and the client session.
///
/// Photo payloads never appear in log lines; `photo` references one by
/// fingerprint instead.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    fn photo(&self, action: &str, photo: &PhotoPayload) {
        self.info(&format!(
            "{} photo {} ({}, {} bytes)",
            action,
            photo.fingerprint(),
            photo.media_type(),
            photo.len()
        ));
    }
}
