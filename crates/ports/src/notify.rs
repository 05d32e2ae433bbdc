// crates/ports/src/notify.rs
use covfilter_shared_kernel::Result;

/// Notification surface for single-line user-facing messages. How the
/// message is rendered is up to the implementation.
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str) -> Result<()>;
}
