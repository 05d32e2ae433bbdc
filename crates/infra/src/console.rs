// crates/infra/src/console.rs
use covfilter_ports::notify::Notifier;
use covfilter_shared_kernel::Result;

/// Writes single-line warnings to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) -> Result<()> {
        eprintln!("{message}");
        Ok(())
    }
}
