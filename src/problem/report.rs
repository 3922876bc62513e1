//! Destinations for diagnostic messages

use tracing::error;

/// Somewhere to send human readable diagnostics. Reporting never affects
/// what the scanner does next.
pub trait Report {
    fn report(&mut self, diagnostic: String);
}

/// Emit diagnostics as error events via tracing.
pub struct Log;

impl Report for Log {
    fn report(&mut self, diagnostic: String) {
        error!("{}", diagnostic);
    }
}

/// Keep diagnostics for later inspection.
impl Report for Vec<String> {
    fn report(&mut self, diagnostic: String) {
        self.push(diagnostic);
    }
}
