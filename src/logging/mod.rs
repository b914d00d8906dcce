//! Logger adapter injected into the service layer.
//!
//! The service logs through this capability rather than the `log` macros
//! directly, so tests can verify the exact templates, argument lists, and
//! call counts each operation emits.

use crate::errors::RepositoryError;

/// Structured logging capability consumed by the service layer.
///
/// `template` is a positional format string; each `{}` placeholder is
/// substituted with the next entry of `args` in order.
pub trait LoggerAdapter: Send + Sync {
    fn info(&self, template: &str, args: &[String]);
    fn error(&self, error: &RepositoryError, template: &str, args: &[String]);
}

/// Production adapter backed by the `log` facade.
pub struct LogAdapter;

impl LoggerAdapter for LogAdapter {
    fn info(&self, template: &str, args: &[String]) {
        log::info!("{}", render(template, args));
    }

    fn error(&self, error: &RepositoryError, template: &str, args: &[String]) {
        log::error!("{}: {}", render(template, args), error);
    }
}

/// Substitute each `{}` placeholder with the next argument in order.
/// Placeholders beyond the argument list are left as-is.
fn render(template: &str, args: &[String]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut remaining = template;
    let mut args = args.iter();

    while let Some(pos) = remaining.find("{}") {
        rendered.push_str(&remaining[..pos]);
        match args.next() {
            Some(arg) => rendered.push_str(arg),
            None => rendered.push_str("{}"),
        }
        remaining = &remaining[pos + 2..];
    }
    rendered.push_str(remaining);
    rendered
}
