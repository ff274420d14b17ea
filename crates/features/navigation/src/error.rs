use std::borrow::Cow;
use thiserror::Error;

/// Error types specific to the navigation feature.
///
/// An unrecognized firm type is the only fatal condition in normal
/// operation; unknown module ids and defective remote payloads are
/// resolved locally and never surface here.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal navigation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
