//! Logging shorthands shared by every crate of the workspace.

#[doc(hidden)]
pub use tracing as __tracing;

/// Logs a positive outcome. The cli renders these with their own symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::macros::__tracing::info!(target: "preflight::success", $($arg)*)
    };
}
