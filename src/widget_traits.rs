/// Trait for widgets that can provide debug information
///
/// Widgets implement this so the F5 debug overlay can render a consistent
/// dump of their internal state.
pub trait DebugInfoProvider {
    /// Generate a formatted string containing debug information about the widget's state
    ///
    /// The output should be human-readable and include:
    /// - Widget name/type as a header
    /// - Current state (open/closed, highlight, query)
    /// - Any derived or cached data
    fn debug_info(&self) -> String;

    /// Optional: Get a short one-line summary of the widget state
    /// Useful for status lines
    fn debug_summary(&self) -> String {
        "No summary available".to_string()
    }
}
