/// A trait for a display field receiving rendered text.
#[cfg_attr(test, mockall::automock)]
pub trait DisplaySink: Sync + Send {
    /// Replaces the displayed text.
    fn display(&self, text: &str);
}
