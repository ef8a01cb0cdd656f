/// ProgressReporter port for reporting progress during a run
///
/// Progress is a side channel: implementations must never block or fail the
/// run they report on.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that `current` out of `total` units of work have completed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
