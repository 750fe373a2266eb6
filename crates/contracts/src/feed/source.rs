use anyhow::Result;

/// Injected generator capability: produces the next record for a feed.
///
/// The feed core never retries a failed generation; it skips that tick and
/// surfaces the error to the display layer. Retry policy, if any, belongs to
/// the source itself.
pub trait RecordSource<R> {
    fn next_record(&mut self) -> Result<R>;
}
