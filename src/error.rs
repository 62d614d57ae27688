/// The error type for sequences that are constructed or used incorrectly.
///
/// Exhaustion is not an error: a finished sequence returns `None`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A range was given a step of zero.
    #[error("range step cannot be zero")]
    ZeroStep,

    /// A sequence was cycled but yielded no elements to replay.
    #[error("cannot cycle a sequence that yielded no elements")]
    EmptySource,

    /// The worker thread draining a sequence into a channel failed to start.
    #[cfg(feature = "std")]
    #[error("failed to spawn the channel worker thread")]
    Spawn(#[source] std::io::Error),
}
