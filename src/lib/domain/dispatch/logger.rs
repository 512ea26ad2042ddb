//! Logger collaborator

#[cfg(test)]
use mockall::mock;

/// The handler's log channel.
///
/// Only the error level exists here: the happy path of message dispatch is
/// deliberately silent, and failures are observable to operators solely
/// through this channel.
pub trait Logger: Send + Sync + 'static {
    /// Record one error line.
    fn error(&self, message: &str);
}

#[cfg(test)]
mock! {
    pub Logger {}

    impl Logger for Logger {
        fn error(&self, message: &str);
    }
}
