/// Lifecycle of one asynchronous operation as presented to the user.
///
/// Only moves forward: `NotStarted -> InProgress -> Finished`. A new operation
/// gets a new value instead of rewinding an old one.
#[derive(Debug, Clone, PartialEq)]
pub enum DelayedResult<T> {
    NotStarted,
    InProgress,
    Finished(T),
}

impl<T> Default for DelayedResult<T> {
    fn default() -> Self {
        DelayedResult::NotStarted
    }
}

impl<T> DelayedResult<T> {
    pub fn has_started(&self) -> bool {
        !matches!(self, DelayedResult::NotStarted)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, DelayedResult::InProgress)
    }

    pub fn finished(&self) -> Option<&T> {
        match self {
            DelayedResult::Finished(value) => Some(value),
            DelayedResult::NotStarted | DelayedResult::InProgress => None,
        }
    }

    /// `NotStarted -> InProgress`. Returns `false` and leaves `self` untouched otherwise.
    pub fn begin(&mut self) -> bool {
        if matches!(self, DelayedResult::NotStarted) {
            *self = DelayedResult::InProgress;
            true
        } else {
            false
        }
    }

    /// `InProgress -> Finished(value)`. Returns `false` and drops `value` otherwise.
    pub fn complete(&mut self, value: T) -> bool {
        if self.is_in_progress() {
            *self = DelayedResult::Finished(value);
            true
        } else {
            false
        }
    }
}

/// The two observable moments of an asynchronous operation, carried as a message payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncTransaction<T> {
    Begin,
    Completed(T),
}
