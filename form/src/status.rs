#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Observable lifecycle of one network exchange.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestStatus<T, E> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(E),
}

impl<T, E> Default for RequestStatus<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T, E> RequestStatus<T, E> {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn succeeded(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn failed(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for RequestStatus<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }
}
