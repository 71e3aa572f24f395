//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// callers (and tests) can inspect what a run produced.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
