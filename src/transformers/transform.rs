//! Transform trait.

pub trait Transform<T> {
    /// Takes ownership of `T` and returns it.
    fn transform_own(&self, doc: T) -> T;
}
