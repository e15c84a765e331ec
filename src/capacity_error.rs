use core::fmt;

/// The error returned when a memory pool has no free block left.
///
/// The value that could not be boxed is handed back rather than dropped.
pub struct CapacityError<T> {
    value: T,
}

impl<T> CapacityError<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the value that could not be boxed.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Recovers the value that could not be boxed.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("capacity error: memory pool is exhausted")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T> std::error::Error for CapacityError<T> {}
