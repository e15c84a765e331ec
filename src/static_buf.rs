use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

/// A byte buffer in static memory that can be claimed exactly once.
///
/// Memory pools only grow from `&'static mut [u8]`; this type hands such a
/// slice out without `static mut`. Usually declared through [`static_buf`].
///
/// [`static_buf`]: macro.static_buf.html
#[cfg_attr(docsrs, doc(cfg(feature = "pool")))]
pub struct StaticBuf<const N: usize> {
    taken: AtomicBool,
    data: UnsafeCell<[u8; N]>,
}

// SAFETY: `data` is only reachable through `take`, which yields at most one
// reference for the lifetime of the program.
unsafe impl<const N: usize> Sync for StaticBuf<N> {}

impl<const N: usize> StaticBuf<N> {
    /// Creates a buffer with every byte set to `init`.
    pub const fn new(init: u8) -> Self {
        Self {
            taken: AtomicBool::new(false),
            data: UnsafeCell::new([init; N]),
        }
    }

    /// Claims the buffer.
    ///
    /// Returns `None` if the buffer has already been claimed.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_box::StaticBuf;
    ///
    /// static BUF: StaticBuf<64> = StaticBuf::new(0);
    ///
    /// let buf = BUF.take().unwrap();
    /// assert_eq!(buf.len(), 64);
    /// assert!(BUF.take().is_none());
    /// ```
    pub fn take(&'static self) -> Option<&'static mut [u8]> {
        if self.taken.swap(true, Ordering::AcqRel) {
            return None;
        }
        // SAFETY: the flag was clear and is now set, so no other reference to
        // `data` exists or will ever be created.
        Some(unsafe { &mut *self.data.get() })
    }

    /// Returns `true` if the buffer has been claimed.
    pub fn is_taken(&self) -> bool {
        self.taken.load(Ordering::Acquire)
    }
}

/// Declares a static buffer at the call site and claims it.
///
/// Evaluates to `Option<&'static mut [u8]>`: `Some` the first time the
/// expression runs, `None` on every later run.
///
/// # Examples
///
/// Claiming a static buffer:
///
/// ```
/// use frozen_box::static_buf;
///
/// let buf: &'static mut [u8] = static_buf![0; 128].unwrap();
/// assert!(buf.iter().all(|&b| b == 0));
/// ```
///
/// Placing the buffer in a custom link section:
///
/// ```no_run
/// use frozen_box::static_buf;
///
/// let buf = static_buf! {
///     #[link_section = ".custom_section"]
///     [0; 128]
/// };
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "pool")))]
#[macro_export]
macro_rules! static_buf {
    ($init:literal; $len:expr) => { $crate::static_buf!([$init; $len]) };
    ($(#[$m:meta])* [$init:literal; $len:expr]) => {{
        $(#[$m])*
        static BUF: $crate::StaticBuf<{ $len }> = $crate::StaticBuf::new($init);
        BUF.take()
    }};
}
