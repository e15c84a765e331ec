use crate::capacity_error::CapacityError;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops;

use heapless::pool::{
    singleton::{Box as HBox, Pool},
    Init,
};

/// An immutable box whose storage belongs to a global memory pool.
///
/// This behaves like [`Box`], but the value is moved into a block claimed from
/// the `heapless` pool `P` instead of living inline. Dropping the box drops
/// the value and returns the block to the pool.
///
/// As with [`Box`], the value cannot be changed once boxed:
///
/// ```compile_fail
/// use frozen_box::{static_buf, PoolBox};
/// use heapless::{pool, pool::singleton::Pool};
///
/// pool!(P: u32);
/// P::grow(static_buf![0; 64].unwrap());
///
/// let mut boxed = PoolBox::<P>::new(0).unwrap();
/// *boxed = 1;
/// ```
///
/// [`Box`]: struct.Box.html
#[cfg_attr(docsrs, doc(cfg(feature = "pool")))]
pub struct PoolBox<P>
where
    P: Pool,
{
    inner: HBox<P, Init>,
}

/*
    impl PoolBox
*/

impl<P> PoolBox<P>
where
    P: Pool,
{
    /// Attempts to claim a memory block from the pool and moves `value` into
    /// it.
    ///
    /// If the pool is exhausted then `value` is handed back inside the error.
    ///
    /// If `P::Data` is zero-sized then no memory is required and the pool
    /// never needs to be grown.
    ///
    /// # Examples
    ///
    /// Boxing a value:
    ///
    /// ```
    /// use frozen_box::{static_buf, PoolBox};
    /// use heapless::{pool, pool::singleton::Pool};
    ///
    /// pool!(P: [u32; 4]);
    /// assert!(P::grow(static_buf![0; 256].unwrap()) >= 1);
    ///
    /// let boxed = PoolBox::<P>::new([1, 2, 3, 4]).unwrap();
    /// assert_eq!(boxed.get(), &[1, 2, 3, 4]);
    /// ```
    ///
    /// Boxing a ZST (zero-sized type):
    ///
    /// ```
    /// use frozen_box::PoolBox;
    /// use heapless::pool;
    ///
    /// pool!(P: ());
    ///
    /// // The pool is never grown, our data is zero sized
    /// let boxed = PoolBox::<P>::new(()).unwrap();
    /// ```
    ///
    /// Getting the value back from an exhausted pool:
    ///
    /// ```
    /// use frozen_box::PoolBox;
    /// use heapless::pool;
    ///
    /// pool!(P: u32);
    ///
    /// let err = PoolBox::<P>::new(7).unwrap_err();
    /// assert_eq!(err.into_value(), 7);
    /// ```
    pub fn new(value: P::Data) -> Result<Self, CapacityError<P::Data>> {
        match P::alloc() {
            Some(block) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(pool = core::any::type_name::<P>(), "claimed pool block");
                Ok(Self {
                    inner: block.init(value),
                })
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(pool = core::any::type_name::<P>(), "memory pool exhausted");
                Err(CapacityError::new(value))
            }
        }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub fn get(&self) -> &P::Data {
        &self.inner
    }
}

impl<P> PoolBox<P>
where
    P: Pool,
    P::Data: Clone,
{
    /// Returns an owned copy of the stored value.
    #[inline]
    pub fn cloned(&self) -> P::Data {
        self.get().clone()
    }
}

impl<P> ops::Deref for PoolBox<P>
where
    P: Pool,
{
    type Target = P::Data;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<P> AsRef<P::Data> for PoolBox<P>
where
    P: Pool,
{
    #[inline]
    fn as_ref(&self) -> &P::Data {
        &self.inner
    }
}

impl<P> PartialEq for PoolBox<P>
where
    P: Pool,
    P::Data: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<P> Eq for PoolBox<P>
where
    P: Pool,
    P::Data: Eq,
{
}

impl<P> PartialOrd for PoolBox<P>
where
    P: Pool,
    P::Data: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<P> Ord for PoolBox<P>
where
    P: Pool,
    P::Data: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<P> Hash for PoolBox<P>
where
    P: Pool,
    P::Data: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl<P> fmt::Debug for PoolBox<P>
where
    P: Pool,
    P::Data: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <P::Data as fmt::Debug>::fmt(self, f)
    }
}

impl<P> fmt::Display for PoolBox<P>
where
    P: Pool,
    P::Data: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <P::Data as fmt::Display>::fmt(self, f)
    }
}

impl<P> fmt::Pointer for PoolBox<P>
where
    P: Pool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&(self.get() as *const P::Data), f)
    }
}

/*
    Unit tests
*/

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;

    use crate::static_buf;

    use alloc::vec::Vec;
    use core::mem;
    use core::ptr;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use heapless::pool;

    #[test]
    fn smoke() {
        pool!(P: usize);
        assert!(P::grow(static_buf![0; 64].unwrap()) >= 1);
        let boxed = PoolBox::<P>::new(42).unwrap();
        assert_eq!(*boxed.get(), 42);
        assert_eq!(*boxed, 42);
        assert_eq!(boxed.cloned(), 42);
    }

    #[test]
    fn idempotent() {
        pool!(P: [u8; 8]);
        assert!(P::grow(static_buf![0; 64].unwrap()) >= 1);
        let boxed = PoolBox::<P>::new(*b"frozen!!").unwrap();
        assert!(ptr::eq(boxed.get(), boxed.get()));
        assert_eq!(boxed.get(), b"frozen!!");
    }

    #[test]
    fn zst() {
        pool!(P: ());
        let boxed = PoolBox::<P>::new(()).unwrap();
        assert_eq!(*boxed.get(), ());
    }

    #[test]
    fn exhausted() {
        pool!(P: u64);
        let blocks = P::grow(static_buf![0; 128].unwrap());
        assert!(blocks >= 1);

        let mut held = Vec::new();
        for i in 0..blocks {
            held.push(PoolBox::<P>::new(i as u64).unwrap());
        }

        let err = PoolBox::<P>::new(99).unwrap_err();
        assert_eq!(*err.value(), 99);
        assert_eq!(err.into_value(), 99);

        held.pop();
        let reused = PoolBox::<P>::new(100).unwrap();
        assert_eq!(*reused, 100);
    }

    #[test]
    fn independent() {
        pool!(P: u32);
        assert!(P::grow(static_buf![0; 128].unwrap()) >= 3);
        let a = PoolBox::<P>::new(1).unwrap();
        let b = PoolBox::<P>::new(1).unwrap();
        let c = PoolBox::<P>::new(2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(!ptr::eq(a.get(), b.get()));
    }

    #[test]
    fn alias() {
        static SHARED: AtomicUsize = AtomicUsize::new(1);

        pool!(P: &'static AtomicUsize);
        assert!(P::grow(static_buf![0; 64].unwrap()) >= 1);
        let boxed = PoolBox::<P>::new(&SHARED).unwrap();
        SHARED.store(2, Ordering::Relaxed);
        assert_eq!(boxed.get().load(Ordering::Relaxed), 2);
    }

    #[test]
    fn drop() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        pub struct Foo(u8);
        impl Drop for Foo {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }

        pool!(P: Foo);
        assert!(P::grow(static_buf![0; 64].unwrap()) >= 1);
        let boxed = PoolBox::<P>::new(Foo(1)).unwrap();
        assert_eq!(boxed.get().0, 1);
        assert_eq!(DROPS.load(Ordering::Relaxed), 0);
        mem::drop(boxed);
        assert_eq!(DROPS.load(Ordering::Relaxed), 1);
    }
}
