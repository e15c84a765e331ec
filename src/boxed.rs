use core::any::Any;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops;

/// A box holding exactly one value that cannot change after construction.
///
/// The value lives inline; `Box` adds no indirection and no allocation. No
/// mutable access to the value is ever handed out, so once a box is built
/// every call to [`get`] yields the same value at the same address.
///
/// Mutating through the box does not compile:
///
/// ```compile_fail
/// use frozen_box::Box;
///
/// let mut boxed = Box::new(0);
/// *boxed = 1;
/// ```
///
/// Neither does reaching the field directly:
///
/// ```compile_fail
/// use frozen_box::Box;
///
/// let mut boxed = Box::new(0);
/// boxed.value = 1;
/// ```
///
/// The box does not copy what it is given. When `T` is a shared handle, changes
/// made to the referent through interior mutability are visible through the
/// box:
///
/// ```
/// use core::cell::Cell;
/// use frozen_box::Box;
///
/// let counter = Cell::new(1);
/// let boxed = Box::new(&counter);
/// counter.set(2);
/// assert_eq!(boxed.get().get(), 2);
/// ```
///
/// [`get`]: struct.Box.html#method.get
#[repr(transparent)]
pub struct Box<T>
where
    T: ?Sized,
{
    value: T,
}

/*
    impl Box
*/

impl<T> Box<T> {
    /// Places `value` into a new box.
    ///
    /// This never fails and has no side effects beyond storing the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_box::Box;
    ///
    /// let boxed = Box::new(42);
    /// assert_eq!(*boxed.get(), 42);
    /// ```
    ///
    /// Boxes can be built in constant context:
    ///
    /// ```
    /// use frozen_box::Box;
    ///
    /// static GREETING: Box<&str> = Box::new("hello");
    /// assert_eq!(*GREETING.get(), "hello");
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Consumes the box, returning the stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_box::Box;
    ///
    /// let boxed = Box::new([1, 2, 3]);
    /// let mut array = boxed.into_inner();
    /// array[0] = 0;
    /// assert_eq!(array, [0, 2, 3]);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Box<T>
where
    T: ?Sized,
{
    /// Returns a reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_box::Box;
    ///
    /// let boxed = Box::new("hello");
    /// assert_eq!(*boxed.get(), "hello");
    /// ```
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> Box<T>
where
    T: Clone,
{
    /// Returns an owned copy of the stored value.
    #[inline]
    pub fn cloned(&self) -> T {
        self.value.clone()
    }
}

impl Box<dyn Any + 'static> {
    /// Returns `true` if the boxed value is of type `U`.
    #[inline]
    pub fn is<U>(&self) -> bool
    where
        U: Any,
    {
        self.value.is::<U>()
    }

    /// Attempts to view the boxed value as a concrete type.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::any::Any;
    /// use frozen_box::Box;
    ///
    /// let boxed = Box::new(0_isize);
    /// let erased: &Box<dyn Any> = &boxed;
    /// assert_eq!(erased.downcast_ref::<isize>(), Some(&0));
    /// assert_eq!(erased.downcast_ref::<usize>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<U>(&self) -> Option<&U>
    where
        U: Any,
    {
        self.value.downcast_ref()
    }
}

impl Box<dyn Any + Send + 'static> {
    /// Returns `true` if the boxed value is of type `U`.
    #[inline]
    pub fn is<U>(&self) -> bool
    where
        U: Any,
    {
        self.value.is::<U>()
    }

    /// Attempts to view the boxed value as a concrete type.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::any::Any;
    /// use frozen_box::Box;
    ///
    /// let boxed = Box::new("hello");
    /// let erased: &Box<dyn Any + Send> = &boxed;
    /// assert_eq!(erased.downcast_ref::<&str>(), Some(&"hello"));
    /// ```
    #[inline]
    pub fn downcast_ref<U>(&self) -> Option<&U>
    where
        U: Any,
    {
        self.value.downcast_ref()
    }
}

impl Box<dyn Any + Send + Sync + 'static> {
    /// Returns `true` if the boxed value is of type `U`.
    #[inline]
    pub fn is<U>(&self) -> bool
    where
        U: Any,
    {
        self.value.is::<U>()
    }

    /// Attempts to view the boxed value as a concrete type.
    #[inline]
    pub fn downcast_ref<U>(&self) -> Option<&U>
    where
        U: Any,
    {
        self.value.downcast_ref()
    }
}

impl<T> ops::Deref for Box<T>
where
    T: ?Sized,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> AsRef<T> for Box<T>
where
    T: ?Sized,
{
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> Borrow<T> for Box<T>
where
    T: ?Sized,
{
    #[inline]
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Box<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Default for Box<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Box<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> Copy for Box<T> where T: Copy {}

impl<T> PartialEq for Box<T>
where
    T: ?Sized + PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Box<T> where T: ?Sized + Eq {}

impl<T> PartialOrd for Box<T>
where
    T: ?Sized + PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T> Ord for Box<T>
where
    T: ?Sized + Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Box<T>
where
    T: ?Sized + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<T> fmt::Debug for Box<T>
where
    T: ?Sized + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <T as fmt::Debug>::fmt(self, f)
    }
}

impl<T> fmt::Display for Box<T>
where
    T: ?Sized + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <T as fmt::Display>::fmt(self, f)
    }
}

impl<T> fmt::Pointer for Box<T>
where
    T: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&(&self.value as *const T), f)
    }
}

/*
    Unit tests
*/
