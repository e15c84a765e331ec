//! Immutable single-value boxes for `no_std` applications.
//!
//! # Usage
//!
//! A [`Box`] takes one value at construction and hands it back, unchanged, for
//! as long as the box lives:
//!
//! ```
//! use frozen_box::Box;
//!
//! let answer = Box::new(42);
//! assert_eq!(*answer.get(), 42);
//!
//! let greeting = Box::new("hello");
//! assert_eq!(*greeting.get(), "hello");
//! ```
//!
//! There is no way to obtain a mutable reference to the boxed value, so the
//! following will fail to compile:
//!
//! ```compile_fail
//! use frozen_box::Box;
//!
//! let mut boxed = Box::new(0_usize);
//! *boxed += 1;
//! ```
//!
//! The box stores what it is given and never copies behind the caller's back.
//! Boxing a shared handle therefore aliases the referent, and changes made to
//! it through interior mutability are visible through [`Box::get`].
//!
//! Boxed values can be viewed through unsized types on a stable toolchain:
//!
//! ```
//! use core::any::Any;
//! use frozen_box::Box;
//!
//! let boxed = Box::new(0_isize);
//! let erased: &Box<dyn Any> = &boxed;
//! assert_eq!(erased.downcast_ref::<isize>(), Some(&0));
//! ```
//!
//! [`Box`]: struct.Box.html
//! [`Box::get`]: struct.Box.html#method.get
//!
//! # Dependencies
//!
//! `frozen_box` has no runtime dependencies by default.
//!
//! [`heapless`] can be optionally brought in to add support for boxes backed by
//! global memory pools by activating the `pool` feature.
//!
//! [`heapless`]: https://docs.rs/heapless
//!
//! # Features
//!
//! * `pool`
//!
//!   Adds [`PoolBox`], which claims its storage from a `heapless` memory pool,
//!   along with [`StaticBuf`] and [`static_buf`] for growing pools out of
//!   static memory:
//!
//!   ```
//!   # #[cfg(feature = "pool")]
//!   # {
//!   use frozen_box::{static_buf, PoolBox};
//!   use heapless::{pool, pool::singleton::Pool};
//!
//!   pool!(P: u32);
//!   P::grow(static_buf![0; 64].unwrap());
//!
//!   let boxed = PoolBox::<P>::new(7).unwrap();
//!   assert_eq!(*boxed.get(), 7);
//!   # }
//!   ```
//!
//! * `serde`
//!
//!   Implements `Serialize` and `Deserialize` for the box types. A box is
//!   encoded exactly as the value it holds.
//!
//! * `tracing`
//!
//!   Emits [`tracing`] events when a pool block is claimed and when a pool is
//!   exhausted.
//!
//! * `std`
//!
//!   Implements `std::error::Error` for [`CapacityError`].
//!
//!   [`PoolBox`]: struct.PoolBox.html
//!   [`StaticBuf`]: struct.StaticBuf.html
//!   [`static_buf`]: macro.static_buf.html
//!   [`CapacityError`]: struct.CapacityError.html
//!   [`tracing`]: https://docs.rs/tracing
//!
//! # Safety
//!
//! [`Box`] contains no unsafe code. [`PoolBox`] builds on the `heapless` pool,
//! and the only unsafe code in this crate hands out the single reference to a
//! [`StaticBuf`]. The `san/` binaries exercise both under [**Miri**].
//!
//! [**Miri**]: https://github.com/rust-lang/miri

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

mod boxed;

pub use boxed::Box;

#[cfg(feature = "pool")]
mod capacity_error;
#[cfg(feature = "pool")]
mod pool_boxed;
#[cfg(feature = "pool")]
mod static_buf;

#[cfg(feature = "pool")]
pub use capacity_error::CapacityError;
#[cfg(feature = "pool")]
pub use pool_boxed::PoolBox;
#[cfg(feature = "pool")]
pub use static_buf::StaticBuf;

#[cfg(feature = "serde")]
mod serde_impls;

/*
    Unit tests
*/
