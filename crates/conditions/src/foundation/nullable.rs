//! Null detection for generic values
//!
//! Generic checks such as [`is_equal_to`](crate::Validator::is_equal_to) and
//! [`evaluate`](crate::Validator::evaluate) report
//! [`ArgumentNull`](crate::ConditionError::ArgumentNull) when a precondition
//! fails on a null value. [`Nullable`] tells them which values are null.
//!
//! `Option<T>` is null when it is `None`; every other implementor is never
//! null. A type of your own opts in with an empty impl:
//!
//! ```
//! use conditions::{Nullable, requires};
//!
//! #[derive(Debug, PartialEq)]
//! struct Meters(u32);
//!
//! impl Nullable for Meters {}
//!
//! assert!(requires(Meters(3), "height").is_equal_to(Meters(3)).is_ok());
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// A value that may be null.
pub trait Nullable {
    /// Returns true for the null value. Defaults to never null.
    fn is_null_value(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null_value(&self) -> bool {
        (**self).is_null_value()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null_value(&self) -> bool {
        (**self).is_null_value()
    }
}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl Nullable for $ty {})*
    };
}

never_null!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, OsStr, OsString, Path, PathBuf, Ordering, Duration, Instant, SystemTime, IpAddr,
    Ipv4Addr, Ipv6Addr, SocketAddr, dyn Any, dyn Any + Send,
);

macro_rules! never_null_generic {
    ($(impl<$($param:ident),+> for $ty:ty;)*) => {
        $(impl<$($param),+> Nullable for $ty {})*
    };
}

never_null_generic! {
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for LinkedList<T>;
    impl<T> for BinaryHeap<T>;
    impl<T> for BTreeSet<T>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<K, V, S> for HashMap<K, V, S>;
}

impl<T, const N: usize> Nullable for [T; N] {}

impl<T: ?Sized> Nullable for Box<T> {}

impl<T: ?Sized> Nullable for Rc<T> {}

impl<T: ?Sized> Nullable for Arc<T> {}

impl<B: ToOwned + ?Sized> Nullable for Cow<'_, B> {}

macro_rules! never_null_tuple {
    ($(($($name:ident),+))*) => {
        $(impl<$($name),+> Nullable for ($($name,)+) {})*
    };
}

never_null_tuple! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
}
