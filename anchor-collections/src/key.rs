//! Storage keys with a reserved end-of-chain value.
//!
//! Chain nodes link to each other by storage key rather than by pointer.
//! A key type reserves one value, [`Key::NONE`], to mean "no successor",
//! which keeps every link a plain `Copy` integer instead of `Option<K>`.

/// A copyable storage key with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use anchor_collections::Key;
///
/// let key: usize = 7;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// assert_eq!(usize::from_usize(7), key);
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value meaning "no node". Never handed out by storage.
    const NONE: Self;

    /// Creates a key from a `usize` slot number.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as a `usize` slot number.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    fn to_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);
