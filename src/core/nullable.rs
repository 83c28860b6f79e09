//! Nullable: the in-band absence contract. One reserved representation per
//! type, no tag byte where the type has a spare bit pattern.

/// Types that can designate one representation as "absent".
///
/// `Repr` is what a [`NullOpt`](crate::NullOpt) actually stores. For
/// pointer-like types the reserved representation is free (null, zero); types
/// with no spare bit pattern use `Option<Self>` as a tagged fallback, which
/// the compiler's niche optimization flattens whenever a niche exists.
///
/// Rules:
/// - `absent()` is canonical: there is exactly one absent representation,
///   and `is_absent` recognizes it and nothing else.
/// - `embed` may land on the absent representation (a sentinel value passed
///   to [`NullOpt::of`](crate::NullOpt::of) normalizes to Absent by
///   construction).
/// - `project` / `project_ref` are only ever called on representations for
///   which `is_absent` returned `false`, and only on representations
///   produced by `embed` or `absent`.
///
/// User types with a reserved sentinel implement this directly with
/// `Repr = Self`:
///
/// ```
/// use nullopt::{NullOpt, Nullable};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct SlotId(u32);
///
/// const FREE: SlotId = SlotId(u32::MAX);
///
/// impl Nullable for SlotId {
///     type Repr = SlotId;
///     fn absent() -> SlotId { FREE }
///     fn is_absent(repr: &SlotId) -> bool { *repr == FREE }
///     fn embed(value: SlotId) -> SlotId { value }
///     fn project(repr: SlotId) -> SlotId { repr }
///     fn project_ref(repr: &SlotId) -> &SlotId { repr }
/// }
///
/// assert!(NullOpt::of(SlotId(7)).is_defined());
/// assert!(NullOpt::of(FREE).is_empty()); // the sentinel normalizes
/// assert_eq!(core::mem::size_of::<NullOpt<SlotId>>(), 4);
/// ```
pub trait Nullable: Sized {
    /// Stored representation. Same size as `Self` for every zero-overhead
    /// implementation in this module.
    type Repr;

    /// The canonical absent representation.
    fn absent() -> Self::Repr;

    /// Whether `repr` is the absent representation.
    fn is_absent(repr: &Self::Repr) -> bool;

    /// Value to representation. The identity for in-band implementations.
    fn embed(value: Self) -> Self::Repr;

    /// Representation to value. Only called when `!is_absent(&repr)`.
    fn project(repr: Self::Repr) -> Self;

    /// Borrowed representation to borrowed value. Only called when
    /// `!is_absent(repr)`.
    fn project_ref(repr: &Self::Repr) -> &Self;
}

// ---------------------------------------------------------------------------
// References: the tag folds into the null pointer.

impl<'a, T> Nullable for &'a T {
    type Repr = *const T;

    #[inline(always)]
    fn absent() -> Self::Repr {
        core::ptr::null()
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_null()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        value
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        // Non-null per the trait contract; originated from `embed`.
        unsafe { &*repr }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        // `&T` and `*const T` share layout; non-null per the trait contract.
        unsafe { &*(repr as *const *const T as *const &'a T) }
    }
}

impl<'a, T> Nullable for &'a mut T {
    type Repr = *mut T;

    #[inline(always)]
    fn absent() -> Self::Repr {
        core::ptr::null_mut()
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_null()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        value
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        // Non-null per the trait contract; originated from `embed`, which
        // consumed the unique reference.
        unsafe { &mut *repr }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        // `&mut T` and `*mut T` share layout; non-null per the trait contract.
        unsafe { &*(repr as *const *mut T as *const &'a mut T) }
    }
}

// ---------------------------------------------------------------------------
// NonZero family: the tag folds into the zero slot.

macro_rules! nonzero_nullable {
    ($($nz:ty => $prim:ty),* $(,)?) => {$(
        impl Nullable for $nz {
            type Repr = $prim;

            #[inline(always)]
            fn absent() -> Self::Repr {
                0
            }

            #[inline(always)]
            fn is_absent(repr: &Self::Repr) -> bool {
                *repr == 0
            }

            #[inline(always)]
            fn embed(value: Self) -> Self::Repr {
                value.get()
            }

            #[inline(always)]
            fn project(repr: Self::Repr) -> Self {
                // Non-zero per the trait contract.
                unsafe { Self::new_unchecked(repr) }
            }

            #[inline(always)]
            fn project_ref(repr: &Self::Repr) -> &Self {
                // `$nz` is repr(transparent) over `$prim`; non-zero per the
                // trait contract.
                unsafe { &*(repr as *const $prim as *const Self) }
            }
        }
    )*};
}

nonzero_nullable! {
    core::num::NonZeroI8 => i8,
    core::num::NonZeroI16 => i16,
    core::num::NonZeroI32 => i32,
    core::num::NonZeroI64 => i64,
    core::num::NonZeroI128 => i128,
    core::num::NonZeroIsize => isize,
    core::num::NonZeroU8 => u8,
    core::num::NonZeroU16 => u16,
    core::num::NonZeroU32 => u32,
    core::num::NonZeroU64 => u64,
    core::num::NonZeroU128 => u128,
    core::num::NonZeroUsize => usize,
}

// ---------------------------------------------------------------------------
// Tagged fallback for types with no reserved representation. `Option<Self>`
// storage; the niche optimization erases the tag where one exists (bool,
// char, &str, &[T], String, Box).

macro_rules! option_backed {
    ($($t:ty),* $(,)?) => {$(
        impl Nullable for $t {
            type Repr = Option<$t>;

            #[inline(always)]
            fn absent() -> Self::Repr {
                None
            }

            #[inline(always)]
            fn is_absent(repr: &Self::Repr) -> bool {
                repr.is_none()
            }

            #[inline(always)]
            fn embed(value: Self) -> Self::Repr {
                Some(value)
            }

            #[inline(always)]
            fn project(repr: Self::Repr) -> Self {
                match repr {
                    Some(value) => value,
                    None => unreachable!("projected an absent representation"),
                }
            }

            #[inline(always)]
            fn project_ref(repr: &Self::Repr) -> &Self {
                match repr {
                    Some(value) => value,
                    None => unreachable!("projected an absent representation"),
                }
            }
        }
    )*};
}

option_backed! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char,
}

#[cfg(feature = "alloc")]
option_backed!(alloc::string::String);

impl<'a> Nullable for &'a str {
    type Repr = Option<&'a str>;

    #[inline(always)]
    fn absent() -> Self::Repr {
        None
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_none()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        Some(value)
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }
}

impl<'a, T> Nullable for &'a [T] {
    type Repr = Option<&'a [T]>;

    #[inline(always)]
    fn absent() -> Self::Repr {
        None
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_none()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        Some(value)
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }
}

#[cfg(feature = "alloc")]
impl<T> Nullable for alloc::boxed::Box<T> {
    type Repr = Option<alloc::boxed::Box<T>>;

    #[inline(always)]
    fn absent() -> Self::Repr {
        None
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_none()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        Some(value)
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }
}

// Pairs and triples, so `zip` and `unzip` need no extra machinery.

impl<A, B> Nullable for (A, B) {
    type Repr = Option<(A, B)>;

    #[inline(always)]
    fn absent() -> Self::Repr {
        None
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_none()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        Some(value)
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }
}

impl<A, B, C> Nullable for (A, B, C) {
    type Repr = Option<(A, B, C)>;

    #[inline(always)]
    fn absent() -> Self::Repr {
        None
    }

    #[inline(always)]
    fn is_absent(repr: &Self::Repr) -> bool {
        repr.is_none()
    }

    #[inline(always)]
    fn embed(value: Self) -> Self::Repr {
        Some(value)
    }

    #[inline(always)]
    fn project(repr: Self::Repr) -> Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }

    #[inline(always)]
    fn project_ref(repr: &Self::Repr) -> &Self {
        match repr {
            Some(value) => value,
            None => unreachable!("projected an absent representation"),
        }
    }
}
