//! Operator traits used by [`Collect`](crate::Collect).
//!
//! Any `Fn(&I) -> bool` is a [`Predicate`] and any `Fn(&I) -> O` is a
//! [`Mapping`]. Marker types stand in when the caller supplies nothing:
//! [`AcceptAll`] admits every element, [`Cloned`] keeps it as is, and
//! [`Unkeyed`] marks a builder that has no key function yet.

/// Decides whether an element is admitted.
pub trait Predicate<I: ?Sized> {
    fn test(&self, item: &I) -> bool;
}

impl<I: ?Sized, F> Predicate<I> for F
where
    F: Fn(&I) -> bool,
{
    #[inline]
    fn test(&self, item: &I) -> bool {
        self(item)
    }
}

/// Derives an output value from an element.
pub trait Mapping<I: ?Sized> {
    type Output;

    fn apply(&self, item: &I) -> Self::Output;
}

impl<I: ?Sized, O, F> Mapping<I> for F
where
    F: Fn(&I) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, item: &I) -> O {
        self(item)
    }
}

/// Predicate admitting every element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<I: ?Sized> Predicate<I> for AcceptAll {
    #[inline]
    fn test(&self, _item: &I) -> bool {
        true
    }
}

/// Mapping returning a clone of the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cloned;

impl<I: Clone> Mapping<I> for Cloned {
    type Output = I;

    #[inline]
    fn apply(&self, item: &I) -> I {
        item.clone()
    }
}

/// Placeholder for a key function that was never set.
///
/// It implements neither operator trait, so map-shaped terminals are not
/// available until a key function is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unkeyed;
