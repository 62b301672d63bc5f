//! Overlap traits between an interval and a read alignment
//!
//! Both are generic over what is tested so that an interval can be
//! checked against plain `Range`s as well as richer read types.

/// Whether a value lies wholly inside `self`.
pub trait Contains<T> {
    /// True if nothing of `val` falls outside `self`.
    fn contains(&self, val: &T) -> bool;
}

/// Whether a value touches `self` at all.
///
/// ```
/// use extract_amplicon_core::{AmpliconInterval, Contains, Intersects};
/// let amplicon = AmpliconInterval::new("chr1".to_string(), 100, 400)?;
/// assert!(amplicon.intersects(&(90..410)));
/// assert!(!amplicon.contains(&(90..410)));
/// assert!(!amplicon.intersects(&(10..60)));
/// # Ok::<(), extract_amplicon_core::Error>(())
/// ```
pub trait Intersects<T> {
    /// True if `val` shares at least one position with `self`, where
    /// implementors decide whether touching boundaries count.
    fn intersects(&self, val: &T) -> bool;
}
