//! Matching rules for the atomic constraint variants
//!
//! Every rule compares a `reference` (the version written in the constraint)
//! with a `target` release. Orderings are taken from the reference's point of
//! view: `Less` means the target is the higher of the two.

use std::cmp::Ordering;

use crate::version::partial::PartialVersion;

/// Prerelease targets stay out unless opted in, or unless the reference is a
/// prerelease of the same release
fn prerelease_excluded(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    let same_line = reference.is_prerelease() && reference.cmp_release(target).is_eq();
    target.is_prerelease() && !include && !same_line
}

pub fn any(target: &PartialVersion) -> bool {
    !target.is_prerelease()
}

pub fn equal(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    if prerelease_excluded(reference, target, include) {
        return false;
    }

    if reference.cmp_major(target).is_ne() {
        return false;
    }
    if reference.minor().is_some() && reference.cmp_minor(target).is_ne() {
        return false;
    }
    if reference.patch().is_some() && reference.cmp_patch(target).is_ne() {
        return false;
    }

    reference.cmp_prerelease(target).is_eq()
}

pub fn greater_than(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    match reference.cmp_release(target) {
        Ordering::Less => !target.is_prerelease() || include,
        Ordering::Equal => {
            reference.is_prerelease() && reference.cmp_prerelease(target) == Ordering::Less
        }
        Ordering::Greater => false,
    }
}

pub fn greater_equal(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    match reference.cmp_release(target) {
        Ordering::Less => !target.is_prerelease() || include,
        Ordering::Equal => reference.cmp_prerelease(target) != Ordering::Greater,
        Ordering::Greater => false,
    }
}

pub fn less_than(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    match reference.cmp_release(target) {
        Ordering::Greater => !target.is_prerelease() || include,
        Ordering::Equal => {
            reference.is_prerelease() && reference.cmp_prerelease(target) == Ordering::Greater
        }
        Ordering::Less => false,
    }
}

pub fn less_equal(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    match reference.cmp_release(target) {
        Ordering::Greater => !target.is_prerelease() || include,
        Ordering::Equal => {
            // a release bound never admits its own prereleases
            if !reference.is_prerelease() && target.is_prerelease() {
                return false;
            }
            reference.cmp_prerelease(target) != Ordering::Less
        }
        Ordering::Less => false,
    }
}

/// `^` pins the leftmost non-zero slot: `^1.2.3` is `>=1.2.3 <2`, `^0.2.3` is
/// `>=0.2.3 <0.3`, `^0.0.3` is `=0.0.3`
pub fn caret(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    if prerelease_excluded(reference, target, include) {
        return false;
    }

    if reference.cmp_release(target) == Ordering::Greater {
        return false;
    }
    if reference.cmp_major(target).is_ne() {
        return false;
    }

    let zero_major = reference.major() == Some(0);
    if zero_major && reference.minor().is_some() && reference.cmp_minor(target).is_ne() {
        return false;
    }
    let zero_minor = zero_major && reference.minor() == Some(0);
    if zero_minor && reference.patch().is_some() && reference.cmp_patch(target).is_ne() {
        return false;
    }

    reference.cmp_prerelease(target) != Ordering::Greater
}

/// `~` allows patch-level changes: `~1.2.3` is `>=1.2.3 <1.3`, `~1` is `>=1 <2`
pub fn tilde(reference: &PartialVersion, target: &PartialVersion, include: bool) -> bool {
    if prerelease_excluded(reference, target, include) {
        return false;
    }

    if reference.compare(target) == Ordering::Greater {
        return false;
    }
    if reference.major().is_some() && reference.cmp_major(target).is_ne() {
        return false;
    }
    if reference.minor().is_some() && reference.cmp_minor(target).is_ne() {
        return false;
    }

    reference.cmp_prerelease(target) != Ordering::Greater
}
