//! Testing helpers which are not specific to cuboids.

#[cfg(any(feature = "std", test))]
mod multi_failure;
#[doc(hidden)] // for this workspace's tests only
#[cfg(any(feature = "std", test))]
pub use multi_failure::MultiFailure;
