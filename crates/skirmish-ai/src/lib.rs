//! Umbrella crate that re-exports the `skirmish-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for hosts embedding the
//! duel AI: the kernel primitives, the tree runtime, and the descriptor
//! layer, each behind a feature so thin embeddings can drop what they skip.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use skirmish_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use skirmish_bt as bt;

#[cfg(feature = "behaviors")]
#[cfg_attr(docsrs, doc(cfg(feature = "behaviors")))]
pub use skirmish_behaviors as behaviors;
