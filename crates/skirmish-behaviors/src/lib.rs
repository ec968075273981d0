//! Serializable behavior descriptors, their registry, and the leaf library
//! that turns them into executable trees.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod conditions;
pub mod defaults;
pub mod descriptor;
pub mod factory;
pub mod registry;
pub mod store;
pub mod surgery;
pub mod validate;

pub use defaults::default_descriptors;
pub use descriptor::{
    empty_descriptor, ActionRef, BehaviorDescriptor, BehaviorOption, CatalogEntry, ConditionRef,
    NodeDef,
};
pub use factory::build_behavior_tree;
pub use registry::{generate_id, BehaviorRegistry};
pub use store::{BehaviorStore, HttpBehaviorStore, MemoryBehaviorStore, StoreError};
pub use surgery::SurgeryError;
pub use validate::{parse_descriptor, parse_descriptor_array, validate, ValidateError};
