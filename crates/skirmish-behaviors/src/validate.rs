//! Structural validation of raw descriptor JSON.
//!
//! The walk is hand-rolled rather than a serde derive so errors name exactly
//! what a tree editor needs surfaced: the unknown ref, the unsupported type,
//! the composite missing its name. It is pure and total: it either returns
//! a fully reconstructed typed descriptor or fails; it never drops or
//! coerces fields (a leaf's optional `label` passes through untouched).

use serde_json::Value;
use thiserror::Error;

use crate::descriptor::{ActionRef, BehaviorDescriptor, ConditionRef, NodeDef};

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("descriptor must be a JSON object")]
    NotAnObject,
    #[error("descriptor is missing a non-empty \"id\"")]
    MissingId,
    #[error("descriptor is missing a non-empty \"label\"")]
    MissingLabel,
    #[error("node must be a JSON object")]
    InvalidNode,
    #[error("composite node must have a readable name")]
    UnnamedComposite,
    #[error("node \"{name}\" must carry a \"children\" array")]
    ChildrenNotAnArray { name: String },
    #[error("unknown condition ref: {0}")]
    UnknownCondition(String),
    #[error("unknown action ref: {0}")]
    UnknownAction(String),
    #[error("leaf node is missing its \"ref\"")]
    MissingRef,
    #[error("unsupported node type: {0}")]
    UnsupportedType(String),
    #[error("payload must be a JSON array of behavior descriptors")]
    NotAnArray,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Validate one raw descriptor and reconstruct it as a typed value.
pub fn parse_descriptor(value: &Value) -> Result<BehaviorDescriptor, ValidateError> {
    if !value.is_object() {
        return Err(ValidateError::NotAnObject);
    }
    let id = non_empty_str(value, "id").ok_or(ValidateError::MissingId)?;
    let label = non_empty_str(value, "label").ok_or(ValidateError::MissingLabel)?;
    let root = value.get("root").ok_or(ValidateError::InvalidNode)?;
    Ok(BehaviorDescriptor {
        id: id.to_string(),
        label: label.to_string(),
        root: parse_node(root)?,
    })
}

/// Validate a top-level payload: a JSON array of descriptors.
pub fn parse_descriptor_array(value: &Value) -> Result<Vec<BehaviorDescriptor>, ValidateError> {
    let entries = value.as_array().ok_or(ValidateError::NotAnArray)?;
    entries.iter().map(parse_descriptor).collect()
}

/// Convenience over [`parse_descriptor_array`] for serialized payloads.
pub fn parse_descriptor_json(payload: &str) -> Result<Vec<BehaviorDescriptor>, ValidateError> {
    let value: Value = serde_json::from_str(payload)?;
    parse_descriptor_array(&value)
}

fn parse_node(node: &Value) -> Result<NodeDef, ValidateError> {
    if !node.is_object() {
        return Err(ValidateError::InvalidNode);
    }
    let kind = node
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ValidateError::UnsupportedType("(missing)".to_string()))?;

    match kind {
        "Selector" | "Sequence" => {
            let name = non_empty_str(node, "name")
                .ok_or(ValidateError::UnnamedComposite)?
                .to_string();
            let raw_children = node
                .get("children")
                .and_then(Value::as_array)
                .ok_or_else(|| ValidateError::ChildrenNotAnArray { name: name.clone() })?;
            let children = raw_children
                .iter()
                .map(parse_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(if kind == "Selector" {
                NodeDef::Selector { name, children }
            } else {
                NodeDef::Sequence { name, children }
            })
        }
        "Condition" => {
            let wire = node
                .get("ref")
                .and_then(Value::as_str)
                .ok_or(ValidateError::MissingRef)?;
            let ref_ = ConditionRef::parse(wire)
                .ok_or_else(|| ValidateError::UnknownCondition(wire.to_string()))?;
            Ok(NodeDef::Condition {
                ref_,
                label: leaf_label(node),
            })
        }
        "Action" => {
            let wire = node
                .get("ref")
                .and_then(Value::as_str)
                .ok_or(ValidateError::MissingRef)?;
            let ref_ = ActionRef::parse(wire)
                .ok_or_else(|| ValidateError::UnknownAction(wire.to_string()))?;
            Ok(NodeDef::Action {
                ref_,
                label: leaf_label(node),
            })
        }
        other => Err(ValidateError::UnsupportedType(other.to_string())),
    }
}

fn leaf_label(node: &Value) -> Option<String> {
    node.get("label").and_then(Value::as_str).map(str::to_string)
}

/// Re-check the string invariants on an already-typed descriptor, so
/// hand-built values cannot smuggle empty ids or unnamed composites into the
/// registry. Refs need no re-check: the enums make bad ones unrepresentable.
pub fn validate(descriptor: &BehaviorDescriptor) -> Result<(), ValidateError> {
    if descriptor.id.is_empty() {
        return Err(ValidateError::MissingId);
    }
    if descriptor.label.is_empty() {
        return Err(ValidateError::MissingLabel);
    }
    validate_node(&descriptor.root)
}

fn validate_node(node: &NodeDef) -> Result<(), ValidateError> {
    match node {
        NodeDef::Selector { name, children } | NodeDef::Sequence { name, children } => {
            if name.is_empty() {
                return Err(ValidateError::UnnamedComposite);
            }
            children.iter().try_for_each(validate_node)
        }
        NodeDef::Condition { .. } | NodeDef::Action { .. } => Ok(()),
    }
}
