//! Path-addressed edits over a descriptor tree.
//!
//! Editors address nodes by the child-index path from the root (the root is
//! the empty path). Every operation validates the path and reports a
//! descriptive error instead of panicking; callers surface these as user
//! messages.

use thiserror::Error;

use crate::descriptor::NodeDef;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurgeryError {
    #[error("path descends into a leaf node")]
    NotComposite,
    #[error("child index {index} is out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("the root node cannot be detached")]
    DetachRoot,
    #[error("a node cannot be moved into its own subtree")]
    MoveIntoSelf,
}

fn children_of(node: &NodeDef) -> Result<&Vec<NodeDef>, SurgeryError> {
    match node {
        NodeDef::Selector { children, .. } | NodeDef::Sequence { children, .. } => Ok(children),
        _ => Err(SurgeryError::NotComposite),
    }
}

fn children_of_mut(node: &mut NodeDef) -> Result<&mut Vec<NodeDef>, SurgeryError> {
    match node {
        NodeDef::Selector { children, .. } | NodeDef::Sequence { children, .. } => Ok(children),
        _ => Err(SurgeryError::NotComposite),
    }
}

pub fn node_at<'a>(root: &'a NodeDef, path: &[usize]) -> Result<&'a NodeDef, SurgeryError> {
    let mut node = root;
    for &index in path {
        let children = children_of(node)?;
        node = children.get(index).ok_or(SurgeryError::OutOfBounds {
            index,
            len: children.len(),
        })?;
    }
    Ok(node)
}

pub fn node_at_mut<'a>(
    root: &'a mut NodeDef,
    path: &[usize],
) -> Result<&'a mut NodeDef, SurgeryError> {
    let mut node = root;
    for &index in path {
        let children = children_of_mut(node)?;
        let len = children.len();
        node = children
            .get_mut(index)
            .ok_or(SurgeryError::OutOfBounds { index, len })?;
    }
    Ok(node)
}

/// Insert `node` as the `index`-th child of the composite at `parent_path`.
/// `index == len` appends.
pub fn insert_at(
    root: &mut NodeDef,
    parent_path: &[usize],
    index: usize,
    node: NodeDef,
) -> Result<(), SurgeryError> {
    let parent = node_at_mut(root, parent_path)?;
    let children = children_of_mut(parent)?;
    if index > children.len() {
        return Err(SurgeryError::OutOfBounds {
            index,
            len: children.len(),
        });
    }
    children.insert(index, node);
    Ok(())
}

/// Remove and return the node at `path`. The root cannot be detached.
pub fn detach_at(root: &mut NodeDef, path: &[usize]) -> Result<NodeDef, SurgeryError> {
    let (&last, parent_path) = path.split_last().ok_or(SurgeryError::DetachRoot)?;
    let parent = node_at_mut(root, parent_path)?;
    let children = children_of_mut(parent)?;
    if last >= children.len() {
        return Err(SurgeryError::OutOfBounds {
            index: last,
            len: children.len(),
        });
    }
    Ok(children.remove(last))
}

/// Remove the node at `path`, discarding it.
pub fn remove_at(root: &mut NodeDef, path: &[usize]) -> Result<(), SurgeryError> {
    detach_at(root, path).map(|_| ())
}

fn is_prefix(prefix: &[usize], path: &[usize]) -> bool {
    path.len() >= prefix.len() && prefix.iter().zip(path).all(|(a, b)| a == b)
}

/// Detach the node at `from` and insert it as the `index`-th child of the
/// composite at `to_parent`, as addressed *before* the detach.
///
/// Sibling indices shift when the detached node precedes the destination in
/// the same parent; the destination path and index are re-aimed so the node
/// lands where the caller pointed.
pub fn move_node(
    root: &mut NodeDef,
    from: &[usize],
    to_parent: &[usize],
    index: usize,
) -> Result<(), SurgeryError> {
    if is_prefix(from, to_parent) {
        return Err(SurgeryError::MoveIntoSelf);
    }
    // Validate the destination before mutating anything.
    let dest = node_at(root, to_parent)?;
    let dest_len = children_of(dest)?.len();
    if index > dest_len {
        return Err(SurgeryError::OutOfBounds {
            index,
            len: dest_len,
        });
    }

    let node = detach_at(root, from)?;

    let (&from_last, from_parent) = from.split_last().unwrap_or((&0, &[]));
    let mut adjusted: Vec<usize> = to_parent.to_vec();
    let mut adjusted_index = index;
    if to_parent.len() >= from.len() && is_prefix(from_parent, to_parent) {
        // The destination path routes through the detached node's parent:
        // the component at the detach depth may have shifted left.
        let depth = from_parent.len();
        if adjusted[depth] > from_last {
            adjusted[depth] -= 1;
        }
    } else if to_parent == from_parent && adjusted_index > from_last {
        adjusted_index -= 1;
    }

    insert_at(root, &adjusted, adjusted_index, node)
}
