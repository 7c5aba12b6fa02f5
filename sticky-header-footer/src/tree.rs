/// Errors raised by tree mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The node has no parent, so it has no position to exchange.
    #[error("node is detached from the tree")]
    Detached,
    /// The insertion would make a node its own ancestor, or the reference is not a child of the
    /// target parent.
    #[error("invalid hierarchy for insertion")]
    HierarchyRequest,
}

/// The minimal tree capability needed to exchange node positions.
///
/// Implemented by the adapter's DOM binding, and by small arenas in tests.
pub trait NodeTree {
    type Node: Clone + PartialEq;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Moves `child` under `parent`, right before `reference` (or last when `None`).
    ///
    /// `child` is detached from its current parent first, like `Node.insertBefore`.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        child: &Self::Node,
        reference: Option<&Self::Node>,
    ) -> Result<(), TreeError>;
}

/// Exchanges the positions of `a` and `b`.
///
/// Each node keeps its own children and attributes; only the parent links and sibling order
/// change. Works across different parents and for adjacent siblings in either order.
///
/// Fails without mutating the tree if either node is detached or one node contains the other.
pub fn swap_positions<T: NodeTree + ?Sized>(
    tree: &mut T,
    a: &T::Node,
    b: &T::Node,
) -> Result<(), TreeError> {
    if a == b {
        return Ok(());
    }
    let a_parent = tree.parent(a).ok_or(TreeError::Detached)?;
    let b_parent = tree.parent(b).ok_or(TreeError::Detached)?;

    // `b` cannot move under its own descendant; reject before anything has moved.
    let mut cur = Some(a_parent.clone());
    while let Some(n) = cur {
        if n == *b {
            return Err(TreeError::HierarchyRequest);
        }
        cur = tree.parent(&n);
    }

    // If `b` directly follows `a`, `a` itself becomes the anchor once it has moved before `b`.
    let a_anchor = match tree.next_sibling(a) {
        Some(next) if next == *b => Some(a.clone()),
        other => other,
    };

    strace!("swap_positions");
    tree.insert_before(&b_parent, a, Some(b))?;
    tree.insert_before(&a_parent, b, a_anchor.as_ref())
}
