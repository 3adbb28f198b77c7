//! Splitting trees.
//!
//! A splitting tree recursively eliminates the variables of a monotone DNF by
//! cofactor expansion. Each node holds a sub-DNF together with the ranked
//! occurrence patterns of the variables not yet eliminated. Splitting a node
//! fixes its most important remaining variable `v`:
//!
//! - the *lower* child gets the cofactor for `v = false`,
//! - the *upper* child gets the cofactor for `v = true`.
//!
//! All nodes of a tree live in a [`TreeContext`], arranged in columns. The
//! column of a node is the number of variables eliminated on the path from the
//! root, its row is its position inside that column. Parent and child links
//! are [`NodeId`]s into the context, so the context is the only owner.
//!
//! ```
//! use lpb_rs::dnf::Dnf;
//! use lpb_rs::tree::TreeContext;
//!
//! let dnf = Dnf::from(vec![vec![0], vec![1, 2]]);
//! let (mut ctx, root) = TreeContext::with_main(dnf);
//! let (low, high) = ctx.split(root).unwrap();
//!
//! // x0 is the most important variable.
//! assert_eq!(ctx.node(low).dnf(), &Dnf::from(vec![vec![1, 2]]));
//! assert!(ctx.node(high).is_final());
//! ```

use log::debug;

use crate::dnf::Dnf;
use crate::error::{LpbError, Result};
use crate::pattern::OccurrencePattern;
use crate::setting::{rank_patterns, VariableSetting};
use crate::types::NodeId;

/// The branch a node was created by.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Parent {
    /// Created as the lower child (`v = false`) of the given node.
    Lower(NodeId),
    /// Created as the upper child (`v = true`) of the given node.
    Upper(NodeId),
}

impl Parent {
    pub fn id(self) -> NodeId {
        match self {
            Parent::Lower(id) | Parent::Upper(id) => id,
        }
    }
}

/// Data of a main node.
#[derive(Debug, Clone)]
pub struct MainNode {
    is_final: bool,
    max_l: Option<usize>,
}

impl MainNode {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Length of the longest prefix of equal patterns in the ranking.
    ///
    /// Not computed yet, always `None`.
    pub fn max_l(&self) -> Option<usize> {
        self.max_l
    }
}

/// Kind-specific data of a node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A case-split node with its finality determined at construction.
    Main(MainNode),
}

#[derive(Debug, Clone)]
pub struct SplittingTreeNode {
    dnf: Dnf,
    patterns: Vec<OccurrencePattern>,
    column: usize,
    row: Option<usize>,
    parent: Option<Parent>,
    lower_child: Option<NodeId>,
    upper_child: Option<NodeId>,
    already_split: bool,
    kind: NodeKind,
}

impl SplittingTreeNode {
    /// Creates a main node.
    ///
    /// `patterns` must be the ranked patterns of the remaining variables.
    /// Without a parent the node is placed in column 0, otherwise in the
    /// column after its parent's.
    pub fn new(dnf: Dnf, patterns: Vec<OccurrencePattern>, parent: Option<Parent>) -> Self {
        let column = parent.map_or(0, |p| p.id().column() + 1);
        let kind = NodeKind::Main(MainNode {
            is_final: dnf.is_constant(),
            max_l: None,
        });
        Self {
            dnf,
            patterns,
            column,
            row: None,
            parent,
            lower_child: None,
            upper_child: None,
            already_split: false,
            kind,
        }
    }

    /// Creates a root node in column 0.
    pub fn main(dnf: Dnf, patterns: Vec<OccurrencePattern>) -> Self {
        Self::new(dnf, patterns, None)
    }

    pub fn dnf(&self) -> &Dnf {
        &self.dnf
    }

    /// Ranked occurrence patterns of the variables not yet eliminated.
    pub fn patterns(&self) -> &[OccurrencePattern] {
        &self.patterns
    }

    /// The variable the next split eliminates.
    pub fn top_variable(&self) -> Option<usize> {
        self.patterns.first().map(|p| p.variable())
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Row inside the column, assigned when the node is added to a context.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn id(&self) -> Option<NodeId> {
        self.row.map(|row| NodeId::new(self.column, row))
    }

    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    pub fn lower_parent(&self) -> Option<NodeId> {
        match self.parent {
            Some(Parent::Lower(id)) => Some(id),
            _ => None,
        }
    }

    pub fn upper_parent(&self) -> Option<NodeId> {
        match self.parent {
            Some(Parent::Upper(id)) => Some(id),
            _ => None,
        }
    }

    pub fn lower_child(&self) -> Option<NodeId> {
        self.lower_child
    }

    pub fn upper_child(&self) -> Option<NodeId> {
        self.upper_child
    }

    pub fn is_split(&self) -> bool {
        self.already_split
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn as_main(&self) -> &MainNode {
        let NodeKind::Main(main) = &self.kind;
        main
    }

    /// Returns `true` if the DNF of this node is constant, i.e. it has no
    /// clauses or consists of a single empty clause.
    pub fn is_final(&self) -> bool {
        self.as_main().is_final
    }
}

/// Owner of all nodes of a splitting tree.
#[derive(Debug, Clone)]
pub struct TreeContext {
    variable_count: usize,
    tree: Vec<Vec<SplittingTreeNode>>,
}

impl TreeContext {
    /// Creates an empty context with columns `0..=variable_count`.
    pub fn new(variable_count: usize) -> Self {
        Self {
            variable_count,
            tree: vec![Vec::new(); variable_count + 1],
        }
    }

    /// Creates a context for `dnf` holding a single main node as the root.
    pub fn with_main(dnf: Dnf) -> (Self, NodeId) {
        let setting = VariableSetting::new(&dnf);
        let mut ctx = Self::new(setting.len());
        let node = SplittingTreeNode::main(dnf, setting.into_patterns());
        let root = ctx.push(node);
        (ctx, root)
    }

    /// Number of variables in the original DNF.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of columns, i.e. `variable_count + 1`.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Total number of nodes in all columns.
    pub fn node_count(&self) -> usize {
        self.tree.iter().map(|c| c.len()).sum()
    }

    /// Appends `node` to its column and returns its id.
    ///
    /// The row of the node is its position in the column.
    pub fn add_node(&mut self, node: SplittingTreeNode) -> Result<NodeId> {
        if node.column >= self.tree.len() {
            return Err(LpbError::PreconditionViolation(format!(
                "column {} is out of range for {} variables",
                node.column, self.variable_count
            )));
        }
        Ok(self.push(node))
    }

    fn push(&mut self, mut node: SplittingTreeNode) -> NodeId {
        let column = &mut self.tree[node.column];
        let row = column.len();
        node.row = Some(row);
        let id = NodeId::new(node.column, row);
        column.push(node);
        id
    }

    /// Adds a main node for `dnf` over all variables of this context.
    pub fn add_main(&mut self, dnf: Dnf) -> Result<NodeId> {
        let setting = VariableSetting::with_variables(&dnf, self.variable_count)?;
        self.add_node(SplittingTreeNode::main(dnf, setting.into_patterns()))
    }

    pub fn column(&self, column: usize) -> &[SplittingTreeNode] {
        self.tree.get(column).map(|c| c.as_slice()).unwrap_or(&[])
    }

    pub fn get(&self, id: NodeId) -> Option<&SplittingTreeNode> {
        self.tree.get(id.column())?.get(id.row())
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this context.
    pub fn node(&self, id: NodeId) -> &SplittingTreeNode {
        &self.tree[id.column()][id.row()]
    }

    /// All nodes, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SplittingTreeNode)> + '_ {
        self.tree.iter().enumerate().flat_map(|(c, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(r, node)| (NodeId::new(c, r), node))
        })
    }

    /// Lower and upper child of a split node.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let node = self.get(id)?;
        Some((node.lower_child?, node.upper_child?))
    }

    /// Splits the node `id` on its most important remaining variable.
    ///
    /// Returns the lower (`v = false`) and upper (`v = true`) child. Both
    /// children carry the patterns of the remaining variables, recomputed on
    /// their own DNF. Splitting a node twice returns the existing children.
    ///
    /// Fails if `id` is unknown or the node has no variables left.
    pub fn split(&mut self, id: NodeId) -> Result<(NodeId, NodeId)> {
        let node = self
            .get(id)
            .ok_or_else(|| LpbError::PreconditionViolation(format!("no node {} in this tree", id)))?;

        if node.already_split {
            if let (Some(low), Some(high)) = (node.lower_child, node.upper_child) {
                return Ok((low, high));
            }
        }

        let var = node
            .top_variable()
            .ok_or_else(|| LpbError::PreconditionViolation(format!("node {} has no variables left to split", id)))?;
        if id.column() + 1 >= self.tree.len() {
            return Err(LpbError::PreconditionViolation(format!(
                "node {} is in the last column and cannot be split",
                id
            )));
        }

        let remaining: Vec<usize> = node.patterns[1..].iter().map(|p| p.variable()).collect();
        let low_dnf = node.dnf.lower_cofactor(var);
        let high_dnf = node.dnf.upper_cofactor(var);
        let low_patterns = rank_patterns(&low_dnf, remaining.iter().copied());
        let high_patterns = rank_patterns(&high_dnf, remaining.iter().copied());

        let low = self.push(SplittingTreeNode::new(low_dnf, low_patterns, Some(Parent::Lower(id))));
        let high = self.push(SplittingTreeNode::new(high_dnf, high_patterns, Some(Parent::Upper(id))));

        let node = &mut self.tree[id.column()][id.row()];
        node.already_split = true;
        node.lower_child = Some(low);
        node.upper_child = Some(high);

        debug!(
            "split {} on x{}: lower {} = {}, upper {} = {}",
            id,
            var,
            low,
            self.node(low).dnf,
            high,
            self.node(high).dnf
        );
        Ok((low, high))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn example() -> Dnf {
        Dnf::from(vec![vec![0], vec![1, 2], vec![1, 3, 4]])
    }

    #[test]
    fn test_context_len() {
        let ctx = TreeContext::new(4);
        assert_eq!(ctx.len(), 5);
        assert_eq!(ctx.variable_count(), 4);
        assert_eq!(ctx.node_count(), 0);
        assert!(ctx.column(0).is_empty());
        assert!(ctx.column(17).is_empty());
    }

    #[test]
    fn test_add_node_rows() {
        let mut ctx = TreeContext::new(2);
        let a = ctx.add_node(SplittingTreeNode::new(Dnf::tautology(), Vec::new(), None)).unwrap();
        let b = ctx.add_node(SplittingTreeNode::new(Dnf::contradiction(), Vec::new(), None)).unwrap();
        let c = ctx
            .add_node(SplittingTreeNode::new(Dnf::tautology(), Vec::new(), Some(Parent::Upper(a))))
            .unwrap();
        assert_eq!(a, NodeId::new(0, 0));
        assert_eq!(b, NodeId::new(0, 1));
        assert_eq!(c, NodeId::new(1, 0));
        assert_eq!(ctx.node(b).row(), Some(1));
        assert_eq!(ctx.node(c).upper_parent(), Some(a));
        assert_eq!(ctx.node(c).lower_parent(), None);
        assert_eq!(ctx.column(0).len(), 2);
        assert_eq!(ctx.node_count(), 3);
    }

    #[test]
    fn test_add_node_out_of_range() {
        let mut ctx = TreeContext::new(0);
        let root = ctx.add_node(SplittingTreeNode::new(Dnf::tautology(), Vec::new(), None)).unwrap();
        let child = SplittingTreeNode::new(Dnf::tautology(), Vec::new(), Some(Parent::Lower(root)));
        assert!(matches!(ctx.add_node(child), Err(LpbError::PreconditionViolation(_))));
    }

    #[test]
    fn test_main_node() {
        let (ctx, root) = TreeContext::with_main(example());
        let node = ctx.node(root);
        assert_eq!(root, NodeId::new(0, 0));
        assert_eq!(ctx.variable_count(), 5);
        assert_eq!(node.column(), 0);
        assert_eq!(node.parent(), None);
        assert!(!node.is_split());
        assert!(!node.is_final());
        let main = node.as_main();
        assert!(!main.is_final());
        assert_eq!(main.max_l(), None);
        assert_eq!(node.top_variable(), Some(0));
        assert_eq!(node.patterns().len(), 5);
    }

    #[test]
    fn test_main_node_final() {
        let (ctx, root) = TreeContext::with_main(Dnf::tautology());
        assert!(ctx.node(root).is_final());
        let (ctx, root) = TreeContext::with_main(Dnf::contradiction());
        assert!(ctx.node(root).is_final());
        let (ctx, root) = TreeContext::with_main(Dnf::from(vec![vec![], vec![0]]));
        assert!(!ctx.node(root).is_final());
    }

    #[test]
    fn test_add_main() {
        let mut ctx = TreeContext::new(6);
        let root = ctx.add_main(example()).unwrap();
        assert_eq!(ctx.node(root).patterns().len(), 6);
        assert!(matches!(
            TreeContext::new(2).add_main(example()),
            Err(LpbError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_split() {
        let (mut ctx, root) = TreeContext::with_main(example());
        let (low, high) = ctx.split(root).unwrap();

        assert_eq!(low, NodeId::new(1, 0));
        assert_eq!(high, NodeId::new(1, 1));
        assert!(ctx.node(root).is_split());
        assert_eq!(ctx.children(root), Some((low, high)));

        let low_node = ctx.node(low);
        assert_eq!(low_node.dnf(), &Dnf::from(vec![vec![1, 2], vec![1, 3, 4]]));
        assert_eq!(low_node.lower_parent(), Some(root));
        assert_eq!(low_node.upper_parent(), None);
        assert_eq!(low_node.column(), 1);
        assert!(!low_node.is_final());
        assert!(!low_node.as_main().is_final());
        assert_eq!(low_node.as_main().max_l(), None);
        // x1: [2, 3], x2: [2], x3: [3], x4: [3]
        let vars: Vec<usize> = low_node.patterns().iter().map(|p| p.variable()).collect();
        assert_eq!(vars, vec![1, 2, 3, 4]);

        let high_node = ctx.node(high);
        assert!(high_node.dnf().is_true());
        assert!(high_node.is_final());
        assert!(high_node.as_main().is_final());
        assert_eq!(high_node.upper_parent(), Some(root));
        assert_eq!(high_node.patterns().len(), 4);
        assert!(high_node.patterns().iter().all(|p| p.is_empty()));
    }

    #[test]
    fn test_split_is_idempotent() {
        let (mut ctx, root) = TreeContext::with_main(example());
        let first = ctx.split(root).unwrap();
        let second = ctx.split(root).unwrap();
        assert_eq!(first, second);
        assert_eq!(ctx.node_count(), 3);
    }

    #[test]
    fn test_split_twice_deep() {
        let (mut ctx, root) = TreeContext::with_main(example());
        let (low, _) = ctx.split(root).unwrap();
        let (low_low, low_high) = ctx.split(low).unwrap();
        assert_eq!(low_low.column(), 2);
        assert_eq!(low_high.column(), 2);
        // x1 eliminated: false kills both clauses, true leaves x2 | x3 x4.
        assert!(ctx.node(low_low).is_final());
        assert_eq!(ctx.node(low_high).dnf(), &Dnf::from(vec![vec![2], vec![3, 4]]));
        assert_eq!(ctx.node(low_high).top_variable(), Some(2));
        assert_eq!(ctx.column(2).len(), 2);
    }

    #[test]
    fn test_split_without_variables() {
        let (mut ctx, root) = TreeContext::with_main(Dnf::tautology());
        assert!(matches!(ctx.split(root), Err(LpbError::PreconditionViolation(_))));
        assert!(!ctx.node(root).is_split());
        assert!(matches!(
            ctx.split(NodeId::new(0, 9)),
            Err(LpbError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_iter() {
        let (mut ctx, root) = TreeContext::with_main(example());
        ctx.split(root).unwrap();
        let ids: Vec<NodeId> = ctx.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![NodeId::new(0, 0), NodeId::new(1, 0), NodeId::new(1, 1)]);
        for (id, node) in ctx.iter() {
            assert_eq!(node.id(), Some(id));
        }
    }
}
