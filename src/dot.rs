//! Splitting tree to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - nodes of one column share a rank, so the columns are laid out left to
//!   right or top to bottom depending on the renderer,
//! - **final** nodes (constant DNF) use the final shape, all others the node
//!   shape,
//! - the root (column 0) uses the root shape,
//! - solid edges lead to upper children (`v = true`), dashed edges to lower
//!   children (`v = false`). Edges are labeled with the eliminated variable.
//!
//! # Examples
//!
//! ```
//! use lpb_rs::dnf::Dnf;
//! use lpb_rs::tree::TreeContext;
//!
//! let (mut ctx, root) = TreeContext::with_main(Dnf::from(vec![vec![0, 1], vec![2]]));
//! ctx.split(root).unwrap();
//! let dot = ctx.to_dot().unwrap();
//! // Render with: dot -Tpng tree.dot -o tree.png
//! assert!(dot.starts_with("graph {"));
//! ```

use std::fmt::Write as _;

use crate::tree::TreeContext;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for non-final nodes (default: "ellipse")
    pub node_shape: &'static str,
    /// Shape for final nodes (default: "box")
    pub final_shape: &'static str,
    /// Shape for nodes in column 0 (default: "rect")
    pub root_shape: &'static str,
    /// Style for edges to upper children (default: "solid")
    pub upper_edge_style: &'static str,
    /// Style for edges to lower children (default: "dashed")
    pub lower_edge_style: &'static str,
    /// Whether to print the DNF inside each node (default: true)
    pub show_dnf: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "ellipse",
            final_shape: "box",
            root_shape: "rect",
            upper_edge_style: "solid",
            lower_edge_style: "dashed",
            show_dnf: true,
        }
    }
}

impl TreeContext {
    /// Converts the splitting tree to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the splitting tree to DOT format.
    ///
    /// Every node of every column is rendered, whether it is reachable from a
    /// particular root or not.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for column in 0..self.len() {
            if self.column(column).is_empty() {
                continue;
            }
            writeln!(dot, "{{ rank=same")?;
            for (row, node) in self.column(column).iter().enumerate() {
                let label = if config.show_dnf {
                    format!("{},{}\\n{}", column, row, node.dnf())
                } else {
                    format!("{},{}", column, row)
                };
                let shape = if node.is_final() {
                    config.final_shape
                } else if column == 0 {
                    config.root_shape
                } else {
                    config.node_shape
                };
                writeln!(dot, "n{}_{} [shape={}, label=\"{}\"];", column, row, shape, label)?;
            }
            writeln!(dot, "}}")?;
        }

        for (id, node) in self.iter() {
            let var = match node.top_variable() {
                Some(var) => var,
                None => continue,
            };
            if let Some(low) = node.lower_child() {
                writeln!(
                    dot,
                    "{} -- {} [style={}, label=\"x{}=0\"];",
                    id, low, config.lower_edge_style, var
                )?;
            }
            if let Some(high) = node.upper_child() {
                writeln!(
                    dot,
                    "{} -- {} [style={}, label=\"x{}=1\"];",
                    id, high, config.upper_edge_style, var
                )?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
