//! Navigation tree derived from widget paths.
//!
//! Every directory-like prefix of a registered path becomes a [`NavNode`].
//! Nodes live in a flat arena (the [`NavTree`]) and reference each other by
//! index, so a node can be looked up by id without walking from the root.

use std::collections::HashMap;

use super::path::{self, ROOT};

/// Index into [`NavTree::nodes`].
pub type NodeId = usize;

/// One folder in the navigation sidebar.
#[derive(Debug, Clone)]
pub struct NavNode {
    /// Display name (the last path segment, or `Root`).
    pub name: String,
    /// Normalised path, e.g. `/Person/Profile`.
    pub path: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Registry keys of widgets placed directly in this node, in
    /// registration order.
    pub widgets: Vec<String>,
    /// Whether the node's children are shown in the sidebar.
    pub expanded: bool,
    /// Depth from the root (0 = root).
    pub depth: usize,
}

/// Arena-backed navigation tree with an always-present root at `/`.
#[derive(Debug, Clone)]
pub struct NavTree {
    pub nodes: Vec<NavNode>,
    pub root: NodeId,
    by_path: HashMap<String, NodeId>,
}

impl Default for NavTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NavTree {
    pub fn new() -> Self {
        let root = NavNode {
            name: "Root".to_string(),
            path: ROOT.to_string(),
            parent: None,
            children: Vec::new(),
            widgets: Vec::new(),
            expanded: true,
            depth: 0,
        };
        let mut by_path = HashMap::new();
        by_path.insert(ROOT.to_string(), 0);
        Self {
            nodes: vec![root],
            root: 0,
            by_path,
        }
    }

    /// Return the node for `path`, creating it and any missing ancestors.
    /// New nodes start expanded so freshly added folders are visible.
    pub fn ensure_path(&mut self, path: &str) -> NodeId {
        let mut parent = self.root;
        for prefix in path::prefixes(path) {
            parent = match self.by_path.get(&prefix) {
                Some(&id) => id,
                None => self.add_child(parent, prefix),
            };
        }
        parent
    }

    fn add_child(&mut self, parent_id: NodeId, path: String) -> NodeId {
        let depth = self.nodes[parent_id].depth + 1;
        let id = self.nodes.len();
        let name = path::segments(&path).last().unwrap_or_default().to_string();
        self.by_path.insert(path.clone(), id);
        self.nodes.push(NavNode {
            name,
            path,
            parent: Some(parent_id),
            children: Vec::new(),
            widgets: Vec::new(),
            expanded: true,
            depth,
        });
        self.nodes[parent_id].children.push(id);
        id
    }

    /// Look up a node by normalised path.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    /// Number of folders, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node ids shown in the sidebar: root first, depth-first, skipping the
    /// children of collapsed nodes.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_visible(self.root, &mut out);
        out
    }

    fn collect_visible(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        let node = &self.nodes[id];
        if node.expanded {
            for &child in &node.children {
                self.collect_visible(child, out);
            }
        }
    }

    pub fn toggle_expand(&mut self, id: NodeId) {
        self.nodes[id].expanded = !self.nodes[id].expanded;
    }

    /// Expand every ancestor of `id` so it becomes visible.
    pub fn reveal(&mut self, id: NodeId) {
        let mut cur = self.nodes[id].parent;
        while let Some(pid) = cur {
            self.nodes[pid].expanded = true;
            cur = self.nodes[pid].parent;
        }
    }

    pub fn get(&self, id: NodeId) -> &NavNode {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut NavNode {
        &mut self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_path_creates_each_prefix_once() {
        let mut tree = NavTree::new();
        let b = tree.ensure_path("/A/B");
        let c = tree.ensure_path("/A/C");
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(b).name, "B");
        assert_eq!(tree.get(b).depth, 2);
        assert_eq!(tree.get(b).parent, tree.get(c).parent);
        assert_eq!(tree.ensure_path("/A/B"), b);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn root_path_is_the_root_node() {
        let mut tree = NavTree::new();
        assert_eq!(tree.ensure_path("/"), tree.root);
        assert!(tree.is_empty());
    }

    #[test]
    fn visible_nodes_respect_collapse() {
        let mut tree = NavTree::new();
        let a = tree.ensure_path("/A");
        tree.ensure_path("/A/B");
        tree.ensure_path("/Z");
        assert_eq!(tree.visible_nodes().len(), 4);
        tree.toggle_expand(a);
        let names: Vec<&str> = tree
            .visible_nodes()
            .into_iter()
            .map(|id| tree.get(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["Root", "A", "Z"]);
    }

    #[test]
    fn reveal_expands_ancestors() {
        let mut tree = NavTree::new();
        let a = tree.ensure_path("/A");
        let b = tree.ensure_path("/A/B");
        tree.toggle_expand(a);
        tree.reveal(b);
        assert!(tree.get(a).expanded);
        assert!(tree.visible_nodes().contains(&b));
    }
}
