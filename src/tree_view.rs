//! termtree rendering for roster hierarchies

use termtree::Tree;

use crate::domain::{Project, User};

pub trait ToTree {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ToTree for Project {
    fn to_tree_string(&self) -> Tree<String> {
        let root = format!("{} ({} items)", self.name, self.items.len());

        let leaves: Vec<_> = self
            .items
            .iter()
            .map(|item| Tree::new(item.name.clone()))
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

impl ToTree for User {
    fn to_tree_string(&self) -> Tree<String> {
        // The root of the Tree<String> is the user name plus the aggregate label
        let root = format!("{} ({})", self.name, self.item_count_label());

        let leaves: Vec<_> = self
            .projects
            .iter()
            .map(|p| p.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
