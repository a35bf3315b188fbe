//! Tree node projection for hierarchical read responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::ItemKind;

/// A node of the nested tree returned by retrieval.
///
/// Transient and never persisted. The `children` field is omitted from the
/// serialized form entirely when the node is a leaf, so consumers can
/// distinguish "no children" from "has children".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Item ID.
    pub id: Uuid,
    /// Segment name.
    pub name: String,
    /// File or folder.
    pub kind: ItemKind,
    /// Child nodes; `None` (omitted) for leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_omits_children_field() {
        let node = TreeNode {
            id: Uuid::new_v4(),
            name: "somedog.txt".to_string(),
            kind: ItemKind::File,
            children: None,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_branch_keeps_children_field() {
        let node = TreeNode {
            id: Uuid::new_v4(),
            name: "animals".to_string(),
            kind: ItemKind::Folder,
            children: Some(vec![TreeNode {
                id: Uuid::new_v4(),
                name: "dogs".to_string(),
                kind: ItemKind::Folder,
                children: None,
            }]),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["children"].as_array().unwrap().len(), 1);
    }
}
