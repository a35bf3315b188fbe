//! Tree construction from the flat item table.

use uuid::Uuid;

use folderhub_entity::item::{FileSystemItem, TreeNode};

/// Build the ordered sequence of direct children of `parent_id`, each
/// carrying its own recursively built children.
///
/// The grouping key is `parent_id`, never path-string matching: the flat
/// list is the arena and `id`/`parent_id` are the indices into it, so the
/// caller must supply accurate identifiers and parent references. The input
/// set is finite and acyclic by the data-model invariant, which bounds the
/// recursion. A node with no children gets `children: None` so the field is
/// omitted from the serialized output.
pub fn build_tree(items: &[FileSystemItem], parent_id: Option<Uuid>) -> Vec<TreeNode> {
    items
        .iter()
        .filter(|item| item.parent_id == parent_id)
        .map(|item| {
            let children = build_tree(items, Some(item.id));
            TreeNode {
                id: item.id,
                name: item.name.clone(),
                kind: item.kind,
                children: (!children.is_empty()).then_some(children),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folderhub_entity::item::ItemKind;

    fn item(
        id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
        full_path: &str,
        kind: ItemKind,
    ) -> FileSystemItem {
        let now = Utc::now();
        FileSystemItem {
            id,
            parent_id,
            name: name.to_string(),
            full_path: full_path.to_string(),
            kind,
            file_content: None,
            file_type: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flatten a tree back into (id, parent_id) pairs by traversal.
    fn flatten(nodes: &[TreeNode], parent: Option<Uuid>, out: &mut Vec<(Uuid, Option<Uuid>)>) {
        for node in nodes {
            out.push((node.id, parent));
            if let Some(children) = &node.children {
                flatten(children, Some(node.id), out);
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_forest() {
        assert!(build_tree(&[], None).is_empty());
    }

    #[test]
    fn test_three_level_chain() {
        let animals = Uuid::new_v4();
        let dogs = Uuid::new_v4();
        let somedog = Uuid::new_v4();
        let items = vec![
            item(animals, None, "animals", "animals", ItemKind::Folder),
            item(dogs, Some(animals), "dogs", "animals/dogs", ItemKind::Folder),
            item(
                somedog,
                Some(dogs),
                "somedog.txt",
                "animals/dogs/somedog.txt",
                ItemKind::File,
            ),
        ];

        let tree = build_tree(&items, None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "animals");
        assert_eq!(tree[0].kind, ItemKind::Folder);

        let dogs_node = &tree[0].children.as_ref().unwrap()[0];
        assert_eq!(dogs_node.name, "dogs");

        let file_node = &dogs_node.children.as_ref().unwrap()[0];
        assert_eq!(file_node.name, "somedog.txt");
        assert_eq!(file_node.kind, ItemKind::File);
        assert!(file_node.children.is_none());
    }

    #[test]
    fn test_structural_round_trip() {
        // Two roots, one with two children, one grandchild.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let d = Uuid::new_v4();
        let e = Uuid::new_v4();
        let items = vec![
            item(a, None, "a", "a", ItemKind::Folder),
            item(b, None, "b", "b", ItemKind::Folder),
            item(c, Some(a), "c", "a/c", ItemKind::Folder),
            item(d, Some(a), "d.txt", "a/d.txt", ItemKind::File),
            item(e, Some(c), "e.txt", "a/c/e.txt", ItemKind::File),
        ];

        let tree = build_tree(&items, None);
        let mut flat = Vec::new();
        flatten(&tree, None, &mut flat);

        let mut expected: Vec<(Uuid, Option<Uuid>)> =
            items.iter().map(|i| (i.id, i.parent_id)).collect();
        flat.sort();
        expected.sort();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_grouping_is_by_parent_id_not_path() {
        // Stale paths must not influence grouping.
        let root = Uuid::new_v4();
        let child = Uuid::new_v4();
        let items = vec![
            item(root, None, "new", "new", ItemKind::Folder),
            item(child, Some(root), "kid", "old/kid", ItemKind::Folder),
        ];

        let tree = build_tree(&items, None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].child_count(), 1);
    }

    #[test]
    fn test_rooting_at_missing_parent_is_empty() {
        let items = vec![item(Uuid::new_v4(), None, "a", "a", ItemKind::Folder)];
        assert!(build_tree(&items, Some(Uuid::new_v4())).is_empty());
    }
}
