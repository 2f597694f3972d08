// Trie node arena.
//
// Nodes live in one Vec and refer to each other by index. Children of a node
// form a singly linked sibling chain starting at `first_child`, in insertion
// order. Dropping the arena releases every node at once.

/// Index of a node within a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One byte position along one or more registered patterns.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Parent node; `None` for a root.
    pub parent: Option<NodeId>,
    /// First node of the child chain.
    pub first_child: Option<NodeId>,
    /// Next node in the parent's child chain.
    pub next_sibling: Option<NodeId>,
    /// Input byte consumed by this node.
    pub byte: u8,
    /// Output for a pattern ending here. Presence marks a terminus, even
    /// when the replacement is empty.
    pub replacement: Option<Box<[u8]>>,
}

impl TrieNode {
    /// Whether a registered pattern ends at this node.
    #[inline]
    pub fn is_terminus(&self) -> bool {
        self.replacement.is_some()
    }
}

/// Owner of every node in a table.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a detached node for `byte` under `parent`.
    ///
    /// The caller links it into the parent's child chain.
    pub fn alloc(&mut self, parent: Option<NodeId>, byte: u8) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode {
            parent,
            first_child: None,
            next_sibling: None,
            byte,
            replacement: None,
        });
        id
    }

    /// Find the child of `node` consuming `byte`.
    pub fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        self.children(node).find(|&c| self.get(c).byte == byte)
    }

    /// Iterate over the children of `node` in insertion order.
    pub fn children(&self, node: NodeId) -> Children<'_> {
        Children {
            arena: self,
            next: self.get(node).first_child,
        }
    }

    /// Step from `node` to its child for `byte`, creating the child (at the
    /// end of the sibling chain) when missing.
    pub fn step(&mut self, node: NodeId, byte: u8) -> NodeId {
        let Some(mut cur) = self.get(node).first_child else {
            let child = self.alloc(Some(node), byte);
            self.get_mut(node).first_child = Some(child);
            return child;
        };
        loop {
            if self.get(cur).byte == byte {
                return cur;
            }
            match self.get(cur).next_sibling {
                Some(next) => cur = next,
                None => break,
            }
        }
        let child = self.alloc(Some(node), byte);
        self.get_mut(cur).next_sibling = Some(child);
        child
    }

    /// Walk (creating as needed) the path for `rest` below `start` and
    /// return the final node.
    pub fn extend_path(&mut self, start: NodeId, rest: &[u8]) -> NodeId {
        rest.iter().fold(start, |node, &b| self.step(node, b))
    }

    /// Depth of `node`, counting a root as 1.
    pub fn depth(&self, node: NodeId) -> usize {
        let mut depth = 1;
        let mut cur = node;
        while let Some(parent) = self.get(cur).parent {
            depth += 1;
            cur = parent;
        }
        depth
    }
}

/// Iterator over a node's child chain.
pub struct Children<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.arena.get(id).next_sibling;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_creates_then_reuses() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(None, b'a');
        let b1 = arena.step(root, b'b');
        let b2 = arena.step(root, b'b');
        assert_eq!(b1, b2);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(b1).parent, Some(root));
    }

    #[test]
    fn siblings_keep_insertion_order() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(None, b'x');
        for b in [b'c', b'a', b'b'] {
            arena.step(root, b);
        }
        let order: Vec<u8> = arena.children(root).map(|c| arena.get(c).byte).collect();
        assert_eq!(order, b"cab");
        assert!(arena.child(root, b'a').is_some());
        assert!(arena.child(root, b'z').is_none());
    }

    #[test]
    fn extend_path_shares_prefix() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(None, b'a');
        let abc = arena.extend_path(root, b"bc");
        let abd = arena.extend_path(root, b"bd");
        assert_ne!(abc, abd);
        assert_eq!(arena.get(abc).parent, arena.get(abd).parent);
        assert_eq!(arena.len(), 4); // a, b, c, d
        assert_eq!(arena.depth(abc), 3);
    }

    #[test]
    fn extend_path_empty_rest_is_start() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(None, b'q');
        assert_eq!(arena.extend_path(root, b""), root);
        assert_eq!(arena.depth(root), 1);
    }

    #[test]
    fn terminus_flag_follows_replacement() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(None, b'a');
        assert!(!arena.get(root).is_terminus());
        arena.get_mut(root).replacement = Some(Box::from(&b""[..]));
        assert!(arena.get(root).is_terminus());
    }
}
