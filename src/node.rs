//! A generic ordered n-ary tree.
//!
//! Each [`Node`] exclusively owns its children, there are no parent links.
//! All walks are iterative (explicit stack or FIFO queue), so the depth of a
//! tree is only bounded by memory, never by the call stack. Dropping a tree
//! is iterative too.
//!
//! Depth-first walks are pre-order: a node is visited before any of its
//! descendants and siblings are visited left to right. Breadth-first walks
//! visit nodes in non-decreasing depth order, siblings left to right.

use std::collections::VecDeque;

use serde_derive::Deserialize;

/// The order in which a tree is walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Pre-order, left to right.
    #[default]
    DepthFirst,
    /// Level order, left to right.
    BreadthFirst,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    /// Creates a node without children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Appends a child and returns a mutable reference to it.
    pub fn add_child(&mut self, child: Node<T>) -> &mut Node<T> {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Visits every value in pre-order.
    pub fn traverse_depth_first(&self, mut visit: impl FnMut(&T)) {
        self.traverse_node_depth_first(|node| visit(&node.value));
    }

    /// Visits every node in pre-order.
    pub fn traverse_node_depth_first(&self, mut visit: impl FnMut(&Node<T>)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            // reversed so that the left-most child is popped next
            stack.extend(node.children.iter().rev());
        }
    }

    /// Visits every node in pre-order, allowing the visitor to mutate values.
    ///
    /// The children of a node are pushed after the visitor returns, so a
    /// visitor must not add or remove children if the walk is to cover exactly
    /// the nodes present when it started.
    pub fn traverse_node_depth_first_mut(&mut self, mut visit: impl FnMut(&mut Node<T>)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children.iter_mut().rev());
        }
    }

    /// Visits every value in level order.
    pub fn traverse_breadth_first(&self, mut visit: impl FnMut(&T)) {
        self.traverse_node_breadth_first(|node| visit(&node.value));
    }

    /// Visits every node in level order.
    pub fn traverse_node_breadth_first(&self, mut visit: impl FnMut(&Node<T>)) {
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.children.iter());
        }
    }

    /// Visits every node in level order, allowing the visitor to mutate values.
    pub fn traverse_node_breadth_first_mut(&mut self, mut visit: impl FnMut(&mut Node<T>)) {
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.children.iter_mut());
        }
    }

    /// Visits every value in the given order.
    pub fn traverse(&self, order: TraversalOrder, visit: impl FnMut(&T)) {
        match order {
            TraversalOrder::DepthFirst => self.traverse_depth_first(visit),
            TraversalOrder::BreadthFirst => self.traverse_breadth_first(visit),
        }
    }

    /// Returns the first node, in pre-order, matching the predicate.
    pub fn find_node(&self, mut pred: impl FnMut(&Node<T>) -> bool) -> Option<&Node<T>> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if pred(node) {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Returns the first node, in pre-order, matching the predicate.
    pub fn find_node_mut(
        &mut self,
        mut pred: impl FnMut(&Node<T>) -> bool,
    ) -> Option<&mut Node<T>> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if pred(node) {
                return Some(node);
            }
            stack.extend(node.children.iter_mut().rev());
        }
        None
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.traverse_node_depth_first(|_| count += 1);
        count
    }
}

impl<T> Drop for Node<T> {
    // the derived drop would recurse once per level
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    //        1
    //      / | \
    //     2  5  6
    //    / \     \
    //   3   4     7
    //              \
    //               8
    fn sample() -> Node<u32> {
        let mut root = Node::new(1);
        let two = root.add_child(Node::new(2));
        two.add_child(Node::new(3));
        two.add_child(Node::new(4));
        root.add_child(Node::new(5));
        root.add_child(Node::new(6))
            .add_child(Node::new(7))
            .add_child(Node::new(8));
        root
    }

    fn depth_of(root: &Node<u32>, value: u32) -> usize {
        let mut stack = vec![(root, 0)];
        while let Some((node, depth)) = stack.pop() {
            if node.value == value {
                return depth;
            }
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        panic!("value {value} not in tree");
    }

    fn recursive_pre_order(node: &Node<u32>, out: &mut Vec<u32>) {
        out.push(node.value);
        for child in &node.children {
            recursive_pre_order(child, out);
        }
    }

    #[test]
    fn test_depth_first_is_pre_order() {
        let root = sample();
        let mut visited = Vec::new();
        root.traverse_depth_first(|v| visited.push(*v));
        assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let mut expected = Vec::new();
        recursive_pre_order(&root, &mut expected);
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_depth_first_is_deterministic() {
        let root = sample();
        let mut first = Vec::new();
        let mut second = Vec::new();
        root.traverse_depth_first(|v| first.push(*v));
        root.traverse_depth_first(|v| second.push(*v));
        assert_eq!(first, second);
    }

    #[test]
    fn test_breadth_first_is_level_order() {
        let root = sample();
        let mut visited = Vec::new();
        root.traverse_breadth_first(|v| visited.push(*v));
        assert_eq!(visited, vec![1, 2, 5, 6, 3, 4, 7, 8]);

        let depths: Vec<_> = visited.iter().map(|v| depth_of(&root, *v)).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_node_walks_match_value_walks() {
        let root = sample();
        let mut by_value = Vec::new();
        let mut by_node = Vec::new();
        root.traverse_breadth_first(|v| by_value.push(*v));
        root.traverse_node_breadth_first(|n| by_node.push(n.value));
        assert_eq!(by_value, by_node);

        by_value.clear();
        by_node.clear();
        root.traverse(TraversalOrder::DepthFirst, |v| by_value.push(*v));
        root.traverse_node_depth_first(|n| by_node.push(n.value));
        assert_eq!(by_value, by_node);
    }

    #[test]
    fn test_single_node_is_visited_once() {
        let root = Node::new(42);
        let mut visited = Vec::new();
        root.traverse_depth_first(|v| visited.push(*v));
        root.traverse_breadth_first(|v| visited.push(*v));
        assert_eq!(visited, vec![42, 42]);
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn test_mut_walks_only_touch_values() {
        let mut root = sample();
        root.traverse_node_depth_first_mut(|n| n.value *= 10);
        root.traverse_node_breadth_first_mut(|n| n.value += 1);

        let mut visited = Vec::new();
        root.traverse_depth_first(|v| visited.push(*v));
        assert_eq!(visited, vec![11, 21, 31, 41, 51, 61, 71, 81]);
        assert_eq!(root.node_count(), 8);
    }

    #[test]
    fn test_find_node_returns_first_in_pre_order() {
        let mut root = sample();
        let found = root.find_node(|n| n.value > 2).map(|n| n.value);
        assert_eq!(found, Some(3));

        if let Some(node) = root.find_node_mut(|n| n.value == 7) {
            node.value = 70;
        }
        assert!(root.find_node(|n| n.value == 70).is_some());
        assert!(root.find_node(|n| n.value == 99).is_none());
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        const DEPTH: u32 = 100_000;

        let mut root = Node::new(0);
        let mut cursor = &mut root;
        for value in 1..DEPTH {
            cursor = cursor.add_child(Node::new(value));
        }

        let mut count = 0;
        root.traverse_depth_first(|_| count += 1);
        assert_eq!(count, DEPTH);

        count = 0;
        root.traverse_breadth_first(|_| count += 1);
        assert_eq!(count, DEPTH);
        assert!(root.find_node(|n| n.value == DEPTH - 1).is_some());
    }
}
