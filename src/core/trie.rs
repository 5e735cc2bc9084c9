// --- File: src/core/trie.rs
use crate::core::types::WordId;
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<u8, usize>,
    word_id: Option<WordId>,
    /// Smallest WordId stored anywhere below (and including) this node.
    min_id_in_subtree: WordId,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), word_id: None, min_id_in_subtree: WordId::MAX }
    }
}

/// Byte trie over romanized keys, used for prefix completion.
///
/// Completions come back in definition order (ascending `WordId`), so the
/// subtree minimum lets the search skip branches that cannot improve the
/// current top-k.
#[derive(Debug, Clone)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Maps `key` to `word_id`. Re-inserting a key keeps the id it already has.
    /// O(k) where k is the key length.
    pub fn insert(&mut self, key: &str, word_id: WordId) {
        let mut node_idx = 0;
        let mut path = vec![0];
        for &byte in key.as_bytes() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            path.push(node_idx);
        }

        let stored = *self.nodes[node_idx].word_id.get_or_insert(word_id);

        for &idx in path.iter().rev() {
            let node = &mut self.nodes[idx];
            if stored < node.min_id_in_subtree {
                node.min_id_in_subtree = stored;
            } else {
                break;
            }
        }
    }

    /// The first `k` ids, in ascending order, whose key starts with `prefix`.
    pub fn first_k_with_prefix(&self, prefix: &str, k: usize) -> Vec<WordId> {
        if k == 0 {
            return vec![];
        }
        let mut node_idx = 0;
        for &byte in prefix.as_bytes() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => return vec![],
            }
        }

        // Max-heap of the k smallest ids seen so far.
        let mut heap = BinaryHeap::with_capacity(k + 1);
        self.dfs_search(node_idx, k, &mut heap);
        heap.into_sorted_vec()
    }

    fn dfs_search(&self, node_idx: usize, k: usize, heap: &mut BinaryHeap<WordId>) {
        let node = &self.nodes[node_idx];
        if let Some(id) = node.word_id {
            heap.push(id);
            if heap.len() > k {
                heap.pop();
            }
        }

        for &child_idx in node.children.values() {
            let worst_kept = if heap.len() == k { heap.peek().copied() } else { None };
            let child_min = self.nodes[child_idx].min_id_in_subtree;
            if worst_kept.map_or(true, |worst| child_min < worst) {
                self.dfs_search(child_idx, k, heap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(keys: &[&str]) -> WordTrie {
        let mut t = WordTrie::new();
        for (id, key) in keys.iter().enumerate() {
            t.insert(key, id);
        }
        t
    }

    #[test]
    fn prefix_results_in_definition_order() {
        let t = trie(&["thulo", "plate", "thali", "than", "thermos"]);
        assert_eq!(t.first_k_with_prefix("th", 10), vec![0, 2, 3, 4]);
        assert_eq!(t.first_k_with_prefix("tha", 10), vec![2, 3]);
    }

    #[test]
    fn limit_keeps_earliest() {
        let t = trie(&["aa", "ab", "ac", "ad", "ae", "af", "ag"]);
        assert_eq!(t.first_k_with_prefix("a", 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(t.first_k_with_prefix("a", 0), Vec::<WordId>::new());
    }

    #[test]
    fn exact_key_is_its_own_prefix() {
        let t = trie(&["pan", "pack"]);
        assert_eq!(t.first_k_with_prefix("pan", 5), vec![0]);
    }

    #[test]
    fn missing_prefix() {
        let t = trie(&["pan"]);
        assert!(t.first_k_with_prefix("x", 5).is_empty());
        assert!(t.first_k_with_prefix("pane", 5).is_empty());
    }

    #[test]
    fn reinsert_keeps_first_id() {
        let mut t = trie(&["thali", "steel"]);
        t.insert("thali", 7);
        assert_eq!(t.first_k_with_prefix("", 5), vec![0, 1]);
    }
}
