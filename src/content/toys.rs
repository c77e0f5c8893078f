//! Small teaching implementations used by lesson demos
//!
//! These exist to produce traces for the walkthroughs. They favour
//! readable steps over speed and are not exported outside the content layer.

use std::collections::{BTreeMap, VecDeque};

/// Array-backed stack drawn top-down
#[derive(Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T: std::fmt::Display> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn diagram(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["  Empty stack".to_string()];
        }
        let mut lines = vec!["  ┌────────────┐".to_string()];
        for (idx, item) in self.items.iter().rev().enumerate() {
            let marker = if idx == 0 { " ← TOP" } else { "" };
            lines.push(format!("  │{:^12}│{}", item.to_string(), marker));
            if idx + 1 == self.items.len() {
                lines.push("  └────────────┘".to_string());
            } else {
                lines.push("  ├────────────┤".to_string());
            }
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

/// Binary heap in an array that narrates every swap
#[derive(Debug)]
pub struct Heap {
    items: Vec<i32>,
    kind: HeapKind,
}

impl Heap {
    pub fn new(kind: HeapKind) -> Self {
        Self { items: Vec::new(), kind }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }

    pub fn peek(&self) -> Option<i32> {
        self.items.first().copied()
    }

    fn above(&self, a: usize, b: usize) -> bool {
        match self.kind {
            HeapKind::Min => self.items[a] < self.items[b],
            HeapKind::Max => self.items[a] > self.items[b],
        }
    }

    /// Insert and return the swaps performed while sifting up
    pub fn push(&mut self, value: i32) -> Vec<String> {
        let mut trace = Vec::new();
        self.items.push(value);
        let mut idx = self.items.len() - 1;
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.above(idx, parent) {
                break;
            }
            trace.push(format!(
                "swap {} (index {}) with parent {} (index {})",
                self.items[idx], idx, self.items[parent], parent
            ));
            self.items.swap(idx, parent);
            idx = parent;
        }
        trace
    }

    /// Remove the root and return it with the sift-down swaps
    pub fn pop(&mut self) -> Option<(i32, Vec<String>)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop()?;

        let mut trace = Vec::new();
        let mut idx = 0;
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;
            if left < self.items.len() && self.above(left, best) {
                best = left;
            }
            if right < self.items.len() && self.above(right, best) {
                best = right;
            }
            if best == idx {
                break;
            }
            trace.push(format!(
                "swap {} (index {}) with child {} (index {})",
                self.items[idx], idx, self.items[best], best
            ));
            self.items.swap(idx, best);
            idx = best;
        }
        Some((root, trace))
    }

    /// Values grouped by tree level
    pub fn levels(&self) -> Vec<Vec<i32>> {
        let mut levels = Vec::new();
        let mut start = 0;
        let mut width = 1;
        while start < self.items.len() {
            let end = (start + width).min(self.items.len());
            levels.push(self.items[start..end].to_vec());
            start = end;
            width *= 2;
        }
        levels
    }
}

#[derive(Debug)]
struct BstNode {
    value: i32,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

/// Unbalanced binary search tree
#[derive(Debug, Default)]
pub struct Bst {
    root: Option<Box<BstNode>>,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert and return the path of values compared on the way down
    pub fn insert(&mut self, value: i32) -> Vec<i32> {
        fn descend(slot: &mut Option<Box<BstNode>>, value: i32, path: &mut Vec<i32>) {
            match slot {
                Some(node) => {
                    path.push(node.value);
                    let next = if value < node.value { &mut node.left } else { &mut node.right };
                    descend(next, value, path);
                }
                None => *slot = Some(Box::new(BstNode { value, left: None, right: None })),
            }
        }
        let mut path = Vec::new();
        descend(&mut self.root, value, &mut path);
        path
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut cur = &self.root;
        while let Some(node) = cur {
            if value == node.value {
                return true;
            }
            cur = if value < node.value { &node.left } else { &node.right };
        }
        false
    }

    pub fn height(&self) -> usize {
        fn go(node: &Option<Box<BstNode>>) -> usize {
            node.as_ref().map_or(0, |n| 1 + go(&n.left).max(go(&n.right)))
        }
        go(&self.root)
    }

    pub fn inorder(&self) -> Vec<i32> {
        fn go(node: &Option<Box<BstNode>>, out: &mut Vec<i32>) {
            if let Some(n) = node {
                go(&n.left, out);
                out.push(n.value);
                go(&n.right, out);
            }
        }
        let mut out = Vec::new();
        go(&self.root, &mut out);
        out
    }

    pub fn preorder(&self) -> Vec<i32> {
        fn go(node: &Option<Box<BstNode>>, out: &mut Vec<i32>) {
            if let Some(n) = node {
                out.push(n.value);
                go(&n.left, out);
                go(&n.right, out);
            }
        }
        let mut out = Vec::new();
        go(&self.root, &mut out);
        out
    }

    pub fn postorder(&self) -> Vec<i32> {
        fn go(node: &Option<Box<BstNode>>, out: &mut Vec<i32>) {
            if let Some(n) = node {
                go(&n.left, out);
                go(&n.right, out);
                out.push(n.value);
            }
        }
        let mut out = Vec::new();
        go(&self.root, &mut out);
        out
    }

    pub fn level_order(&self) -> Vec<Vec<i32>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<(&BstNode, usize)> = VecDeque::new();
        if let Some(root) = &self.root {
            queue.push_back((&**root, 0));
        }
        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() <= depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.value);
            for child in [&node.left, &node.right].into_iter().flatten() {
                queue.push_back((&**child, depth + 1));
            }
        }
        levels
    }
}

/// Prefix tree over chars
#[derive(Debug, Default)]
pub struct Trie {
    children: BTreeMap<char, Trie>,
    terminal: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word and return how many new nodes were created
    pub fn insert(&mut self, word: &str) -> usize {
        let mut created = 0;
        let mut node = self;
        for ch in word.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                Trie::default()
            });
        }
        node.terminal = true;
        created
    }

    fn walk(&self, prefix: &str) -> Option<&Trie> {
        let mut node = self;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n.terminal)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// All stored words beginning with `prefix`, in lexical order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        fn collect(node: &Trie, current: &mut String, out: &mut Vec<String>) {
            if node.terminal {
                out.push(current.clone());
            }
            for (ch, child) in &node.children {
                current.push(*ch);
                collect(child, current, out);
                current.pop();
            }
        }
        let mut out = Vec::new();
        if let Some(node) = self.walk(prefix) {
            let mut current = prefix.to_string();
            collect(node, &mut current, &mut out);
        }
        out
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Trie::node_count).sum::<usize>()
    }
}

/// Disjoint set with path compression and union by rank
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; false if they were already joined
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn parents(&self) -> &[usize] {
        &self.parent
    }
}

/// Undirected weighted graph stored as adjacency lists
#[derive(Debug)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, u32)>>,
}

impl Graph {
    pub fn new(vertices: usize, edges: &[(usize, usize, u32)]) -> Self {
        let mut adjacency = vec![Vec::new(); vertices];
        for &(a, b, w) in edges {
            adjacency[a].push((b, w));
            adjacency[b].push((a, w));
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Self { adjacency }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, v: usize) -> &[(usize, u32)] {
        &self.adjacency[v]
    }

    pub fn matrix(&self) -> Vec<Vec<u32>> {
        let n = self.adjacency.len();
        let mut m = vec![vec![0; n]; n];
        for (a, list) in self.adjacency.iter().enumerate() {
            for &(b, w) in list {
                m[a][b] = w;
            }
        }
        m
    }

    pub fn bfs(&self, start: usize) -> Vec<usize> {
        let mut seen = vec![false; self.adjacency.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &(next, _) in &self.adjacency[v] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    pub fn dfs(&self, start: usize) -> Vec<usize> {
        fn visit(g: &Graph, v: usize, seen: &mut [bool], order: &mut Vec<usize>) {
            seen[v] = true;
            order.push(v);
            for &(next, _) in &g.adjacency[v] {
                if !seen[next] {
                    visit(g, next, seen, order);
                }
            }
        }
        let mut seen = vec![false; self.adjacency.len()];
        let mut order = Vec::new();
        visit(self, start, &mut seen, &mut order);
        order
    }

    /// Shortest distances from `start`; None for unreachable vertices
    pub fn dijkstra(&self, start: usize) -> Vec<Option<u32>> {
        use std::cmp::Reverse;
        use std::collections::BinaryHeap;

        let mut dist: Vec<Option<u32>> = vec![None; self.adjacency.len()];
        let mut heap = BinaryHeap::from([Reverse((0u32, start))]);
        dist[start] = Some(0);
        while let Some(Reverse((d, v))) = heap.pop() {
            if dist[v].is_some_and(|best| d > best) {
                continue;
            }
            for &(next, w) in &self.adjacency[v] {
                let candidate = d + w;
                if dist[next].map_or(true, |cur| candidate < cur) {
                    dist[next] = Some(candidate);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }
        dist
    }
}

/// Bubble sort returning the array after every pass that changed something
pub fn bubble_sort_passes(items: &mut [i32]) -> Vec<Vec<i32>> {
    let mut passes = Vec::new();
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        passes.push(items.to_vec());
    }
    passes
}

/// Top-down merge sort that records each merge
pub fn merge_sort(items: &[i32], merges: &mut Vec<String>) -> Vec<i32> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], merges);
    let right = merge_sort(&items[mid..], merges);

    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merges.push(format!("{:?} + {:?} → {:?}", left, right, merged));
    merged
}

/// In-place quick sort (Lomuto partition) recording each partition
pub fn quick_sort(items: &mut [i32], partitions: &mut Vec<String>) {
    if items.len() <= 1 {
        return;
    }
    let pivot_idx = items.len() - 1;
    let pivot = items[pivot_idx];
    let mut store = 0;
    for i in 0..pivot_idx {
        if items[i] <= pivot {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, pivot_idx);
    partitions.push(format!(
        "pivot {}: {:?} | {} | {:?}",
        pivot,
        &items[..store],
        pivot,
        &items[store + 1..]
    ));
    let (left, right) = items.split_at_mut(store);
    quick_sort(left, partitions);
    quick_sort(&mut right[1..], partitions);
}

/// One probe of a binary search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

pub fn binary_search_probes(sorted: &[i32], target: i32) -> (Option<usize>, Vec<Probe>) {
    let mut probes = Vec::new();
    let (mut low, mut high) = (0usize, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        probes.push(Probe { low, mid, high: high - 1 });
        match sorted[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return (Some(mid), probes),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    (None, probes)
}

/// Fibonacci with a call counter, naive and memoized
pub fn fib_naive(n: u32, calls: &mut u64) -> u64 {
    *calls += 1;
    if n < 2 {
        return n as u64;
    }
    fib_naive(n - 1, calls) + fib_naive(n - 2, calls)
}

pub fn fib_memo(n: u32, memo: &mut Vec<Option<u64>>, calls: &mut u64) -> u64 {
    *calls += 1;
    if n < 2 {
        return n as u64;
    }
    if let Some(v) = memo[n as usize] {
        return v;
    }
    let v = fib_memo(n - 1, memo, calls) + fib_memo(n - 2, memo, calls);
    memo[n as usize] = Some(v);
    v
}

/// 0/1 knapsack table: rows are items considered, columns capacities
pub fn knapsack_table(weights: &[usize], values: &[u32], capacity: usize) -> Vec<Vec<u32>> {
    let mut table = vec![vec![0u32; capacity + 1]; weights.len() + 1];
    for i in 1..=weights.len() {
        for c in 0..=capacity {
            table[i][c] = table[i - 1][c];
            if weights[i - 1] <= c {
                table[i][c] = table[i][c].max(table[i - 1][c - weights[i - 1]] + values[i - 1]);
            }
        }
    }
    table
}

/// Toy string hash: sum of bytes modulo the bucket count
pub fn toy_hash(key: &str, buckets: usize) -> usize {
    key.bytes().map(usize::from).sum::<usize>() % buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_diagram_marks_top() {
        let mut stack = Stack::new();
        assert_eq!(stack.diagram(), vec!["  Empty stack"]);
        stack.push(10);
        stack.push(20);
        let diagram = stack.diagram();
        assert!(diagram[1].contains("20") && diagram[1].ends_with("← TOP"));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.peek(), Some(&10));
    }

    #[test]
    fn test_min_and_max_heap() {
        let mut min = Heap::new(HeapKind::Min);
        let mut max = Heap::new(HeapKind::Max);
        for v in [50, 30, 20, 15, 10, 8, 16] {
            min.push(v);
            max.push(v);
        }
        assert_eq!(min.peek(), Some(8));
        assert_eq!(max.peek(), Some(50));

        let mut drained = Vec::new();
        while let Some((v, _)) = min.pop() {
            drained.push(v);
        }
        assert_eq!(drained, vec![8, 10, 15, 16, 20, 30, 50]);
    }

    #[test]
    fn test_heap_push_trace() {
        let mut heap = Heap::new(HeapKind::Min);
        assert!(heap.push(5).is_empty());
        assert!(heap.push(7).is_empty());
        let trace = heap.push(1);
        assert_eq!(trace.len(), 1);
        assert_eq!(heap.levels(), vec![vec![1], vec![7, 5]]);
    }

    #[test]
    fn test_bst_traversals() {
        let mut bst = Bst::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            bst.insert(v);
        }
        assert_eq!(bst.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(bst.preorder(), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(bst.postorder(), vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(bst.level_order(), vec![vec![50], vec![30, 70], vec![20, 40, 60, 80]]);
        assert_eq!(bst.height(), 3);
        assert!(bst.contains(60));
        assert!(!bst.contains(65));
        assert_eq!(bst.insert(65), vec![50, 70, 60]);
    }

    #[test]
    fn test_trie_prefixes() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("car"), 3);
        assert_eq!(trie.insert("cat"), 1);
        trie.insert("dog");
        assert!(trie.contains("car"));
        assert!(!trie.contains("ca"));
        assert!(trie.starts_with("ca"));
        assert_eq!(trie.words_with_prefix("ca"), vec!["car", "cat"]);
        assert!(trie.words_with_prefix("x").is_empty());
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2));
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(0, 3));
    }

    #[test]
    fn test_graph_traversals() {
        let g = Graph::new(5, &[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)]);
        assert_eq!(g.bfs(0), vec![0, 1, 2, 3]);
        assert_eq!(g.dfs(0), vec![0, 1, 2, 3]);
        assert_eq!(g.dijkstra(0), vec![Some(0), Some(3), Some(1), Some(4), None]);
        assert_eq!(g.matrix()[0][2], 1);
    }

    #[test]
    fn test_sorts() {
        let mut data = vec![64, 34, 25, 12, 22];
        let passes = bubble_sort_passes(&mut data);
        assert_eq!(data, vec![12, 22, 25, 34, 64]);
        assert_eq!(passes[0], vec![34, 25, 12, 22, 64]);

        let mut merges = Vec::new();
        assert_eq!(merge_sort(&[38, 27, 43, 3, 9, 82, 10], &mut merges), vec![3, 9, 10, 27, 38, 43, 82]);
        assert_eq!(merges.len(), 6);

        let mut parts = Vec::new();
        let mut data = vec![10, 7, 8, 9, 1, 5];
        quick_sort(&mut data, &mut parts);
        assert_eq!(data, vec![1, 5, 7, 8, 9, 10]);
        assert!(parts[0].starts_with("pivot 5"));
    }

    #[test]
    fn test_binary_search_probes() {
        let sorted = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
        let (found, probes) = binary_search_probes(&sorted, 23);
        assert_eq!(found, Some(5));
        assert!(probes.len() <= 4);
        let (missing, _) = binary_search_probes(&sorted, 4);
        assert_eq!(missing, None);
        assert_eq!(binary_search_probes(&[], 1).0, None);
    }

    #[test]
    fn test_fibonacci_call_counts() {
        let mut naive = 0;
        assert_eq!(fib_naive(10, &mut naive), 55);
        let mut memo_calls = 0;
        let mut memo = vec![None; 11];
        assert_eq!(fib_memo(10, &mut memo, &mut memo_calls), 55);
        assert_eq!(naive, 177);
        assert!(memo_calls < 20);
    }

    #[test]
    fn test_knapsack() {
        let table = knapsack_table(&[1, 3, 4, 5], &[1, 4, 5, 7], 7);
        assert_eq!(table[4][7], 9);
    }

    #[test]
    fn test_toy_hash_is_in_range() {
        for key in ["apple", "banana", "cherry", ""] {
            assert!(toy_hash(key, 7) < 7);
        }
    }
}
