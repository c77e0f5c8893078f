//! Built-in curriculum table

use super::{Section, Topic};

type TopicRow = (&'static str, &'static str, &'static str);

/// (section code, title, [(topic code, display name, content key)])
const CATALOG: &[(&str, &str, &[TopicRow])] = &[
    ("1", "Fundamentals", &[
        ("1.1", "Time & Space Complexity", "complexity_basics"),
        ("1.2", "Memory Management", "memory_basics"),
        ("1.3", "Pointers & References", "pointers_basics"),
        ("1.4", "Recursion Basics", "recursion_basics"),
    ]),
    ("2", "Basic Data Structures", &[
        ("2.1", "Arrays", "array"),
        ("2.2", "Strings", "string"),
        ("2.3", "Linked Lists", "linked_list"),
        ("2.4", "Doubly Linked Lists", "doubly_linked_list"),
        ("2.5", "Circular Linked Lists", "circular_linked_list"),
    ]),
    ("3", "Stack & Queue", &[
        ("3.1", "Stack (Array-based)", "stack"),
        ("3.2", "Stack (Linked List-based)", "stack_linked"),
        ("3.3", "Queue (Array-based)", "queue"),
        ("3.4", "Queue (Linked List-based)", "queue_linked"),
        ("3.5", "Circular Queue", "circular_queue"),
        ("3.6", "Deque", "deque"),
        ("3.7", "Priority Queue", "priority_queue"),
    ]),
    ("4", "Hashing", &[
        ("4.1", "Hash Functions", "hash_functions"),
        ("4.2", "Hash Tables", "hash_table"),
        ("4.3", "Collision Handling", "collision_handling"),
        ("4.4", "Hash Maps & Sets", "hash_map_set"),
    ]),
    ("5", "Trees", &[
        ("5.1", "Binary Trees", "binary_tree"),
        ("5.2", "Binary Search Trees", "bst"),
        ("5.3", "Tree Traversals", "tree_traversals"),
        ("5.4", "AVL Trees", "avl_tree"),
        ("5.5", "Red-Black Trees", "red_black_tree"),
        ("5.6", "B-Trees", "b_tree"),
        ("5.7", "Segment Trees", "segment_tree"),
        ("5.8", "Fenwick Trees", "fenwick_tree"),
        ("5.9", "Trie", "trie"),
    ]),
    ("6", "Heaps", &[
        ("6.1", "Min Heap", "min_heap"),
        ("6.2", "Max Heap", "max_heap"),
        ("6.3", "Heap Operations", "heap_operations"),
        ("6.4", "Heap Sort", "heap_sort"),
    ]),
    ("7", "Graphs", &[
        ("7.1", "Graph Representations", "graph_representation"),
        ("7.2", "BFS (Breadth-First Search)", "bfs"),
        ("7.3", "DFS (Depth-First Search)", "dfs"),
        ("7.4", "Topological Sort", "topological_sort"),
        ("7.5", "Shortest Path (Dijkstra)", "dijkstra"),
        ("7.6", "Shortest Path (Bellman-Ford)", "bellman_ford"),
        ("7.7", "Minimum Spanning Tree (Kruskal)", "kruskal"),
        ("7.8", "Minimum Spanning Tree (Prim)", "prim"),
        ("7.9", "Floyd-Warshall", "floyd_warshall"),
    ]),
    ("8", "Sorting Algorithms", &[
        ("8.1", "Bubble Sort", "bubble_sort"),
        ("8.2", "Selection Sort", "selection_sort"),
        ("8.3", "Insertion Sort", "insertion_sort"),
        ("8.4", "Merge Sort", "merge_sort"),
        ("8.5", "Quick Sort", "quick_sort"),
        ("8.6", "Heap Sort", "heap_sort"),
        ("8.7", "Counting Sort", "counting_sort"),
        ("8.8", "Radix Sort", "radix_sort"),
        ("8.9", "Bucket Sort", "bucket_sort"),
    ]),
    ("9", "Searching Algorithms", &[
        ("9.1", "Linear Search", "linear_search"),
        ("9.2", "Binary Search", "binary_search"),
        ("9.3", "Ternary Search", "ternary_search"),
        ("9.4", "Jump Search", "jump_search"),
        ("9.5", "Interpolation Search", "interpolation_search"),
    ]),
    ("10", "Advanced Algorithms", &[
        ("10.1", "Dynamic Programming Intro", "dp_intro"),
        ("10.2", "Fibonacci (DP)", "dp_fibonacci"),
        ("10.3", "Knapsack Problem", "knapsack"),
        ("10.4", "Longest Common Subsequence", "lcs"),
        ("10.5", "Matrix Chain Multiplication", "matrix_chain"),
        ("10.6", "Greedy Algorithms", "greedy_intro"),
        ("10.7", "Backtracking", "backtracking"),
        ("10.8", "Divide and Conquer", "divide_conquer"),
    ]),
    ("11", "String Algorithms", &[
        ("11.1", "Pattern Matching (Naive)", "pattern_naive"),
        ("11.2", "KMP Algorithm", "kmp"),
        ("11.3", "Rabin-Karp", "rabin_karp"),
        ("11.4", "Z Algorithm", "z_algorithm"),
    ]),
    ("12", "Advanced Data Structures", &[
        ("12.1", "Disjoint Set (Union-Find)", "union_find"),
        ("12.2", "Suffix Array", "suffix_array"),
        ("12.3", "Suffix Tree", "suffix_tree"),
        ("12.4", "Skip List", "skip_list"),
    ]),
];

pub(super) fn standard_sections() -> Vec<Section> {
    CATALOG
        .iter()
        .map(|(code, title, topics)| {
            let topics = topics
                .iter()
                .map(|(code, name, key)| Topic::new(*code, *name, *key))
                .collect();
            Section::new(*code, *title, topics)
        })
        .collect()
}
