//! Graph traversal, sorting, searching and dynamic programming

use std::io;

use crossterm::style::Color;

use super::lesson::{Comparison, Lesson};
use super::toys::{self, Graph};
use crate::ui::{Application, Canvas, Problem};

pub(super) fn lessons() -> Vec<(&'static str, Lesson)> {
    vec![
        ("bfs", BFS),
        ("dfs", DFS),
        ("dijkstra", DIJKSTRA),
        ("bubble_sort", BUBBLE_SORT),
        ("merge_sort", MERGE_SORT),
        ("quick_sort", QUICK_SORT),
        ("linear_search", LINEAR_SEARCH),
        ("binary_search", BINARY_SEARCH),
        ("dp_intro", DP_INTRO),
        ("dp_fibonacci", DP_FIBONACCI),
        ("knapsack", KNAPSACK),
    ]
}

/// Shared example graph for the traversal lessons
///
/// ```text
///   0 ── 1 ── 3
///   │    │    │
///   2 ── 4    5
/// ```
fn sample_graph() -> Graph {
    Graph::new(6, &[(0, 1, 7), (0, 2, 9), (1, 3, 10), (1, 4, 2), (2, 4, 2), (3, 5, 6)])
}

fn draw_sample_graph(canvas: &mut Canvas<'_>) -> io::Result<()> {
    for line in ["  0 ── 1 ── 3", "  │    │    │", "  2 ── 4    5"] {
        canvas.line(line)?;
    }
    Ok(())
}

fn path(order: &[usize]) -> String {
    order.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" → ")
}

const BFS: Lesson = Lesson {
    name: "Breadth-First Search",
    title: "BREADTH-FIRST SEARCH - Level by Level",
    concept: &[
        "BFS visits every vertex at distance 1, then distance 2, and so on.",
        "A FIFO queue holds the frontier; a visited set prevents revisiting.",
        "In an unweighted graph BFS finds shortest paths in number of edges.",
    ],
    comparisons: &[Comparison {
        heading: "Queue-Driven Traversal",
        rust: r#"fn bfs(adj: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut seen = vec![false; adj.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    seen[start] = true;
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &next in &adj[v] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    order
}"#,
        cpp: r#"std::vector<int> bfs(const Graph& adj, int start) {
    std::vector<bool> seen(adj.size());
    std::queue<int> q;
    std::vector<int> order;
    q.push(start);
    seen[start] = true;
    while (!q.empty()) {
        int v = q.front(); q.pop();
        order.push_back(v);
        for (int next : adj[v])
            if (!seen[next]) { seen[next] = true; q.push(next); }
    }
    return order;
}"#,
        explanation: "Mark vertices when they are enqueued, not when they are dequeued, or a vertex can enter the queue twice.",
    }],
    demo: Some(bfs_walk),
    complexity: &[("Traversal", "O(V + E)")],
    space: Some(("O(V)", "Visited flags plus the queue")),
    applications: &[
        Application { title: "Shortest path in unweighted graphs", description: "Fewest hops in a network" },
        Application { title: "Social networks", description: "Friends within k degrees" },
    ],
    practice: &[
        Problem { title: "Binary Tree Level Order Traversal", difficulty: "Medium", description: "BFS on a tree" },
        Problem { title: "Rotting Oranges", difficulty: "Medium", description: "Multi-source BFS on a grid" },
        Problem { title: "Word Ladder", difficulty: "Hard", description: "BFS over implicit graph of words" },
    ],
    ..Lesson::EMPTY
};

fn bfs_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let graph = sample_graph();
    draw_sample_graph(canvas)?;
    canvas.blank()?;
    canvas.success(&format!("BFS from 0: {}", path(&graph.bfs(0))))
}

const DFS: Lesson = Lesson {
    name: "Depth-First Search",
    title: "DEPTH-FIRST SEARCH - Go Deep First",
    concept: &[
        "DFS follows one branch as far as it can before backtracking.",
        "It is naturally recursive; an explicit stack works too.",
        "Used for cycle detection, topological sort and connected components.",
    ],
    comparisons: &[Comparison {
        heading: "Recursive Traversal",
        rust: r#"fn dfs(adj: &[Vec<usize>], v: usize, seen: &mut [bool], order: &mut Vec<usize>) {
    seen[v] = true;
    order.push(v);
    for &next in &adj[v] {
        if !seen[next] {
            dfs(adj, next, seen, order);
        }
    }
}"#,
        cpp: r#"void dfs(const Graph& adj, int v,
         std::vector<bool>& seen, std::vector<int>& order) {
    seen[v] = true;
    order.push_back(v);
    for (int next : adj[v])
        if (!seen[next]) dfs(adj, next, seen, order);
}"#,
        explanation: "The same shape in both. Rust passes the visited set as &mut [bool], so it cannot be aliased during the recursion.",
    }],
    demo: Some(dfs_walk),
    complexity: &[("Traversal", "O(V + E)")],
    space: Some(("O(V)", "Visited flags plus recursion depth")),
    key_points: &[
        "DFS uses a stack (explicit or the call stack), BFS a queue",
        "Deep graphs can overflow the call stack; switch to an explicit stack",
    ],
    ..Lesson::EMPTY
};

fn dfs_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let graph = sample_graph();
    draw_sample_graph(canvas)?;
    canvas.blank()?;
    canvas.success(&format!("DFS from 0: {}", path(&graph.dfs(0))))
}

const DIJKSTRA: Lesson = Lesson {
    name: "Dijkstra's Algorithm",
    title: "DIJKSTRA'S ALGORITHM - Shortest Paths with Weights",
    concept: &[
        "Dijkstra finds the cheapest path from one source to every vertex.",
        "It repeatedly settles the closest unsettled vertex, using a min-priority queue.",
        "Edge weights must be non-negative.",
    ],
    comparisons: &[Comparison {
        heading: "Priority Queue Loop",
        rust: r#"let mut dist = vec![u32::MAX; n];
let mut heap = BinaryHeap::from([Reverse((0, src))]);
dist[src] = 0;
while let Some(Reverse((d, v))) = heap.pop() {
    if d > dist[v] { continue; }          // stale entry
    for &(next, w) in &adj[v] {
        if d + w < dist[next] {
            dist[next] = d + w;
            heap.push(Reverse((d + w, next)));
        }
    }
}"#,
        cpp: r#"std::vector<int> dist(n, INT_MAX);
using P = std::pair<int,int>;
std::priority_queue<P, std::vector<P>, std::greater<P>> pq;
dist[src] = 0; pq.push({0, src});
while (!pq.empty()) {
    auto [d, v] = pq.top(); pq.pop();
    if (d > dist[v]) continue;
    for (auto [next, w] : adj[v])
        if (d + w < dist[next]) {
            dist[next] = d + w;
            pq.push({dist[next], next});
        }
}"#,
        explanation: "Neither standard heap supports decrease-key, so both push duplicates and skip stale entries on pop.",
    }],
    demo: Some(dijkstra_walk),
    complexity: &[("With binary heap", "O((V + E) log V)")],
    space: Some(("O(V + E)", "Distances plus heap entries")),
    mistakes: &[
        "Using it with negative edge weights (use Bellman-Ford)",
        "Forgetting to skip stale heap entries",
    ],
    applications: &[
        Application { title: "Navigation", description: "Road networks weighted by travel time" },
        Application { title: "Network routing", description: "OSPF computes shortest paths per router" },
    ],
    ..Lesson::EMPTY
};

fn dijkstra_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let graph = sample_graph();
    canvas.line("Weighted edges: 0-1 (7), 0-2 (9), 1-3 (10), 1-4 (2), 2-4 (2), 3-5 (6)")?;
    canvas.blank()?;
    for (vertex, dist) in graph.dijkstra(0).iter().enumerate() {
        match dist {
            Some(d) => canvas.line(&format!("  dist(0 → {}) = {}", vertex, d))?,
            None => canvas.warning(&format!("  dist(0 → {}) = unreachable", vertex))?,
        }
    }
    Ok(())
}

const BUBBLE_SORT: Lesson = Lesson {
    name: "Bubble Sort",
    title: "BUBBLE SORT - Repeated Adjacent Swaps",
    concept: &[
        "Walk the array swapping neighbours that are out of order.",
        "After pass i the largest i elements are in their final place.",
        "Stop early when a pass makes no swaps.",
    ],
    comparisons: &[Comparison {
        heading: "Implementation",
        rust: r#"fn bubble_sort(a: &mut [i32]) {
    for i in 0..a.len() {
        let mut swapped = false;
        for j in 0..a.len() - i - 1 {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped { break; }
    }
}"#,
        cpp: r#"void bubbleSort(std::vector<int>& a) {
    for (size_t i = 0; i < a.size(); i++) {
        bool swapped = false;
        for (size_t j = 0; j + i + 1 < a.size(); j++)
            if (a[j] > a[j + 1]) {
                std::swap(a[j], a[j + 1]);
                swapped = true;
            }
        if (!swapped) break;
    }
}"#,
        explanation: "Taking &mut [i32] lets the Rust version sort any slice: a Vec, an array or part of one.",
    }],
    demo: Some(bubble_walk),
    complexity: &[("Best (already sorted)", "O(n)"), ("Average", "O(n²)"), ("Worst", "O(n²)")],
    space: Some(("O(1)", "Sorts in place")),
    key_points: &["Stable and in place", "Only practical for tiny or nearly sorted inputs"],
    ..Lesson::EMPTY
};

fn bubble_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut data = vec![64, 34, 25, 12, 22, 11, 90];
    canvas.line("Input:")?;
    canvas.array(&data, None)?;
    let passes = toys::bubble_sort_passes(&mut data);
    for (idx, state) in passes.iter().enumerate() {
        canvas.step(idx + 1, "after pass")?;
        canvas.array(state, Some(state.len() - 1 - idx))?;
    }
    canvas.blank()?;
    canvas.success(&format!("Sorted in {} passes", passes.len()))
}

const MERGE_SORT: Lesson = Lesson {
    name: "Merge Sort",
    title: "MERGE SORT - Divide and Conquer",
    concept: &[
        "Split the array in half, sort each half recursively, then merge.",
        "Merging two sorted runs takes linear time, giving O(n log n) overall.",
    ],
    comparisons: &[Comparison {
        heading: "Standard Library Stable Sort",
        rust: r#"let mut v = vec![38, 27, 43, 3];
v.sort();                       // stable, merge-based
v.sort_by_key(|x| std::cmp::Reverse(*x));"#,
        cpp: r#"std::vector<int> v{38, 27, 43, 3};
std::stable_sort(v.begin(), v.end());
std::stable_sort(v.begin(), v.end(), std::greater<int>());"#,
        explanation: "Rust's slice::sort is a stable merge-based sort, like std::stable_sort. std::sort in C++ is not stable.",
    }],
    demo: Some(merge_walk),
    complexity: &[("All cases", "O(n log n)")],
    space: Some(("O(n)", "Merging needs a scratch buffer")),
    key_points: &["Stable", "Guaranteed O(n log n)", "Works well on linked lists and external data"],
    ..Lesson::EMPTY
};

fn merge_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let input = [38, 27, 43, 3, 9, 82, 10];
    canvas.line("Input:")?;
    canvas.array(&input, None)?;
    canvas.blank()?;
    let mut merges = Vec::new();
    let sorted = toys::merge_sort(&input, &mut merges);
    canvas.line("Merges, bottom up:")?;
    for merge in &merges {
        canvas.line(&format!("  {}", merge))?;
    }
    canvas.array(&sorted, None)
}

const QUICK_SORT: Lesson = Lesson {
    name: "Quick Sort",
    title: "QUICK SORT - Partition and Recurse",
    concept: &[
        "Pick a pivot, move smaller elements left of it and larger ones right.",
        "The pivot is then in its final place; recurse on both sides.",
    ],
    comparisons: &[Comparison {
        heading: "Unstable Sort",
        rust: r#"let mut v = vec![10, 7, 8, 9, 1, 5];
v.sort_unstable();   // pattern-defeating quicksort"#,
        cpp: r#"std::vector<int> v{10, 7, 8, 9, 1, 5};
std::sort(v.begin(), v.end());   // introsort"#,
        explanation: "Both libraries use quicksort variants that fall back to heap sort to avoid the O(n²) worst case.",
    }],
    demo: Some(quick_walk),
    complexity: &[("Average", "O(n log n)"), ("Worst (bad pivots)", "O(n²)")],
    space: Some(("O(log n)", "Recursion depth on average")),
    mistakes: &["Always picking the first element on sorted input", "Off-by-one errors in partition bounds"],
    ..Lesson::EMPTY
};

fn quick_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut data = vec![10, 7, 8, 9, 1, 5];
    canvas.line("Input:")?;
    canvas.array(&data, None)?;
    canvas.blank()?;
    let mut partitions = Vec::new();
    toys::quick_sort(&mut data, &mut partitions);
    for (idx, part) in partitions.iter().enumerate() {
        canvas.line(&format!("  {}. {}", idx + 1, part))?;
    }
    canvas.array(&data, None)
}

const LINEAR_SEARCH: Lesson = Lesson {
    name: "Linear Search",
    title: "LINEAR SEARCH - Check Every Element",
    concept: &[
        "Compare each element with the target until it is found or the input ends.",
        "Works on unsorted data and on anything you can iterate.",
    ],
    comparisons: &[Comparison {
        heading: "Iterator Search",
        rust: r#"let pos = items.iter().position(|&x| x == target);"#,
        cpp: r#"auto it = std::find(items.begin(), items.end(), target);"#,
        explanation: "position returns Option<usize>; std::find returns end() on a miss, which must be compared explicitly.",
    }],
    demo: Some(linear_walk),
    complexity: &[("Best", "O(1)"), ("Worst", "O(n)")],
    space: Some(("O(1)", "No extra memory")),
    ..Lesson::EMPTY
};

fn linear_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let data = [4, 2, 7, 1, 9, 3];
    let target = 9;
    for idx in 0..data.len() {
        canvas.array(&data, Some(idx))?;
        if data[idx] == target {
            return canvas.success(&format!("Found {} at index {} after {} comparisons", target, idx, idx + 1));
        }
    }
    canvas.warning(&format!("{} not found", target))
}

const BINARY_SEARCH: Lesson = Lesson {
    name: "Binary Search",
    title: "BINARY SEARCH - Halve the Range Each Step",
    concept: &[
        "On sorted data, compare the target with the middle element.",
        "Discard the half that cannot contain it and repeat.",
        "A million elements need at most 20 comparisons.",
    ],
    comparisons: &[Comparison {
        heading: "Standard Library",
        rust: r#"match sorted.binary_search(&23) {
    Ok(i) => println!("found at {}", i),
    Err(i) => println!("insert at {}", i),
}"#,
        cpp: r#"auto it = std::lower_bound(v.begin(), v.end(), 23);
if (it != v.end() && *it == 23)
    std::cout << "found at " << (it - v.begin());"#,
        explanation: "Rust's binary_search returns the insertion point on a miss through Err, C++ splits the same job across lower_bound and a comparison.",
    }],
    demo: Some(binary_walk),
    complexity: &[("Search", "O(log n)")],
    space: Some(("O(1)", "Iterative version")),
    mistakes: &[
        "Computing mid as (low + high) / 2 and overflowing",
        "Running it on unsorted data",
        "Infinite loops from wrong bound updates",
    ],
    ..Lesson::EMPTY
};

fn binary_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let sorted = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
    let target = 23;
    canvas.line(&format!("Searching for {}", target))?;
    let (found, probes) = toys::binary_search_probes(&sorted, target);
    for (idx, probe) in probes.iter().enumerate() {
        canvas.step(
            idx + 1,
            &format!("low={} high={} mid={} → {}", probe.low, probe.high, probe.mid, sorted[probe.mid]),
        )?;
        canvas.array(&sorted, Some(probe.mid))?;
    }
    match found {
        Some(idx) => canvas.success(&format!("Found at index {} in {} steps", idx, probes.len())),
        None => canvas.warning("Not found"),
    }
}

const DP_INTRO: Lesson = Lesson {
    name: "Dynamic Programming",
    title: "DYNAMIC PROGRAMMING - Introduction",
    coming_soon: &["Coming soon: Memoization, tabulation, and DP patterns"],
    ..Lesson::EMPTY
};

const DP_FIBONACCI: Lesson = Lesson {
    name: "Fibonacci with DP",
    title: "FIBONACCI - From Exponential to Linear",
    concept: &[
        "Naive recursion recomputes the same Fibonacci numbers over and over.",
        "Memoization stores each answer the first time it is computed.",
        "Tabulation fills the answers bottom up with no recursion at all.",
    ],
    comparisons: &[Comparison {
        heading: "Bottom-Up Tabulation",
        rust: r#"fn fib(n: usize) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}"#,
        cpp: r#"uint64_t fib(size_t n) {
    uint64_t a = 0, b = 1;
    for (size_t i = 0; i < n; i++) {
        uint64_t next = a + b;
        a = b; b = next;
    }
    return a;
}"#,
        explanation: "Keeping only the last two values brings space down to O(1). Rust's tuple assignment avoids the temporary.",
    }],
    demo: Some(fibonacci_calls),
    complexity: &[("Naive recursion", "O(2ⁿ)"), ("Memoized", "O(n)"), ("Tabulated", "O(n)")],
    ..Lesson::EMPTY
};

fn fibonacci_calls(canvas: &mut Canvas<'_>) -> io::Result<()> {
    canvas.strong_line(&format!("  {:>4} {:>12} {:>14} {:>10}", "n", "fib(n)", "naive calls", "memo calls"), Color::Yellow)?;
    for n in [5u32, 10, 20, 25] {
        let mut naive = 0;
        let value = toys::fib_naive(n, &mut naive);
        let mut memo_calls = 0;
        let mut memo = vec![None; n as usize + 1];
        toys::fib_memo(n, &mut memo, &mut memo_calls);
        canvas.line(&format!("  {:>4} {:>12} {:>14} {:>10}", n, value, naive, memo_calls))?;
    }
    Ok(())
}

const KNAPSACK: Lesson = Lesson {
    name: "0/1 Knapsack",
    title: "0/1 KNAPSACK - Choose Items Under a Weight Limit",
    concept: &[
        "Each item has a weight and a value and can be taken at most once.",
        "best[i][c] is the best value using the first i items with capacity c:",
        "  best[i][c] = max(best[i-1][c], best[i-1][c - w_i] + v_i)",
    ],
    comparisons: &[Comparison {
        heading: "Table Fill",
        rust: r#"let mut best = vec![vec![0; cap + 1]; n + 1];
for i in 1..=n {
    for c in 0..=cap {
        best[i][c] = best[i - 1][c];
        if w[i - 1] <= c {
            best[i][c] = best[i][c].max(best[i - 1][c - w[i - 1]] + v[i - 1]);
        }
    }
}"#,
        cpp: r#"std::vector<std::vector<int>> best(n + 1, std::vector<int>(cap + 1));
for (int i = 1; i <= n; i++)
    for (int c = 0; c <= cap; c++) {
        best[i][c] = best[i - 1][c];
        if (w[i - 1] <= c)
            best[i][c] = std::max(best[i][c], best[i - 1][c - w[i - 1]] + v[i - 1]);
    }"#,
        explanation: "Same recurrence. Using usize for capacities in Rust makes the c - w underflow impossible once the guard has passed.",
    }],
    demo: Some(knapsack_walk),
    complexity: &[("Time", "O(n × capacity)")],
    space: Some(("O(n × capacity)", "Reducible to O(capacity) with one row")),
    ..Lesson::EMPTY
};

fn knapsack_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let weights = [1, 3, 4, 5];
    let values = [1, 4, 5, 7];
    let capacity = 7;
    canvas.line("Items (weight, value): (1, 1) (3, 4) (4, 5) (5, 7), capacity 7")?;
    canvas.blank()?;
    let table = toys::knapsack_table(&weights, &values, capacity);
    let header: Vec<String> = (0..=capacity).map(|c| format!("{:>3}", c)).collect();
    canvas.strong_line(&format!("  items\\cap {}", header.join("")), Color::Yellow)?;
    for (i, row) in table.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>3}", v)).collect();
        canvas.line(&format!("  {:>9} {}", i, cells.join("")))?;
    }
    canvas.blank()?;
    canvas.success(&format!("Best value: {}", table[weights.len()][capacity]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(demo: super::super::lesson::Demo) -> String {
        let mut buf = Vec::new();
        {
            let mut canvas = Canvas::new(&mut buf, false);
            demo(&mut canvas).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_traversal_orders() {
        assert!(render(bfs_walk).contains("BFS from 0: 0 → 1 → 2 → 3 → 4 → 5"));
        assert!(render(dfs_walk).contains("DFS from 0: 0 → 1 → 3 → 5 → 4 → 2"));
    }

    #[test]
    fn test_dijkstra_distances() {
        let out = render(dijkstra_walk);
        assert!(out.contains("dist(0 → 4) = 9"));
        assert!(out.contains("dist(0 → 5) = 23"));
    }

    #[test]
    fn test_binary_walk_finds_target() {
        let out = render(binary_walk);
        assert!(out.contains("Found at index 5"));
    }

    #[test]
    fn test_linear_walk_counts_comparisons() {
        let out = render(linear_walk);
        assert!(out.contains("Found 9 at index 4 after 5 comparisons"));
    }

    #[test]
    fn test_knapsack_best_value() {
        assert!(render(knapsack_walk).contains("Best value: 9"));
    }

    #[test]
    fn test_dp_intro_is_placeholder() {
        assert!(DP_INTRO.coming_soon[0].starts_with("Coming soon"));
    }
}
