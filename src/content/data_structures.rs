//! Linear structures, hashing, trees, heaps, graphs and disjoint sets

use std::cmp::Reverse;
use std::collections::{BinaryHeap, LinkedList, VecDeque};
use std::io;

use crossterm::style::Color;

use super::lesson::{Comparison, Lesson};
use super::toys::{Bst, Graph, Heap, HeapKind, Stack, Trie, UnionFind};
use super::trace::OperationLog;
use crate::ui::{Application, Canvas, Problem};

pub(super) fn lessons() -> Vec<(&'static str, Lesson)> {
    vec![
        ("array", ARRAY),
        ("string", STRING),
        ("linked_list", LINKED_LIST),
        ("doubly_linked_list", DOUBLY_LINKED_LIST),
        ("stack", STACK),
        ("queue", QUEUE),
        ("deque", DEQUE),
        ("priority_queue", PRIORITY_QUEUE),
        ("hash_table", HASH_TABLE),
        ("binary_tree", BINARY_TREE),
        ("bst", BST),
        ("trie", TRIE),
        ("min_heap", MIN_HEAP),
        ("max_heap", MAX_HEAP),
        ("graph_representation", GRAPH),
        ("union_find", UNION_FIND),
    ]
}

fn join<T: std::fmt::Display>(items: &[T], sep: &str) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(sep)
}

const ARRAY: Lesson = Lesson {
    name: "Arrays",
    title: "ARRAYS - Contiguous Memory Storage",
    concept: &[
        "An array stores elements of one type side by side in memory.",
        "Element i lives at base_address + i * size_of::<T>(), so indexing is O(1).",
        "Fixed arrays ([T; N]) know their size at compile time; Vec<T> grows on the heap.",
    ],
    comparisons: &[
        Comparison {
            heading: "Fixed-Size Arrays",
            rust: r#"let arr: [i32; 5] = [10, 20, 30, 40, 50];
println!("{}", arr[2]);   // 30
// arr[7];                // compile error: index out of bounds
let i = 7;
arr.get(i);               // None instead of a crash"#,
            cpp: r#"int arr[5] = {10, 20, 30, 40, 50};
std::cout << arr[2];      // 30
arr[7];                   // undefined behaviour, no error"#,
            explanation: "Rust checks every index. C++ raw arrays don't, and std::array::at() is opt-in.",
        },
        Comparison {
            heading: "Dynamic Arrays",
            rust: r#"let mut v = Vec::with_capacity(4);
v.push(1);
v.push(2);
v.insert(1, 9);      // shifts later elements right
v.remove(0);         // shifts later elements left"#,
            cpp: r#"std::vector<int> v;
v.reserve(4);
v.push_back(1);
v.push_back(2);
v.insert(v.begin() + 1, 9);
v.erase(v.begin());"#,
            explanation: "Vec and std::vector both double their capacity when full, making push amortized O(1). Insert and remove in the middle still shift elements.",
        },
    ],
    demo: Some(array_shifting),
    complexity: &[
        ("Access by index", "O(1)"),
        ("Search (unsorted)", "O(n)"),
        ("Push at end", "O(1) amortized"),
        ("Insert / remove in middle", "O(n)"),
    ],
    space: Some(("O(n)", "One slot per element plus unused capacity")),
    key_points: &[
        "Contiguous memory gives O(1) indexing and good cache behaviour",
        "Insert and delete in the middle shift elements",
        "Vec reallocates and moves its buffer when it outgrows capacity",
    ],
    use_when: &[
        "You need fast random access by index",
        "The data is mostly appended or read",
        "Iteration speed matters (cache locality)",
    ],
    avoid_when: &[
        "You insert or delete at the front often",
        "You need to keep references to elements across pushes",
    ],
    practice: &[
        Problem { title: "Two Sum", difficulty: "Easy", description: "Find two indices whose values add up to a target" },
        Problem { title: "Rotate Array", difficulty: "Medium", description: "Rotate right by k steps in place" },
        Problem { title: "Product of Array Except Self", difficulty: "Medium", description: "Prefix and suffix products without division" },
    ],
    ..Lesson::EMPTY
};

fn array_shifting(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut log = OperationLog::new();
    let mut values = vec![10, 20, 30, 40];
    log.allocate("Vec<i32>", values.capacity());

    canvas.step(1, "Start with four elements")?;
    canvas.array(&values, None)?;

    canvas.step(2, "insert(1, 15) shifts 20, 30, 40 one slot right")?;
    values.insert(1, 15);
    log.record("Insert", "15 at index 1 (3 elements shifted)");
    canvas.array(&values, Some(1))?;

    canvas.step(3, "values[3] is a single address computation")?;
    log.record("Access", format!("index 3 → {}", values[3]));
    canvas.array(&values, Some(3))?;

    canvas.step(4, "remove(0) shifts everything left")?;
    let removed = values.remove(0);
    log.record("Remove", format!("{} from index 0 (4 elements shifted)", removed));
    canvas.array(&values, None)?;

    log.render_summary(canvas)
}

const STRING: Lesson = Lesson {
    name: "Strings",
    title: "STRINGS - Text Processing",
    concept: &[
        "A Rust String is a growable, UTF-8 encoded byte buffer.",
        "&str is a borrowed view into UTF-8 text, like std::string_view.",
    ],
    coming_soon: &["Coming soon: String manipulation, pattern matching, and algorithms"],
    ..Lesson::EMPTY
};

const LINKED_LIST: Lesson = Lesson {
    name: "Linked Lists",
    title: "SINGLY LINKED LIST - Nodes Connected by Pointers",
    concept: &[
        "A linked list is a chain of nodes; each node holds a value and a pointer to the next.",
        "Nodes live anywhere on the heap, so inserting at the head never shifts anything.",
        "",
        "  head → [10|•] → [20|•] → [30|∅]",
    ],
    comparisons: &[Comparison {
        heading: "Node Definition and Push Front",
        rust: r#"struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

fn push_front(head: Option<Box<Node>>, value: i32) -> Option<Box<Node>> {
    Some(Box::new(Node { value, next: head }))
}"#,
        cpp: r#"struct Node {
    int value;
    Node* next;
};

Node* pushFront(Node* head, int value) {
    return new Node{value, head};
}"#,
        explanation: "Option<Box<Node>> replaces a nullable raw pointer. The list frees itself when the head drops; the C++ version needs a destructor that walks and deletes every node.",
    }],
    demo: Some(linked_list_walk),
    complexity: &[
        ("Insert / delete at head", "O(1)"),
        ("Insert / delete after a known node", "O(1)"),
        ("Access by position", "O(n)"),
        ("Search", "O(n)"),
    ],
    space: Some(("O(n)", "Each node also stores one pointer")),
    key_points: &[
        "No shifting on insert or delete once you hold the right node",
        "No random access: reaching element i takes i hops",
        "Each node is a separate allocation, which hurts cache locality",
    ],
    use_when: &[
        "You insert and remove at the front constantly",
        "You splice whole lists together",
    ],
    avoid_when: &[
        "You need indexing or binary search",
        "Iteration speed matters; Vec almost always wins in practice",
    ],
    mistakes: &[
        "Losing the rest of the list when relinking in the wrong order",
        "Forgetting to update the head when deleting the first node",
        "Recursive drop of a very long list overflowing the stack",
    ],
    practice: &[
        Problem { title: "Reverse Linked List", difficulty: "Easy", description: "Reverse in place, iteratively and recursively" },
        Problem { title: "Merge Two Sorted Lists", difficulty: "Easy", description: "Splice two sorted lists into one" },
        Problem { title: "Linked List Cycle", difficulty: "Easy", description: "Floyd's tortoise and hare" },
    ],
    ..Lesson::EMPTY
};

struct ListNode {
    value: i32,
    next: Option<Box<ListNode>>,
}

fn render_chain(head: &Option<Box<ListNode>>) -> String {
    let mut parts = vec!["head".to_string()];
    let mut cur = head;
    while let Some(node) = cur {
        parts.push(format!("[{}]", node.value));
        cur = &node.next;
    }
    parts.push("None".to_string());
    parts.join(" → ")
}

fn linked_list_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut log = OperationLog::new();
    let mut head: Option<Box<ListNode>> = None;

    for (step, value) in [30, 20, 10].into_iter().enumerate() {
        head = Some(Box::new(ListNode { value, next: head }));
        log.allocate("ListNode", std::mem::size_of::<ListNode>());
        log.record("Push front", format!("{}", value));
        canvas.step(step + 1, &format!("push_front({})", value))?;
        canvas.line(&format!("  {}", render_chain(&head)))?;
    }

    canvas.step(4, "pop_front()")?;
    if let Some(node) = head.take() {
        log.record("Pop front", format!("{}", node.value));
        head = node.next;
    }
    canvas.line(&format!("  {}", render_chain(&head)))?;

    log.render_summary(canvas)
}

const DOUBLY_LINKED_LIST: Lesson = Lesson {
    name: "Doubly Linked Lists",
    title: "DOUBLY LINKED LIST - Bidirectional Traversal",
    concept: &[
        "Each node points to both its successor and its predecessor.",
        "That makes removal of a known node O(1) and lets you walk the list backwards.",
        "",
        "  None ← [10] ⇄ [20] ⇄ [30] → None",
    ],
    comparisons: &[Comparison {
        heading: "Standard Library Lists",
        rust: r#"use std::collections::LinkedList;

let mut list = LinkedList::new();
list.push_back(20);
list.push_front(10);
list.push_back(30);
let back: Vec<_> = list.iter().rev().collect();"#,
        cpp: r#"#include <list>

std::list<int> list;
list.push_back(20);
list.push_front(10);
list.push_back(30);
for (auto it = list.rbegin(); it != list.rend(); ++it) {}"#,
        explanation: "Both are doubly linked. Writing one by hand in Rust needs Rc<RefCell<_>> with Weak back-pointers or unsafe code, since two owners per node break the single-owner rule.",
    }],
    demo: Some(doubly_linked_walk),
    complexity: &[
        ("Push / pop at either end", "O(1)"),
        ("Remove a known node", "O(1)"),
        ("Access by position", "O(n)"),
    ],
    space: Some(("O(n)", "Two pointers per node")),
    key_points: &[
        "Prev pointers enable backward traversal and O(1) unlinking",
        "Twice the pointer overhead of a singly linked list",
        "Foundation of LRU caches (hash map + doubly linked list)",
    ],
    applications: &[
        Application { title: "LRU cache", description: "Move recently used entries to the front in O(1)" },
        Application { title: "Browser history", description: "Back and forward navigation" },
    ],
    ..Lesson::EMPTY
};

fn doubly_linked_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut list = LinkedList::new();
    list.push_back(20);
    canvas.step(1, "push_back(20)")?;
    list.push_front(10);
    canvas.step(2, "push_front(10)")?;
    list.push_back(30);
    canvas.step(3, "push_back(30)")?;

    let forward: Vec<i32> = list.iter().copied().collect();
    let backward: Vec<i32> = list.iter().rev().copied().collect();
    canvas.blank()?;
    canvas.line(&format!("  Forward:  {}", join(&forward, " ⇄ ")))?;
    canvas.line(&format!("  Backward: {}", join(&backward, " ⇄ ")))
}

const STACK: Lesson = Lesson {
    name: "Stacks",
    title: "STACK - Last In First Out (LIFO)",
    concept: &[
        "A stack only exposes its top: push adds there, pop removes from there.",
        "The last element pushed is the first one popped.",
    ],
    comparisons: &[Comparison {
        heading: "Stack Operations",
        rust: r#"let mut stack: Vec<i32> = Vec::new();
stack.push(10);
stack.push(20);
let top = stack.last();     // Some(&20)
let popped = stack.pop();   // Some(20)
let empty = stack.pop().and(stack.pop()); // None, no panic"#,
        cpp: r#"std::stack<int> stack;
stack.push(10);
stack.push(20);
int top = stack.top();      // 20
stack.pop();                // returns void
// stack.top() on empty: undefined behaviour"#,
        explanation: "Vec is Rust's stack. pop returns Option, so popping an empty stack is a value you handle, not a crash.",
    }],
    demo: Some(stack_walk),
    complexity: &[("Push", "O(1) amortized"), ("Pop", "O(1)"), ("Peek", "O(1)")],
    space: Some(("O(n)", "n elements in a contiguous buffer")),
    key_points: &[
        "LIFO: last in, first out",
        "Every operation touches only the top",
        "The call stack is a stack of function frames",
    ],
    applications: &[
        Application { title: "Undo history", description: "Each edit is pushed; undo pops the latest" },
        Application { title: "Expression evaluation", description: "Balanced brackets and postfix evaluation" },
        Application { title: "Depth-first search", description: "An explicit stack replaces recursion" },
    ],
    practice: &[
        Problem { title: "Valid Parentheses", difficulty: "Easy", description: "Match brackets with a stack" },
        Problem { title: "Min Stack", difficulty: "Medium", description: "Support get_min in O(1)" },
        Problem { title: "Daily Temperatures", difficulty: "Medium", description: "Monotonic stack" },
    ],
    ..Lesson::EMPTY
};

fn stack_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut log = OperationLog::new();
    let mut stack = Stack::new();

    for (step, value) in [10, 20, 30].into_iter().enumerate() {
        stack.push(value);
        log.record("Push", format!("Pushed {}", value));
        canvas.step(step + 1, &format!("push({})", value))?;
        for line in stack.diagram() {
            canvas.line(&line)?;
        }
    }

    canvas.step(4, "pop()")?;
    if let Some(value) = stack.pop() {
        log.record("Pop", format!("Popped {}", value));
    }
    for line in stack.diagram() {
        canvas.line(&line)?;
    }
    if let Some(top) = stack.peek() {
        canvas.info(&format!("  peek() → {} ({} left)", top, stack.len()))?;
    }

    log.render_summary(canvas)
}

const QUEUE: Lesson = Lesson {
    name: "Queues",
    title: "QUEUE - First In First Out (FIFO)",
    concept: &[
        "A queue adds at the back and removes from the front.",
        "Elements leave in the order they arrived.",
    ],
    comparisons: &[Comparison {
        heading: "Queue Operations",
        rust: r#"use std::collections::VecDeque;

let mut queue = VecDeque::new();
queue.push_back("a");
queue.push_back("b");
let front = queue.pop_front();   // Some("a")"#,
        cpp: r#"#include <queue>

std::queue<std::string> queue;
queue.push("a");
queue.push("b");
auto front = queue.front();
queue.pop();"#,
        explanation: "VecDeque is a ring buffer, so both ends are O(1). Removing from the front of a Vec would shift every element.",
    }],
    demo: Some(queue_walk),
    complexity: &[("Enqueue", "O(1) amortized"), ("Dequeue", "O(1)"), ("Peek front", "O(1)")],
    key_points: &[
        "FIFO: first in, first out",
        "Use VecDeque, not Vec::remove(0)",
        "Breadth-first search is driven by a queue",
    ],
    applications: &[
        Application { title: "Task scheduling", description: "Jobs run in arrival order" },
        Application { title: "Buffers", description: "Producers append, consumers read from the front" },
    ],
    ..Lesson::EMPTY
};

fn queue_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut queue = VecDeque::new();
    let mut step = 0;
    for value in [5, 12, 7] {
        step += 1;
        queue.push_back(value);
        canvas.step(step, &format!("enqueue({})", value))?;
        let back = queue.len() - 1;
        canvas.array(&*queue.make_contiguous(), Some(back))?;
    }
    step += 1;
    if let Some(front) = queue.pop_front() {
        canvas.step(step, &format!("dequeue() → {}", front))?;
    }
    canvas.array(&*queue.make_contiguous(), None)
}

const DEQUE: Lesson = Lesson {
    name: "Deques",
    title: "DEQUE - Double-Ended Queue",
    concept: &[
        "A deque supports push and pop at both ends in O(1).",
        "It can act as a stack, a queue, or both at once.",
    ],
    comparisons: &[Comparison {
        heading: "Both Ends",
        rust: r#"let mut d = VecDeque::new();
d.push_back(2);
d.push_front(1);
d.push_back(3);
d.pop_front();   // Some(1)
d.pop_back();    // Some(3)"#,
        cpp: r#"std::deque<int> d;
d.push_back(2);
d.push_front(1);
d.push_back(3);
d.pop_front();
d.pop_back();"#,
        explanation: "VecDeque is one ring buffer; std::deque is usually a list of fixed blocks. Both give O(1) ends and O(1) indexing.",
    }],
    demo: Some(deque_walk),
    complexity: &[("Push / pop front", "O(1)"), ("Push / pop back", "O(1)"), ("Index", "O(1)")],
    applications: &[
        Application { title: "Sliding window maximum", description: "Monotonic deque of candidate indices" },
        Application { title: "Work stealing", description: "Owners pop one end, thieves steal from the other" },
    ],
    ..Lesson::EMPTY
};

fn deque_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut d = VecDeque::new();
    d.push_back(2);
    canvas.step(1, "push_back(2)")?;
    d.push_front(1);
    canvas.step(2, "push_front(1)")?;
    d.push_back(3);
    canvas.step(3, "push_back(3)")?;
    canvas.array(&*d.make_contiguous(), None)?;

    let front = d.pop_front();
    let back = d.pop_back();
    canvas.step(4, &format!("pop_front() → {:?}, pop_back() → {:?}", front, back))?;
    canvas.array(&*d.make_contiguous(), None)
}

const PRIORITY_QUEUE: Lesson = Lesson {
    name: "Priority Queues",
    title: "PRIORITY QUEUE - Highest Priority First",
    concept: &[
        "A priority queue always hands out the most important element next.",
        "It is usually backed by a binary heap: O(log n) push and pop, O(1) peek.",
    ],
    comparisons: &[Comparison {
        heading: "Min-Priority Queue",
        rust: r#"use std::cmp::Reverse;
use std::collections::BinaryHeap;

let mut pq = BinaryHeap::new();   // max-heap
pq.push(Reverse(3));
pq.push(Reverse(1));
pq.pop();   // Some(Reverse(1))"#,
        cpp: r#"#include <queue>

std::priority_queue<int, std::vector<int>,
                    std::greater<int>> pq;
pq.push(3);
pq.push(1);
pq.top();   // 1"#,
        explanation: "Both standard heaps are max-heaps by default. Rust flips the order with the Reverse wrapper, C++ with a comparator type.",
    }],
    demo: Some(priority_walk),
    complexity: &[("Push", "O(log n)"), ("Pop", "O(log n)"), ("Peek", "O(1)")],
    applications: &[
        Application { title: "Dijkstra's algorithm", description: "Always expand the closest unvisited vertex" },
        Application { title: "Event simulation", description: "Process events in timestamp order" },
        Application { title: "Operating system schedulers", description: "Run the highest priority task" },
    ],
    ..Lesson::EMPTY
};

fn priority_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let tasks = [(3, "write docs"), (1, "fix outage"), (2, "review PR"), (5, "refactor")];
    let mut pq = BinaryHeap::new();
    for (priority, name) in tasks {
        pq.push(Reverse((priority, name)));
        canvas.line(&format!("  push(priority {}, {:?})", priority, name))?;
    }
    canvas.blank()?;
    canvas.line("Popping in priority order:")?;
    let mut rank = 0;
    while let Some(Reverse((priority, name))) = pq.pop() {
        rank += 1;
        canvas.colored_line(&format!("  {}. [{}] {}", rank, priority, name), Color::Green)?;
    }
    Ok(())
}

const HASH_TABLE: Lesson = Lesson {
    name: "Hash Tables",
    title: "HASH TABLE - Key-Value Storage with O(1) Lookup",
    concept: &[
        "A hash function maps each key to a bucket index.",
        "Lookups jump straight to the bucket, giving O(1) average time.",
        "Two keys in the same bucket is a collision; chaining or probing resolves it.",
    ],
    comparisons: &[Comparison {
        heading: "Hash Map Basics",
        rust: r#"use std::collections::HashMap;

let mut ages = HashMap::new();
ages.insert("alice", 30);
*ages.entry("bob").or_insert(0) += 1;
match ages.get("carol") {
    Some(age) => println!("{}", age),
    None => println!("missing"),
}"#,
        cpp: r#"#include <unordered_map>

std::unordered_map<std::string, int> ages;
ages["alice"] = 30;
ages["bob"] += 1;       // inserts 0 first
auto it = ages.find("carol");
if (it == ages.end()) std::cout << "missing";"#,
        explanation: "C++ operator[] silently inserts missing keys. Rust separates reading (get → Option) from inserting (entry API). HashMap also uses a DoS-resistant hasher by default.",
    }],
    demo: Some(hash_buckets),
    complexity: &[
        ("Insert", "O(1) average, O(n) worst"),
        ("Lookup", "O(1) average, O(n) worst"),
        ("Delete", "O(1) average, O(n) worst"),
    ],
    space: Some(("O(n)", "Plus empty buckets kept to hold the load factor down")),
    key_points: &[
        "Good hash functions spread keys evenly across buckets",
        "Tables resize when the load factor gets too high",
        "Iteration order is unspecified; use BTreeMap for sorted keys",
    ],
    mistakes: &[
        "Relying on HashMap iteration order",
        "Mutating a key in a way that changes its hash while it is stored",
    ],
    practice: &[
        Problem { title: "Two Sum", difficulty: "Easy", description: "Store complements in a map" },
        Problem { title: "Group Anagrams", difficulty: "Medium", description: "Key by sorted letters" },
        Problem { title: "LRU Cache", difficulty: "Medium", description: "Hash map plus doubly linked list" },
    ],
    ..Lesson::EMPTY
};

fn hash_buckets(canvas: &mut Canvas<'_>) -> io::Result<()> {
    const BUCKETS: usize = 7;
    let keys = ["apple", "banana", "cherry", "date", "elder", "fig", "grape"];
    let mut table: Vec<Vec<&str>> = vec![Vec::new(); BUCKETS];

    canvas.line(&format!("Toy hash: sum of bytes mod {}", BUCKETS))?;
    canvas.blank()?;
    for key in keys {
        let bucket = super::toys::toy_hash(key, BUCKETS);
        table[bucket].push(key);
        canvas.line(&format!("  hash({:?}) = {}", key, bucket))?;
    }

    canvas.blank()?;
    canvas.line("Buckets (chaining):")?;
    for (idx, chain) in table.iter().enumerate() {
        let rendered = if chain.is_empty() { "∅".to_string() } else { chain.join(" → ") };
        let line = format!("  [{}] {}", idx, rendered);
        if chain.len() > 1 {
            canvas.colored_line(&format!("{}   (collision)", line), Color::Yellow)?;
        } else {
            canvas.line(&line)?;
        }
    }
    Ok(())
}

const BINARY_TREE: Lesson = Lesson {
    name: "Binary Trees",
    title: "BINARY TREE - Hierarchical Structure",
    concept: &[
        "Each node has at most two children, called left and right.",
        "Traversal order decides when a node is visited relative to its children:",
        "  preorder (node, left, right), inorder (left, node, right),",
        "  postorder (left, right, node), level order (breadth first).",
    ],
    comparisons: &[Comparison {
        heading: "Tree Node",
        rust: r#"struct TreeNode {
    value: i32,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

fn inorder(node: &Option<Box<TreeNode>>, out: &mut Vec<i32>) {
    if let Some(n) = node {
        inorder(&n.left, out);
        out.push(n.value);
        inorder(&n.right, out);
    }
}"#,
        cpp: r#"struct TreeNode {
    int value;
    TreeNode* left = nullptr;
    TreeNode* right = nullptr;
};

void inorder(TreeNode* n, std::vector<int>& out) {
    if (!n) return;
    inorder(n->left, out);
    out.push_back(n->value);
    inorder(n->right, out);
}"#,
        explanation: "Option<Box<_>> makes the empty subtree explicit. Ownership of children is clear, so the whole tree drops with its root.",
    }],
    demo: Some(tree_traversals),
    complexity: &[("Traversal", "O(n)"), ("Height (balanced)", "O(log n)"), ("Height (degenerate)", "O(n)")],
    space: Some(("O(h)", "Recursion depth equals the tree height h")),
    key_points: &[
        "Depth-first traversals are naturally recursive",
        "Level order uses a queue",
        "Inorder traversal of a BST yields sorted output",
    ],
    ..Lesson::EMPTY
};

fn tree_traversals(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut tree = Bst::new();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(v);
    }
    canvas.line("Tree built from 50, 30, 70, 20, 40, 60, 80:")?;
    canvas.blank()?;
    for (depth, level) in tree.level_order().iter().enumerate() {
        canvas.line(&format!("  level {}: {}", depth, join(level, "  ")))?;
    }
    canvas.blank()?;
    canvas.line(&format!("  Preorder:  {}", join(&tree.preorder(), ", ")))?;
    canvas.line(&format!("  Inorder:   {}", join(&tree.inorder(), ", ")))?;
    canvas.line(&format!("  Postorder: {}", join(&tree.postorder(), ", ")))?;
    canvas.line(&format!("  Height:    {}", tree.height()))
}

const BST: Lesson = Lesson {
    name: "Binary Search Trees",
    title: "BINARY SEARCH TREE - Ordered Binary Tree",
    concept: &[
        "For every node, all values in the left subtree are smaller",
        "and all values in the right subtree are larger.",
        "Search, insert and delete follow a single root-to-leaf path.",
    ],
    comparisons: &[Comparison {
        heading: "Ordered Maps",
        rust: r#"use std::collections::BTreeMap;

let mut scores = BTreeMap::new();
scores.insert(42, "alice");
scores.insert(7, "bob");
for (score, name) in &scores {}   // sorted by key
let low = scores.range(..40);"#,
        cpp: r#"#include <map>

std::map<int, std::string> scores;
scores[42] = "alice";
scores[7] = "bob";
for (auto& [score, name] : scores) {}
auto it = scores.lower_bound(40);"#,
        explanation: "std::map is a red-black tree; Rust's BTreeMap is a B-tree, which packs several keys per node for better cache use. Both keep keys sorted with O(log n) operations.",
    }],
    demo: Some(bst_paths),
    complexity: &[
        ("Search / insert / delete (balanced)", "O(log n)"),
        ("Search / insert / delete (worst)", "O(n)"),
        ("Inorder traversal", "O(n)"),
    ],
    key_points: &[
        "Sorted input builds a degenerate tree that is really a linked list",
        "Self-balancing variants (AVL, red-black) keep the height O(log n)",
        "Inorder traversal gives the keys in sorted order",
    ],
    mistakes: &[
        "Only comparing a node with its direct children when validating",
        "Forgetting the two-children case when deleting",
    ],
    practice: &[
        Problem { title: "Validate BST", difficulty: "Medium", description: "Carry min/max bounds down the recursion" },
        Problem { title: "Kth Smallest Element", difficulty: "Medium", description: "Inorder traversal with a counter" },
    ],
    ..Lesson::EMPTY
};

fn bst_paths(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut tree = Bst::new();
    for (idx, value) in [50, 30, 70, 20, 40, 60].into_iter().enumerate() {
        let path = tree.insert(value);
        let route = if path.is_empty() {
            "becomes the root".to_string()
        } else {
            format!("compared with {}", join(&path, " → "))
        };
        canvas.step(idx + 1, &format!("insert({}): {}", value, route))?;
    }
    canvas.blank()?;
    for probe in [40, 65] {
        let found = tree.contains(probe);
        let text = format!("  search({}) → {}", probe, if found { "found" } else { "not found" });
        if found {
            canvas.success(&text)?;
        } else {
            canvas.warning(&text)?;
        }
    }
    canvas.line(&format!("  Sorted via inorder: {}", join(&tree.inorder(), ", ")))
}

const TRIE: Lesson = Lesson {
    name: "Tries",
    title: "TRIE - Prefix Tree for Strings",
    concept: &[
        "A trie stores strings one character per edge.",
        "Words sharing a prefix share the path for that prefix.",
        "Lookup cost depends on the word length, not on how many words are stored.",
    ],
    comparisons: &[Comparison {
        heading: "Trie Node",
        rust: r#"#[derive(Default)]
struct Trie {
    children: BTreeMap<char, Trie>,
    terminal: bool,
}

fn insert(&mut self, word: &str) {
    let mut node = self;
    for ch in word.chars() {
        node = node.children.entry(ch).or_default();
    }
    node.terminal = true;
}"#,
        cpp: r#"struct Trie {
    std::map<char, std::unique_ptr<Trie>> children;
    bool terminal = false;
};

void insert(Trie* node, const std::string& word) {
    for (char ch : word) {
        auto& child = node->children[ch];
        if (!child) child = std::make_unique<Trie>();
        node = child.get();
    }
    node->terminal = true;
}"#,
        explanation: "The entry API creates missing children in one step. Children are owned values, so no manual deletion is needed.",
    }],
    demo: Some(trie_walk),
    complexity: &[("Insert", "O(m)"), ("Search", "O(m)"), ("Prefix query", "O(m + results)")],
    space: Some(("O(total characters)", "Shared prefixes are stored once")),
    applications: &[
        Application { title: "Autocomplete", description: "List every word under a typed prefix" },
        Application { title: "Spell checking", description: "Fast membership tests for dictionary words" },
        Application { title: "IP routing", description: "Longest prefix match over address bits" },
    ],
    ..Lesson::EMPTY
};

fn trie_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut trie = Trie::new();
    for (idx, word) in ["car", "cart", "cat", "dog"].into_iter().enumerate() {
        let created = trie.insert(word);
        canvas.step(idx + 1, &format!("insert({:?}) created {} node(s)", word, created))?;
    }
    canvas.blank()?;
    canvas.line(&format!("  Total nodes (including root): {}", trie.node_count()))?;
    canvas.line(&format!("  contains(\"car\") → {}", trie.contains("car")))?;
    canvas.line(&format!("  contains(\"ca\")  → {}", trie.contains("ca")))?;
    canvas.line(&format!("  starts_with(\"ca\") → {}", trie.starts_with("ca")))?;
    canvas.info(&format!("  autocomplete(\"ca\") → {}", trie.words_with_prefix("ca").join(", ")))
}

const MIN_HEAP: Lesson = Lesson {
    name: "Min Heaps",
    title: "MIN HEAP - Smallest Element on Top",
    concept: &[
        "A min heap is a complete binary tree where every parent ≤ its children.",
        "It is stored in an array: children of i are at 2i+1 and 2i+2, parent at (i-1)/2.",
        "Insert sifts up from the end; removing the root sifts the last element down.",
    ],
    comparisons: &[Comparison {
        heading: "Sift Up",
        rust: r#"fn sift_up(heap: &mut [i32], mut i: usize) {
    while i > 0 {
        let parent = (i - 1) / 2;
        if heap[i] >= heap[parent] { break; }
        heap.swap(i, parent);
        i = parent;
    }
}"#,
        cpp: r#"void siftUp(std::vector<int>& heap, size_t i) {
    while (i > 0) {
        size_t parent = (i - 1) / 2;
        if (heap[i] >= heap[parent]) break;
        std::swap(heap[i], heap[parent]);
        i = parent;
    }
}"#,
        explanation: "Identical logic. Rust's slice::swap does the bounds checks that std::swap on raw indices skips.",
    }],
    demo: Some(min_heap_walk),
    complexity: &[("Insert", "O(log n)"), ("Extract min", "O(log n)"), ("Peek min", "O(1)"), ("Build from array", "O(n)")],
    key_points: &[
        "Only the root is guaranteed to be the minimum",
        "Array layout means no pointers and good cache use",
        "Heap sort and priority queues are built on heaps",
    ],
    practice: &[
        Problem { title: "Kth Largest Element", difficulty: "Medium", description: "Keep a min heap of size k" },
        Problem { title: "Merge K Sorted Lists", difficulty: "Hard", description: "Heap of list heads" },
    ],
    ..Lesson::EMPTY
};

const MAX_HEAP: Lesson = Lesson {
    name: "Max Heaps",
    title: "MAX HEAP - Largest Element on Top",
    concept: &[
        "A max heap mirrors a min heap: every parent ≥ its children.",
        "Rust's BinaryHeap and C++'s std::priority_queue are both max heaps.",
    ],
    comparisons: &[Comparison {
        heading: "Standard Max Heaps",
        rust: r#"let mut heap = BinaryHeap::from(vec![3, 9, 4]);
heap.push(7);
heap.peek();   // Some(&9)
heap.pop();    // Some(9)
let sorted = heap.into_sorted_vec();"#,
        cpp: r#"std::priority_queue<int> heap;
for (int x : {3, 9, 4, 7}) heap.push(x);
heap.top();   // 9
heap.pop();"#,
        explanation: "Same structure and costs. BinaryHeap::from heapifies a Vec in O(n), and into_sorted_vec finishes a heap sort.",
    }],
    demo: Some(max_heap_walk),
    complexity: &[("Insert", "O(log n)"), ("Extract max", "O(log n)"), ("Peek max", "O(1)")],
    applications: &[
        Application { title: "Heap sort", description: "Repeatedly extract the max into the tail of the array" },
        Application { title: "Top-k queries", description: "Keep the best candidates seen so far" },
    ],
    ..Lesson::EMPTY
};

fn heap_walk(canvas: &mut Canvas<'_>, kind: HeapKind, values: &[i32]) -> io::Result<()> {
    let mut heap = Heap::new(kind);
    for (idx, &value) in values.iter().enumerate() {
        canvas.step(idx + 1, &format!("insert({})", value))?;
        for swap in heap.push(value) {
            canvas.dim(&format!("    {}", swap))?;
        }
        canvas.array(heap.as_slice(), Some(0))?;
    }
    if let Some(root) = heap.peek() {
        canvas.info(&format!("  peek() → {}", root))?;
    }

    canvas.blank()?;
    canvas.line("As a tree:")?;
    for (depth, level) in heap.levels().iter().enumerate() {
        canvas.line(&format!("  level {}: {}", depth, join(level, "  ")))?;
    }

    if let Some((root, swaps)) = heap.pop() {
        canvas.step(values.len() + 1, &format!("extract root → {}", root))?;
        for swap in swaps {
            canvas.dim(&format!("    {}", swap))?;
        }
        canvas.array(heap.as_slice(), Some(0))?;
    }
    Ok(())
}

fn min_heap_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    heap_walk(canvas, HeapKind::Min, &[50, 30, 20, 15, 10])
}

fn max_heap_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    heap_walk(canvas, HeapKind::Max, &[10, 15, 20, 30, 50])
}

const GRAPH: Lesson = Lesson {
    name: "Graph Representation",
    title: "GRAPH REPRESENTATION - Adjacency List vs Matrix",
    concept: &[
        "A graph is a set of vertices connected by edges, optionally weighted or directed.",
        "An adjacency list stores each vertex's neighbours: O(V + E) space.",
        "An adjacency matrix stores a V × V grid: O(V²) space, O(1) edge lookup.",
    ],
    comparisons: &[Comparison {
        heading: "Adjacency List",
        rust: r#"let mut adj: Vec<Vec<(usize, u32)>> = vec![Vec::new(); n];
for &(a, b, w) in &edges {
    adj[a].push((b, w));
    adj[b].push((a, w));   // undirected
}"#,
        cpp: r#"std::vector<std::vector<std::pair<int,int>>> adj(n);
for (auto [a, b, w] : edges) {
    adj[a].push_back({b, w});
    adj[b].push_back({a, w});
}"#,
        explanation: "Vertices as indices into a Vec avoid the ownership puzzles of pointer-based graphs in Rust.",
    }],
    demo: Some(graph_views),
    complexity: &[
        ("Edge lookup (list)", "O(degree)"),
        ("Edge lookup (matrix)", "O(1)"),
        ("Iterate neighbours (list)", "O(degree)"),
        ("Iterate neighbours (matrix)", "O(V)"),
    ],
    use_when: &["Adjacency list: sparse graphs (most real graphs)", "Adjacency matrix: dense graphs or frequent edge queries"],
    ..Lesson::EMPTY
};

fn graph_views(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let graph = Graph::new(4, &[(0, 1, 4), (0, 2, 1), (1, 2, 2), (2, 3, 5)]);
    canvas.line("Edges: 0-1 (4), 0-2 (1), 1-2 (2), 2-3 (5)")?;
    canvas.blank()?;
    canvas.strong_line("Adjacency list:", Color::Yellow)?;
    for v in 0..graph.vertex_count() {
        let neighbours: Vec<String> = graph.neighbors(v).iter().map(|(n, w)| format!("{}(w={})", n, w)).collect();
        canvas.line(&format!("  {} → {}", v, neighbours.join(", ")))?;
    }
    canvas.blank()?;
    canvas.strong_line("Adjacency matrix:", Color::Yellow)?;
    canvas.line(&format!("     {}", join(&(0..graph.vertex_count()).collect::<Vec<_>>(), "  ")))?;
    for (v, row) in graph.matrix().iter().enumerate() {
        canvas.line(&format!("  {}  {}", v, join(row, "  ")))?;
    }
    Ok(())
}

const UNION_FIND: Lesson = Lesson {
    name: "Union-Find",
    title: "UNION-FIND - Disjoint Set Union",
    concept: &[
        "Union-find tracks which elements belong to the same group.",
        "find(x) returns the representative of x's group; union(a, b) merges two groups.",
        "Path compression and union by rank make both nearly O(1) (inverse Ackermann).",
    ],
    comparisons: &[Comparison {
        heading: "Find with Path Compression",
        rust: r#"fn find(parent: &mut [usize], x: usize) -> usize {
    if parent[x] != x {
        parent[x] = find(parent, parent[x]);
    }
    parent[x]
}"#,
        cpp: r#"int find(std::vector<int>& parent, int x) {
    if (parent[x] != x)
        parent[x] = find(parent, parent[x]);
    return parent[x];
}"#,
        explanation: "Same algorithm. The Rust version takes &mut [usize], so the borrow checker guarantees nothing else reads the array mid-update.",
    }],
    demo: Some(union_find_walk),
    complexity: &[("Find", "O(α(n)) amortized"), ("Union", "O(α(n)) amortized")],
    applications: &[
        Application { title: "Kruskal's MST", description: "Skip edges whose endpoints are already connected" },
        Application { title: "Connected components", description: "Group pixels, accounts or network nodes" },
    ],
    practice: &[
        Problem { title: "Number of Provinces", difficulty: "Medium", description: "Count connected components" },
        Problem { title: "Redundant Connection", difficulty: "Medium", description: "Find the edge that creates a cycle" },
    ],
    ..Lesson::EMPTY
};

fn union_find_walk(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let mut uf = UnionFind::new(6);
    canvas.line(&format!("  parents: {:?}", uf.parents()))?;
    for (idx, (a, b)) in [(0, 1), (2, 3), (1, 3), (0, 2), (4, 5)].into_iter().enumerate() {
        let merged = uf.union(a, b);
        let outcome = if merged { "merged" } else { "already connected" };
        canvas.step(idx + 1, &format!("union({}, {}) → {}", a, b, outcome))?;
        canvas.line(&format!("  parents: {:?}", uf.parents()))?;
    }
    canvas.blank()?;
    canvas.line(&format!("  connected(0, 3) → {}", uf.connected(0, 3)))?;
    canvas.line(&format!("  connected(0, 4) → {}", uf.connected(0, 4)))
}
