//! Fundamentals: complexity, memory, pointers, recursion

use std::io;
use std::rc::Rc;

use crossterm::style::Color;

use super::lesson::{Comparison, Lesson};
use crate::ui::{Canvas, Problem};

pub(super) fn lessons() -> Vec<(&'static str, Lesson)> {
    vec![
        ("complexity_basics", COMPLEXITY),
        ("memory_basics", MEMORY),
        ("pointers_basics", POINTERS),
        ("recursion_basics", RECURSION),
    ]
}

const COMPLEXITY: Lesson = Lesson {
    name: "Complexity Analysis",
    title: "TIME & SPACE COMPLEXITY - Foundation of Algorithm Analysis",
    concept: &[
        "Big O notation describes how the cost of an algorithm grows with input size n.",
        "It keeps the dominant term and drops constants: 3n² + 5n + 7 is O(n²).",
        "Time complexity counts basic steps, space complexity counts extra memory.",
    ],
    comparisons: &[
        Comparison {
            heading: "O(1) - Constant Time",
            rust: r#"fn first(items: &[i32]) -> Option<i32> {
    items.first().copied()   // one bounds check, one load
}"#,
            cpp: r#"int first(const std::vector<int>& v) {
    return v[0];   // no bounds check at all
}"#,
            explanation: "Both index directly into contiguous memory. Rust returns Option so an empty slice is handled instead of reading garbage.",
        },
        Comparison {
            heading: "O(n) - Linear Time",
            rust: r#"fn sum(items: &[i32]) -> i64 {
    items.iter().map(|&x| x as i64).sum()
}"#,
            cpp: r#"long sum(const std::vector<int>& v) {
    long total = 0;
    for (int x : v) total += x;
    return total;
}"#,
            explanation: "One pass over the input. Iterator adapters in Rust compile down to the same loop the C++ version spells out.",
        },
        Comparison {
            heading: "O(n²) - Quadratic Time",
            rust: r#"fn has_duplicate(items: &[i32]) -> bool {
    for i in 0..items.len() {
        for j in i + 1..items.len() {
            if items[i] == items[j] { return true; }
        }
    }
    false
}"#,
            cpp: r#"bool hasDuplicate(const std::vector<int>& v) {
    for (size_t i = 0; i < v.size(); i++)
        for (size_t j = i + 1; j < v.size(); j++)
            if (v[i] == v[j]) return true;
    return false;
}"#,
            explanation: "Nested loops over the same input. A HashSet (Rust) or unordered_set (C++) brings this down to O(n) at the cost of O(n) space.",
        },
        Comparison {
            heading: "O(log n) - Logarithmic Time",
            rust: r#"fn find(sorted: &[i32], target: i32) -> Option<usize> {
    sorted.binary_search(&target).ok()
}"#,
            cpp: r#"bool find(const std::vector<int>& v, int target) {
    return std::binary_search(v.begin(), v.end(), target);
}"#,
            explanation: "Each step halves the search range. Both standard libraries ship binary search; Rust's also reports the insertion point on a miss.",
        },
    ],
    demo: Some(growth_table),
    notes: &[
        "Big O describes the upper bound of growth, not exact running time",
        "Drop constants and lower-order terms: O(2n + 10) is O(n)",
        "Best, average and worst case can differ (quick sort: n log n vs n²)",
        "Amortized analysis spreads rare expensive steps over many cheap ones",
        "Space complexity counts auxiliary memory, including the call stack",
    ],
    key_points: &[
        "O(1) < O(log n) < O(n) < O(n log n) < O(n²) < O(2ⁿ)",
        "Nested loops over the input usually mean O(n²)",
        "Halving the problem each step usually means O(log n)",
        "Trade space for time with hashing and memoization",
    ],
    practice: &[
        Problem { title: "Two Sum", difficulty: "Easy", description: "Go from O(n²) brute force to O(n) with a hash map" },
        Problem { title: "Contains Duplicate", difficulty: "Easy", description: "Compare sorting (O(n log n)) with hashing (O(n))" },
        Problem { title: "Maximum Subarray", difficulty: "Medium", description: "Kadane's algorithm in O(n) time, O(1) space" },
    ],
    ..Lesson::EMPTY
};

fn growth_table(canvas: &mut Canvas<'_>) -> io::Result<()> {
    canvas.line("Steps needed as n grows:")?;
    canvas.blank()?;
    canvas.strong_line(
        &format!("  {:>6} {:>8} {:>10} {:>10} {:>12} {:>14}", "n", "O(1)", "O(log n)", "O(n)", "O(n log n)", "O(n²)"),
        Color::Yellow,
    )?;
    for n in [1u64, 10, 100, 1_000, 10_000] {
        let log = if n > 1 { (n as f64).log2().ceil() as u64 } else { 0 };
        canvas.line(&format!(
            "  {:>6} {:>8} {:>10} {:>10} {:>12} {:>14}",
            n,
            1,
            log,
            n,
            n * log,
            n * n
        ))?;
    }
    Ok(())
}

const MEMORY: Lesson = Lesson {
    name: "Memory Management",
    title: "MEMORY MANAGEMENT - How Data Lives in Computer Memory",
    concept: &[
        "A running program splits memory into code, static data, the stack and the heap.",
        "The stack holds function frames: fast, fixed size, freed automatically on return.",
        "The heap holds data whose size or lifetime isn't known at compile time.",
        "",
        "  ┌──────────────┐  high addresses",
        "  │    Stack     │  ↓ grows down",
        "  ├──────────────┤",
        "  │      ↕       │",
        "  ├──────────────┤",
        "  │     Heap     │  ↑ grows up",
        "  ├──────────────┤",
        "  │ Static/Data  │",
        "  ├──────────────┤",
        "  │     Code     │  low addresses",
        "  └──────────────┘",
    ],
    comparisons: &[
        Comparison {
            heading: "Stack vs Heap Allocation",
            rust: r#"fn main() {
    let x = 42;                 // stack
    let boxed = Box::new(42);   // heap, freed when `boxed` drops
    let v = vec![1, 2, 3];      // header on stack, buffer on heap
}   // drop order: v, boxed, x"#,
            cpp: r#"int main() {
    int x = 42;                 // stack
    int* p = new int(42);       // heap
    std::vector<int> v{1, 2, 3};
    delete p;                   // forget this and it leaks
}"#,
            explanation: "Rust ties every heap allocation to an owner and frees it when the owner goes out of scope. C++ gives the same guarantee only when you use RAII types; raw new/delete is manual.",
        },
        Comparison {
            heading: "Memory Leaks",
            rust: r#"fn leak() {
    let v = vec![0u8; 1024];
    std::mem::forget(v);   // explicit, and rarely wanted
}"#,
            cpp: r#"void leak() {
    int* data = new int[1024];
    // early return or exception here
    // and data is never deleted
}"#,
            explanation: "Leaking in Rust requires asking for it (mem::forget, Box::leak, Rc cycles). In C++ a missing delete on any path is enough.",
        },
    ],
    demo: Some(type_sizes),
    notes: &[
        "Stack allocation is a pointer bump; heap allocation goes through the allocator",
        "Stack size is limited (often 8 MB on Linux), deep recursion can overflow it",
        "Contiguous data (Vec, std::vector) is cache friendly, pointer chasing is not",
        "Ownership in Rust decides who frees memory at compile time",
        "Garbage collectors trade pauses and overhead for convenience",
    ],
    key_points: &[
        "Stack: automatic, fast, limited",
        "Heap: flexible, slower, must be freed by someone",
        "Rust frees heap memory when the owner drops",
        "Cache locality often matters more than Big O for small n",
    ],
    mistakes: &[
        "Returning a pointer or reference to a local variable",
        "Freeing memory twice (double free)",
        "Using memory after it was freed (use-after-free)",
        "Building reference cycles with Rc and never breaking them",
    ],
    ..Lesson::EMPTY
};

fn type_sizes(canvas: &mut Canvas<'_>) -> io::Result<()> {
    use std::mem::size_of;

    canvas.line("Sizes of common types on this machine (bytes):")?;
    canvas.blank()?;
    let rows: [(&str, usize); 9] = [
        ("bool", size_of::<bool>()),
        ("char", size_of::<char>()),
        ("i32", size_of::<i32>()),
        ("i64", size_of::<i64>()),
        ("f64", size_of::<f64>()),
        ("&i32", size_of::<&i32>()),
        ("Box<i32>", size_of::<Box<i32>>()),
        ("Vec<i32>", size_of::<Vec<i32>>()),
        ("Option<Box<i32>>", size_of::<Option<Box<i32>>>()),
    ];
    for (name, size) in rows {
        canvas.line(&format!("  {:<20} {:>3}", name, size))?;
    }
    canvas.blank()?;
    canvas.dim("Option<Box<T>> is the same size as Box<T>: the null pointer encodes None.")
}

const POINTERS: Lesson = Lesson {
    name: "Pointers & References",
    title: "POINTERS & REFERENCES - The Foundation of Data Structures",
    concept: &[
        "A pointer is a value that holds the address of another value.",
        "Linked lists, trees and graphs are built from nodes that point at each other.",
        "Rust splits the idea into borrowed references (&T, &mut T) and owning",
        "smart pointers (Box, Rc, Arc); raw pointers exist but need `unsafe`.",
    ],
    comparisons: &[
        Comparison {
            heading: "References vs Raw Pointers",
            rust: r#"let mut x = 10;
let r = &mut x;    // exclusive borrow
*r += 1;
// let r2 = &x;    // error: x is already borrowed mutably
println!("{}", x); // 11"#,
            cpp: r#"int x = 10;
int* p = &x;
*p += 1;
int* q = &x;       // any number of aliases allowed
std::cout << x;    // 11"#,
            explanation: "Both dereference an address. The borrow checker forbids aliasing a mutable reference, which rules out whole classes of bugs C++ leaves to discipline.",
        },
        Comparison {
            heading: "Smart Pointers",
            rust: r#"let a = Box::new(5);          // unique owner
let b = Rc::new(vec![1, 2]);  // shared owner
let c = Rc::clone(&b);        // count = 2"#,
            cpp: r#"auto a = std::make_unique<int>(5);
auto b = std::make_shared<std::vector<int>>();
auto c = b;                   // use_count = 2"#,
            explanation: "Box ≈ unique_ptr and Rc ≈ shared_ptr (Arc for threads). Rust's versions cannot be null; absence is Option<Box<T>>.",
        },
    ],
    demo: Some(shared_ownership),
    notes: &[
        "A reference can never be null or dangling in safe Rust",
        "Only one &mut T or any number of &T at a time",
        "Box<T> moves a value to the heap with a single owner",
        "Rc<T> counts owners; the value drops when the count hits zero",
        "Pointer arithmetic is C/C++ territory; Rust uses slices and indices",
    ],
    key_points: &[
        "Pointers make non-contiguous data structures possible",
        "Ownership answers who frees the memory",
        "Prefer indices or slices over raw pointer arithmetic",
    ],
    mistakes: &[
        "Dereferencing a null or uninitialised pointer (C++)",
        "Keeping a pointer into a vector that later reallocates",
        "Creating Rc cycles (use Weak for back-pointers)",
    ],
    ..Lesson::EMPTY
};

fn shared_ownership(canvas: &mut Canvas<'_>) -> io::Result<()> {
    let shared = Rc::new(vec![1, 2, 3]);
    canvas.step(1, "let a = Rc::new(vec![1, 2, 3]);")?;
    canvas.line(&format!("  strong count = {}", Rc::strong_count(&shared)))?;

    let second = Rc::clone(&shared);
    canvas.step(2, "let b = Rc::clone(&a);")?;
    canvas.line(&format!("  strong count = {}", Rc::strong_count(&shared)))?;
    canvas.line(&format!("  a and b point at the same buffer: {}", Rc::ptr_eq(&shared, &second)))?;

    drop(second);
    canvas.step(3, "drop(b);")?;
    canvas.line(&format!("  strong count = {}", Rc::strong_count(&shared)))?;
    canvas.dim("  The vector is freed when the last Rc goes away.")
}

const RECURSION: Lesson = Lesson {
    name: "Recursion",
    title: "RECURSION - Function Calling Itself",
    concept: &[
        "Recursion is when a function calls itself to solve a problem",
        "by breaking it down into smaller subproblems.",
    ],
    comparisons: &[Comparison {
        heading: "Basic Recursion Example",
        rust: r#"fn factorial(n: u64) -> u64 {
    if n <= 1 {
        return 1;              // base case
    }
    n * factorial(n - 1)       // recursive case
}"#,
        cpp: r#"unsigned long factorial(unsigned n) {
    if (n <= 1) return 1;           // base case
    return n * factorial(n - 1);    // recursive case
}"#,
        explanation: "Both use the call stack. Each recursive call adds a stack frame. Must have a base case to stop!",
    }],
    demo: Some(factorial_trace),
    notes: &[
        "Every recursion needs a base case (stopping condition)",
        "Recursive case must progress toward base case",
        "Space complexity: O(n) for call stack depth n",
        "Can cause stack overflow if too deep",
        "Rust does not guarantee tail call optimization",
        "Iterative solutions often more efficient (no stack overhead)",
    ],
    key_points: &[
        "Recursion = function calling itself",
        "Base case prevents infinite recursion",
        "Call stack stores each recursive call",
        "Useful for tree/graph traversal, divide-and-conquer",
        "Trade-off: elegant code vs stack space",
    ],
    ..Lesson::EMPTY
};

fn factorial_trace(canvas: &mut Canvas<'_>) -> io::Result<()> {
    fn descend(canvas: &mut Canvas<'_>, n: u64, depth: usize) -> io::Result<u64> {
        let indent = "  ".repeat(depth);
        canvas.line(&format!("{}→ factorial({})", indent, n))?;
        let result = if n <= 1 { 1 } else { n * descend(canvas, n - 1, depth + 1)? };
        canvas.line(&format!("{}← factorial({}) = {}", indent, n, result))?;
        Ok(result)
    }

    canvas.line("Call stack for factorial(5):")?;
    canvas.blank()?;
    let result = descend(canvas, 5, 1)?;
    canvas.blank()?;
    canvas.success(&format!("Result: {}", result))
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
    fn test_factorial_trace_unwinds() {
        let out = render(factorial_trace);
        assert!(out.contains("→ factorial(5)"));
        assert!(out.contains("← factorial(1) = 1"));
        assert!(out.contains("← factorial(5) = 120"));
        assert!(out.contains("Result: 120"));
    }

    #[test]
    fn test_growth_table_rows() {
        let out = render(growth_table);
        // n = 1000: log2 rounds up to 10, n log n = 10000, n² = 1000000
        assert!(out.contains("10000"));
        assert!(out.contains("1000000"));
    }

    #[test]
    fn test_shared_ownership_counts() {
        let out = render(shared_ownership);
        assert!(out.contains("strong count = 2"));
        assert!(out.contains("point at the same buffer: true"));
    }
}
