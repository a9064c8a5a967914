//! Built-in topic catalog for the visualizer

use crate::knowledge::{Comparison, Complexity, KnowledgeEntry, TopicType};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn compare(with: &str, summary: &str) -> Comparison {
    Comparison {
        with: with.to_string(),
        summary: summary.to_string(),
    }
}

fn complexity(time: &str, space: &str) -> Complexity {
    Complexity {
        time: time.to_string(),
        space: space.to_string(),
    }
}

/// Every topic shipped with the visualizer, in lookup order.
///
/// More specific topics come first: "binary search tree" must resolve
/// before "binary search" does.
pub fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry {
            id: "bfs".into(),
            topic_type: TopicType::Algorithm,
            name: "Breadth-First Search".into(),
            aliases: list(&["bfs", "breadth-first", "breadth first"]),
            definition: "Breadth-First Search explores a graph level by level, visiting every neighbor of a node before moving further away from the source.".into(),
            intuition: "Think of ripples spreading out from a stone dropped in water: each ring is one more edge away from where you started.".into(),
            complexity: complexity("O(V + E) time, since every vertex and edge is processed once", "O(V) space for the queue and the visited set"),
            use_cases: list(&[
                "Finding shortest paths by edge count in unweighted graphs",
                "Level-order traversal of trees",
                "Finding connected components and testing bipartiteness",
            ]),
            comparisons: vec![
                compare("dfs", "BFS finds the fewest-edge path and uses memory proportional to the frontier width, while DFS dives deep first and uses memory proportional to the depth."),
                compare("dijkstra", "BFS is Dijkstra with every edge weight equal to one; once weights differ, BFS no longer guarantees shortest paths."),
            ],
            pitfalls: list(&[
                "Marking nodes visited when they are dequeued instead of when they are enqueued lets the same node enter the queue many times.",
                "Using BFS for shortest paths on weighted graphs gives wrong answers.",
            ]),
            implementation_notes: list(&[
                "Use a FIFO queue: enqueue the source, then repeatedly dequeue the front node and enqueue its unvisited neighbors.",
                "Track a parent map while exploring so the shortest path can be rebuilt by walking back from the target.",
            ]),
            optimization_tips: list(&[
                "Run bidirectional BFS from both source and target to cut the explored frontier roughly in half on large graphs.",
                "Stop as soon as the target is dequeued if you only need one path.",
            ]),
            edge_cases: list(&[
                "A disconnected graph leaves some nodes unreached; restart BFS from each unvisited node to cover every component.",
                "A source with no edges finishes immediately with only itself visited.",
            ]),
            examples: list(&[
                "Fewest moves for a knight to reach a square on a chessboard",
                "Degrees of separation in a social network",
            ]),
        },
        KnowledgeEntry {
            id: "dfs".into(),
            topic_type: TopicType::Algorithm,
            name: "Depth-First Search".into(),
            aliases: list(&["dfs", "depth-first", "depth first"]),
            definition: "Depth-First Search follows one path as deep as possible before backtracking to explore the next unexplored branch.".into(),
            intuition: "Like exploring a maze by keeping a hand on one wall: you go until you hit a dead end, then step back to the last junction.".into(),
            complexity: complexity("O(V + E) time, since every vertex and edge is examined once", "O(V) space for the recursion or explicit stack in the worst case"),
            use_cases: list(&[
                "Cycle detection and topological sorting",
                "Finding strongly connected components",
                "Solving puzzles and mazes by backtracking",
            ]),
            comparisons: vec![
                compare("bfs", "DFS uses memory proportional to the depth and reaches far nodes quickly, but unlike BFS it does not find fewest-edge paths."),
            ],
            pitfalls: list(&[
                "Deep recursion on large graphs can overflow the call stack; switch to an explicit stack.",
                "Forgetting the visited set makes DFS loop forever on graphs with cycles.",
            ]),
            implementation_notes: list(&[
                "Use a LIFO stack (or recursion): push the source, then repeatedly pop the top node and push its unvisited neighbors.",
                "Record entry and exit times to classify edges and detect back edges.",
            ]),
            optimization_tips: list(&[
                "Use an iterative stack to avoid recursion overhead and stack limits.",
                "Prune branches early when a partial path can no longer lead to a valid answer.",
            ]),
            edge_cases: list(&[
                "A self-loop is a back edge to the node itself and counts as a cycle.",
                "Neighbor ordering changes the visit order, so two correct DFS runs can produce different traversals.",
            ]),
            examples: list(&[
                "Ordering course prerequisites with a topological sort",
                "Flood-filling a region in a paint program",
            ]),
        },
        KnowledgeEntry {
            id: "dijkstra".into(),
            topic_type: TopicType::Algorithm,
            name: "Dijkstra's Algorithm".into(),
            aliases: list(&["dijkstra"]),
            definition: "Dijkstra's algorithm computes shortest paths from a source in a graph with non-negative edge weights by always settling the closest unsettled node.".into(),
            intuition: "Water flowing out from the source reaches nearer nodes first; once a node is reached, no later route can get there sooner.".into(),
            complexity: complexity("O((V + E) log V) time with a binary heap", "O(V) space for distances, parents and the priority queue"),
            use_cases: list(&[
                "Road navigation and routing with travel times",
                "Network routing protocols such as OSPF",
            ]),
            comparisons: vec![
                compare("astar", "Dijkstra explores uniformly in all directions, while A* uses a heuristic to steer toward the goal and usually settles far fewer nodes."),
                compare("bfs", "Dijkstra generalizes BFS to weighted edges at the cost of a priority queue."),
            ],
            pitfalls: list(&[
                "Negative edge weights break the greedy guarantee; use Bellman-Ford instead.",
                "Updating a distance without re-inserting (or decreasing) the node in the priority queue leaves stale priorities.",
            ]),
            implementation_notes: list(&[
                "Keep a min-priority queue keyed by tentative distance and skip entries whose distance is stale when popped.",
                "Relax each outgoing edge: if dist[u] + w < dist[v], update dist[v] and record u as the parent of v.",
            ]),
            optimization_tips: list(&[
                "Stop as soon as the target is popped from the queue when only one destination matters.",
                "Use lazy deletion in a binary heap instead of a decrease-key operation.",
            ]),
            edge_cases: list(&[
                "Unreachable nodes keep an infinite distance and must be reported as such.",
                "Zero-weight edges are allowed and can create ties between equally short paths.",
            ]),
            examples: list(&[
                "Fastest driving route between two cities",
                "Cheapest sequence of flights between airports",
            ]),
        },
        KnowledgeEntry {
            id: "astar".into(),
            topic_type: TopicType::Algorithm,
            name: "A* Search".into(),
            aliases: list(&["a*", "a-star", "a star", "astar"]),
            definition: "A* search finds a shortest path to a goal by expanding the node with the lowest f = g + h, where g is the cost so far and h estimates the remaining cost.".into(),
            intuition: "Dijkstra with a compass: it still counts the distance travelled but leans toward nodes that look closer to the goal.".into(),
            complexity: complexity("O(E log V) time in the worst case; far less with an informative heuristic", "O(V) space for the open and closed sets"),
            use_cases: list(&[
                "Pathfinding for characters in games and grid maps",
                "Robot motion planning",
            ]),
            comparisons: vec![
                compare("dijkstra", "A* equals Dijkstra when h is zero; an admissible heuristic keeps it optimal while exploring fewer nodes."),
            ],
            pitfalls: list(&[
                "An overestimating heuristic makes A* fast but no longer guarantees the shortest path.",
                "Breaking ties badly on grids leads to many equally scored nodes being expanded.",
            ]),
            implementation_notes: list(&[
                "Keep the open set in a priority queue ordered by f = g + h and the best known g for every node.",
                "Use Manhattan distance on 4-connected grids and octile distance on 8-connected grids.",
            ]),
            optimization_tips: list(&[
                "Break f ties in favor of larger g to push toward the goal.",
                "Use a consistent heuristic so each node is closed at most once.",
            ]),
            edge_cases: list(&[
                "When the goal is unreachable A* explores the whole reachable region before giving up.",
                "Start equal to goal should return a path of length zero immediately.",
            ]),
            examples: list(&[
                "Routing a unit around walls on a tile map",
                "Solving the 8-puzzle with a Manhattan-distance heuristic",
            ]),
        },
        KnowledgeEntry {
            id: "bubble-sort".into(),
            topic_type: TopicType::Algorithm,
            name: "Bubble Sort".into(),
            aliases: list(&["bubble"]),
            definition: "Bubble Sort repeatedly steps through the list and swaps adjacent elements that are out of order until a full pass makes no swaps.".into(),
            intuition: "Large values bubble up to the end of the array one pass at a time.".into(),
            complexity: complexity("O(n^2) time on average and in the worst case, O(n) on already sorted input with early exit", "O(1) extra space"),
            use_cases: list(&[
                "Teaching the idea of sorting by local swaps",
                "Tiny or nearly sorted inputs where simplicity matters more than speed",
            ]),
            comparisons: vec![
                compare("insertion-sort", "Both are quadratic, but insertion sort does fewer writes and is faster in practice on nearly sorted data."),
                compare("merge-sort", "Merge sort is O(n log n) and scales to large inputs, while bubble sort is only practical for small arrays."),
            ],
            pitfalls: list(&[
                "Without a swapped flag the algorithm keeps making passes after the array is already sorted.",
                "Looping to the full length each pass re-checks the suffix that is already in place.",
            ]),
            implementation_notes: list(&[
                "After pass i the last i elements are final, so shrink the inner loop bound each pass.",
                "Compare with a strict greater-than to keep the sort stable.",
            ]),
            optimization_tips: list(&[
                "Stop early when a pass completes with no swaps.",
                "Remember the position of the last swap; everything after it is already sorted.",
            ]),
            edge_cases: list(&[
                "Empty and single-element arrays are already sorted and need no passes.",
                "A reverse-sorted array triggers the maximum number of swaps.",
            ]),
            examples: list(&[
                "Sorting a hand of five cards by repeated neighbor swaps",
            ]),
        },
        KnowledgeEntry {
            id: "selection-sort".into(),
            topic_type: TopicType::Algorithm,
            name: "Selection Sort".into(),
            aliases: list(&["selection sort"]),
            definition: "Selection Sort repeatedly selects the smallest remaining element and swaps it into the next position of the sorted prefix.".into(),
            intuition: "Scan the pile for the smallest card, put it in front, and repeat with what is left.".into(),
            complexity: complexity("O(n^2) time in every case", "O(1) extra space"),
            use_cases: list(&[
                "Situations where writes are expensive, since it performs at most n - 1 swaps",
            ]),
            comparisons: vec![
                compare("insertion-sort", "Selection sort always does quadratic comparisons, while insertion sort adapts to nearly sorted input."),
            ],
            pitfalls: list(&[
                "The standard swap-based version is not stable.",
            ]),
            implementation_notes: list(&[
                "Track only the index of the minimum during the scan and swap once at the end of each pass.",
            ]),
            optimization_tips: list(&[
                "Select both the minimum and the maximum per pass to halve the number of passes.",
            ]),
            edge_cases: list(&[
                "Duplicate keys can be reordered relative to each other.",
            ]),
            examples: list(&[
                "Ordering a small set of flash-memory records with minimal writes",
            ]),
        },
        KnowledgeEntry {
            id: "insertion-sort".into(),
            topic_type: TopicType::Algorithm,
            name: "Insertion Sort".into(),
            aliases: list(&["insertion sort"]),
            definition: "Insertion Sort builds a sorted prefix one element at a time, shifting larger elements right to insert each new element in place.".into(),
            intuition: "The way most people sort playing cards in their hand.".into(),
            complexity: complexity("O(n^2) time in the worst case, O(n) on nearly sorted input", "O(1) extra space"),
            use_cases: list(&[
                "Nearly sorted data and small arrays",
                "The base case inside hybrid sorts such as Timsort and introsort",
            ]),
            comparisons: vec![
                compare("bubble-sort", "Insertion sort moves each element directly to its place with shifts, doing far fewer writes than bubble sort's swaps."),
                compare("merge-sort", "Merge sort wins on large random inputs, but insertion sort is faster below a few dozen elements."),
            ],
            pitfalls: list(&[
                "Swapping at every step instead of shifting and writing once doubles the writes.",
            ]),
            implementation_notes: list(&[
                "Hold the current key in a temporary, shift larger elements right, then write the key into the gap.",
            ]),
            optimization_tips: list(&[
                "Use binary search to find the insertion point when comparisons are expensive.",
            ]),
            edge_cases: list(&[
                "A reverse-sorted array triggers the maximum number of shifts.",
            ]),
            examples: list(&[
                "Keeping a short leaderboard sorted as scores arrive",
            ]),
        },
        KnowledgeEntry {
            id: "merge-sort".into(),
            topic_type: TopicType::Algorithm,
            name: "Merge Sort".into(),
            aliases: list(&["mergesort"]),
            definition: "Merge Sort splits the array in half, sorts each half recursively, and merges the two sorted halves into one.".into(),
            intuition: "Sorting two small piles is easy, and combining two sorted piles only needs a look at their top cards.".into(),
            complexity: complexity("O(n log n) time in every case", "O(n) extra space for the merge buffer"),
            use_cases: list(&[
                "Stable sorting of large datasets",
                "External sorting of data that does not fit in memory",
                "Sorting linked lists without random access",
            ]),
            comparisons: vec![
                compare("quick-sort", "Merge sort guarantees O(n log n) and stability but needs O(n) extra memory; quick sort sorts in place and is usually faster in practice."),
            ],
            pitfalls: list(&[
                "Allocating a new buffer in every recursive call adds heavy allocation overhead.",
                "Taking from the right half on equal keys breaks stability.",
            ]),
            implementation_notes: list(&[
                "Merge with two read indices and one write index into a shared auxiliary buffer.",
                "Bottom-up merge sort avoids recursion by merging runs of width 1, 2, 4 and so on.",
            ]),
            optimization_tips: list(&[
                "Switch to insertion sort for subarrays below about 16 elements.",
                "Skip the merge when the last element of the left half is not greater than the first of the right.",
            ]),
            edge_cases: list(&[
                "Odd-length arrays split unevenly; make sure the midpoint calculation covers every element.",
                "Arrays of equal keys must keep their original order.",
            ]),
            examples: list(&[
                "Sorting log files larger than RAM in chunks",
                "Counting inversions in an array during the merge step",
            ]),
        },
        KnowledgeEntry {
            id: "quick-sort".into(),
            topic_type: TopicType::Algorithm,
            name: "Quick Sort".into(),
            aliases: list(&["quicksort"]),
            definition: "Quick Sort picks a pivot, partitions the array into elements smaller and larger than the pivot, and recursively sorts each side.".into(),
            intuition: "Each partition puts the pivot in its final place and splits the problem into two independent smaller problems.".into(),
            complexity: complexity("O(n log n) average time, O(n^2) worst case with consistently bad pivots", "O(log n) stack space on average"),
            use_cases: list(&[
                "General-purpose in-memory sorting",
                "Selecting the k-th smallest element with quickselect",
            ]),
            comparisons: vec![
                compare("merge-sort", "Quick sort sorts in place with good cache behavior, but unlike merge sort it is unstable and has a quadratic worst case."),
            ],
            pitfalls: list(&[
                "Always choosing the first or last element as pivot degrades to O(n^2) on sorted input.",
                "Two-way partitioning performs badly on many duplicate keys.",
            ]),
            implementation_notes: list(&[
                "Lomuto partitioning is simpler to visualize; Hoare partitioning does fewer swaps.",
                "Recurse into the smaller side first to bound the stack depth at O(log n).",
            ]),
            optimization_tips: list(&[
                "Use median-of-three or a random pivot to avoid adversarial inputs.",
                "Use three-way partitioning when the input has many equal keys.",
            ]),
            edge_cases: list(&[
                "Already sorted input is the classic worst case for a naive pivot choice.",
                "All-equal arrays must still terminate with balanced partitions.",
            ]),
            examples: list(&[
                "The default unstable sort in many standard libraries",
            ]),
        },
        KnowledgeEntry {
            id: "binary-search-tree".into(),
            topic_type: TopicType::DataStructure,
            name: "Binary Search Tree".into(),
            aliases: list(&["bst", "binary search tree"]),
            definition: "A Binary Search Tree stores keys so that every node's left subtree holds smaller keys and its right subtree holds larger keys.".into(),
            intuition: "Each comparison throws away one whole subtree, like binary search on a structure that can grow.".into(),
            complexity: complexity("O(h) time for search, insert and delete, where h is the height: O(log n) balanced, O(n) degenerate", "O(n) space for the nodes"),
            use_cases: list(&[
                "Ordered maps and sets with range queries",
                "Finding predecessors and successors of a key",
            ]),
            comparisons: vec![
                compare("binary-search", "A BST supports fast inserts and deletes, while binary search on a sorted array needs O(n) shifting to insert."),
            ],
            pitfalls: list(&[
                "Inserting sorted keys into an unbalanced BST produces a linked list of height n.",
            ]),
            implementation_notes: list(&[
                "Deleting a node with two children replaces it with its in-order successor.",
            ]),
            optimization_tips: list(&[
                "Use a self-balancing variant such as an AVL or red-black tree to keep the height logarithmic.",
            ]),
            edge_cases: list(&[
                "Decide up front whether duplicate keys go left, go right, or are rejected.",
            ]),
            examples: list(&[
                "An in-order traversal prints the keys in sorted order",
            ]),
        },
        KnowledgeEntry {
            id: "binary-search".into(),
            topic_type: TopicType::Algorithm,
            name: "Binary Search".into(),
            aliases: list(&["binary search", "bisection"]),
            definition: "Binary Search finds a target in a sorted array by comparing it with the middle element and discarding the half that cannot contain it.".into(),
            intuition: "Guessing a number between 1 and 100 by always guessing the middle of what is left.".into(),
            complexity: complexity("O(log n) time", "O(1) space iteratively, O(log n) recursively"),
            use_cases: list(&[
                "Lookups in sorted arrays",
                "Finding the first position where a monotonic condition becomes true",
            ]),
            comparisons: vec![
                compare("linear-search", "Binary search is O(log n) but needs sorted input; linear search is O(n) and works on anything."),
            ],
            pitfalls: list(&[
                "Off-by-one errors in the loop condition or bound updates cause infinite loops or missed targets.",
                "Computing the midpoint as (low + high) / 2 can overflow fixed-width integers.",
            ]),
            implementation_notes: list(&[
                "Keep a clear invariant, for example a half-open range [low, high) that always contains the answer.",
                "Compute the midpoint as low + (high - low) / 2.",
            ]),
            optimization_tips: list(&[
                "Use a branch-free lower-bound loop for tight inner loops.",
            ]),
            edge_cases: list(&[
                "An empty array must return not-found without reading any element.",
                "With duplicates, decide whether to return the first, the last, or any match.",
            ]),
            examples: list(&[
                "Looking up a word in a dictionary",
                "Finding the first bad commit with git bisect",
            ]),
        },
        KnowledgeEntry {
            id: "linear-search".into(),
            topic_type: TopicType::Algorithm,
            name: "Linear Search".into(),
            aliases: list(&["linear search", "sequential search"]),
            definition: "Linear Search checks each element in turn until it finds the target or reaches the end.".into(),
            intuition: "Flipping through a stack of papers one sheet at a time.".into(),
            complexity: complexity("O(n) time", "O(1) space"),
            use_cases: list(&[
                "Unsorted or very small collections",
                "Single lookups where sorting first would cost more",
            ]),
            comparisons: vec![
                compare("binary-search", "Linear search needs no ordering, while binary search needs sorted input but only O(log n) comparisons."),
            ],
            pitfalls: list(&[
                "Running many repeated linear searches over the same data is slower than sorting once or building an index.",
            ]),
            implementation_notes: list(&[
                "Return the index of the first match, or a sentinel such as -1 or None when absent.",
            ]),
            optimization_tips: list(&[
                "Place a sentinel copy of the target at the end to drop the bounds check from the loop.",
            ]),
            edge_cases: list(&[
                "An empty collection returns not-found immediately.",
            ]),
            examples: list(&[
                "Finding a name in an unsorted guest list",
            ]),
        },
        KnowledgeEntry {
            id: "array".into(),
            topic_type: TopicType::DataStructure,
            name: "Array".into(),
            aliases: list(&["array"]),
            definition: "An array stores elements in contiguous memory so any element can be read by index in constant time.".into(),
            intuition: "A row of numbered mailboxes: you can walk straight to box 42 without opening the others.".into(),
            complexity: complexity("O(1) indexed access, O(n) insert or delete in the middle", "O(n) space"),
            use_cases: list(&[
                "Random access by position",
                "Backing storage for heaps, hash tables and dynamic arrays",
            ]),
            comparisons: vec![
                compare("linked-list", "Arrays give O(1) indexing and good cache locality; linked lists give O(1) insertion at a known node."),
            ],
            pitfalls: list(&[
                "Indexing one past the end reads out of bounds.",
            ]),
            implementation_notes: list(&[
                "Dynamic arrays double their capacity when full to keep appends amortized O(1).",
            ]),
            optimization_tips: list(&[
                "Reserve capacity up front when the final size is known.",
            ]),
            edge_cases: list(&[
                "Empty arrays have no valid index at all.",
            ]),
            examples: list(&[
                "Pixels of an image stored row by row",
            ]),
        },
        KnowledgeEntry {
            id: "stack".into(),
            topic_type: TopicType::DataStructure,
            name: "Stack".into(),
            aliases: list(&["stack", "lifo"]),
            definition: "A stack is a last-in, first-out collection: push adds to the top and pop removes from the top.".into(),
            intuition: "A pile of plates where you can only take the one you put down last.".into(),
            complexity: complexity("O(1) push, pop and peek", "O(n) space"),
            use_cases: list(&[
                "Function call frames and recursion",
                "Undo history and matching brackets",
                "Iterative depth-first search",
            ]),
            comparisons: vec![
                compare("queue", "A stack serves the newest element first, while a queue serves the oldest first."),
            ],
            pitfalls: list(&[
                "Popping or peeking an empty stack is an underflow error.",
            ]),
            implementation_notes: list(&[
                "A dynamic array with push and pop at the end is the simplest efficient backing store.",
            ]),
            optimization_tips: list(&[
                "Pre-size the backing array when the maximum depth is known.",
            ]),
            edge_cases: list(&[
                "Check for emptiness before every pop.",
            ]),
            examples: list(&[
                "Checking that parentheses in an expression are balanced",
            ]),
        },
        KnowledgeEntry {
            id: "queue".into(),
            topic_type: TopicType::DataStructure,
            name: "Queue".into(),
            aliases: list(&["queue", "fifo"]),
            definition: "A queue is a first-in, first-out collection: enqueue adds at the back and dequeue removes from the front.".into(),
            intuition: "A line at a ticket counter: whoever arrived first is served first.".into(),
            complexity: complexity("O(1) enqueue and dequeue", "O(n) space"),
            use_cases: list(&[
                "Breadth-first search frontiers",
                "Task scheduling and buffering between producers and consumers",
            ]),
            comparisons: vec![
                compare("stack", "A queue serves the oldest element first, while a stack serves the newest first."),
            ],
            pitfalls: list(&[
                "Removing from the front of a plain array is O(n); use a ring buffer or deque.",
            ]),
            implementation_notes: list(&[
                "A ring buffer with head and tail indices gives O(1) operations without shifting.",
            ]),
            optimization_tips: list(&[
                "Grow the ring buffer by doubling and unwrapping it when full.",
            ]),
            edge_cases: list(&[
                "Dequeue on an empty queue must be handled explicitly.",
            ]),
            examples: list(&[
                "Print jobs waiting for a printer",
            ]),
        },
        KnowledgeEntry {
            id: "linked-list".into(),
            topic_type: TopicType::DataStructure,
            name: "Linked List".into(),
            aliases: list(&["linked list", "linked-list"]),
            definition: "A linked list stores elements in nodes where each node points to the next one.".into(),
            intuition: "A treasure hunt where each clue tells you where to find the next.".into(),
            complexity: complexity("O(1) insert or delete at a known node, O(n) access by index", "O(n) space plus one pointer per node"),
            use_cases: list(&[
                "Frequent insertions and deletions in the middle of a sequence",
                "Implementing queues and LRU caches",
            ]),
            comparisons: vec![
                compare("array", "Linked lists insert in O(1) at a known node but lose O(1) indexing and cache locality."),
            ],
            pitfalls: list(&[
                "Losing the reference to the rest of the list while re-linking nodes.",
            ]),
            implementation_notes: list(&[
                "A dummy head node removes special cases for inserting or deleting at the front.",
            ]),
            optimization_tips: list(&[
                "Keep a tail pointer to make appends O(1).",
            ]),
            edge_cases: list(&[
                "Deleting the only node must leave both head and tail empty.",
            ]),
            examples: list(&[
                "The history list behind a browser's back button",
            ]),
        },
    ]
}
