//! Stress tests that push the heaps well past the sizes used elsewhere
//!
//! These cover degenerate shapes (long left spines from sorted input), large
//! merges, and many small merges, which together exercise every code path
//! that walks or tears down whole trees.

#[cfg(feature = "arena-storage")]
use leftist_heap::arena::ArenaLeftistHeap;
use leftist_heap::leftist::LeftistHeap;
use leftist_heap::Heap;

/// Seeded linear congruential generator for deterministic inputs
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
}

/// Sorted input builds the deepest possible trees
fn test_sorted_input_teardown<H: Heap<u32> + Clone>() {
    let mut heap = H::new();
    for i in 0..100_000 {
        heap.push(i);
    }
    let copy = heap.clone();
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(copy.len(), 100_000);
    assert_eq!(copy.top(), Ok(&99_999));
    drop(copy);
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<H: Heap<u32>>() {
    let mut heap = H::new();
    let mut rng = Lcg(42);
    for _ in 0..20_000 {
        heap.push(rng.next() % 1_000);
    }
    assert_eq!(heap.len(), 20_000);

    let mut last = u32::MAX;
    let mut count = 0;
    while let Ok(value) = heap.pop() {
        assert!(value <= last);
        last = value;
        count += 1;
    }
    assert_eq!(count, 20_000);
}

/// Many small heaps folded into one
fn test_many_merges<H: Heap<u32>>() {
    let mut total = H::new();
    let mut rng = Lcg(7);
    let mut expected_len = 0;
    for _ in 0..500 {
        let mut part = H::new();
        for _ in 0..(rng.next() % 10) {
            part.push(rng.next() % 10_000);
            expected_len += 1;
        }
        total.append(&mut part);
        assert!(part.is_empty());
    }
    assert_eq!(total.len(), expected_len);

    let mut last = u32::MAX;
    while let Ok(value) = total.pop() {
        assert!(value <= last);
        last = value;
    }
}

/// Interleaving pushes, pops, and merges at scale
fn test_mixed_workload<H: Heap<u32>>() {
    let mut heap = H::new();
    let mut side = H::new();
    let mut rng = Lcg(2024);
    let mut len = 0usize;
    for round in 0..10_000 {
        match rng.next() % 4 {
            0 | 1 => {
                heap.push(rng.next());
                len += 1;
            }
            2 => {
                if heap.pop().is_ok() {
                    len -= 1;
                }
            }
            _ => {
                side.push(round);
                len += 1;
                if round % 16 == 0 {
                    heap.append(&mut side);
                }
            }
        }
    }
    heap.append(&mut side);
    assert_eq!(heap.len(), len);
}

#[test]
fn test_leftist_sorted_input_teardown() {
    test_sorted_input_teardown::<LeftistHeap<u32>>();
}

#[test]
fn test_leftist_massive_operations() {
    test_massive_operations::<LeftistHeap<u32>>();
}

#[test]
fn test_leftist_many_merges() {
    test_many_merges::<LeftistHeap<u32>>();
}

#[test]
fn test_leftist_mixed_workload() {
    test_mixed_workload::<LeftistHeap<u32>>();
}

#[test]
fn test_leftist_mixed_workload_keeps_invariants() {
    let mut heap = LeftistHeap::new();
    let mut rng = Lcg(99);
    for _ in 0..2_000 {
        if rng.next() % 3 == 0 {
            let _ = heap.pop();
        } else {
            heap.push(rng.next() % 500);
        }
    }
    assert!(heap.verify_invariants());
}

#[cfg(feature = "arena-storage")]
#[test]
fn test_arena_sorted_input_teardown() {
    test_sorted_input_teardown::<ArenaLeftistHeap<u32>>();
}

#[cfg(feature = "arena-storage")]
#[test]
fn test_arena_massive_operations() {
    test_massive_operations::<ArenaLeftistHeap<u32>>();
}

#[cfg(feature = "arena-storage")]
#[test]
fn test_arena_many_merges() {
    test_many_merges::<ArenaLeftistHeap<u32>>();
}

#[cfg(feature = "arena-storage")]
#[test]
fn test_arena_mixed_workload() {
    test_mixed_workload::<ArenaLeftistHeap<u32>>();
}
