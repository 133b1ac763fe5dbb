//! Kani verification proofs for the pairing heap engine
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use intrusive_pairing_heap::storage::{Node, NodeIndex};
#[cfg(kani)]
use intrusive_pairing_heap::{ascending, pairing, Heap};

/// Proof that the root is never greater than any other inserted value
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_root_is_minimum() {
    let values: [u8; 4] = kani::any();
    let mut nodes: Vec<Node<u8>> = values.iter().copied().map(Node::new).collect();
    let mut heap = Heap::Empty;
    for i in 0..4 {
        heap = pairing::insert(&mut nodes, heap, NodeIndex(i), ascending);
    }

    let root = heap.root().expect("heap must be non-empty after inserts");
    for value in values {
        assert!(nodes[root.0].value <= value);
    }
}

/// Proof that popping every node returns non-decreasing values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_order() {
    let values: [u8; 3] = kani::any();
    let mut nodes: Vec<Node<u8>> = values.iter().copied().map(Node::new).collect();
    let mut heap = Heap::Empty;
    for i in 0..3 {
        heap = pairing::insert(&mut nodes, heap, NodeIndex(i), ascending);
    }

    let first = pairing::pop(&mut nodes, &mut heap, ascending).unwrap();
    let second = pairing::pop(&mut nodes, &mut heap, ascending).unwrap();
    let third = pairing::pop(&mut nodes, &mut heap, ascending).unwrap();

    assert!(nodes[first.0].value <= nodes[second.0].value);
    assert!(nodes[second.0].value <= nodes[third.0].value);
    assert!(heap.is_empty());
}

/// Proof that melding with an empty heap returns the same heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_meld_identity() {
    let values: [u8; 2] = kani::any();
    let mut nodes: Vec<Node<u8>> = values.iter().copied().map(Node::new).collect();
    let heap = pairing::insert(&mut nodes, Heap::Empty, NodeIndex(0), ascending);
    let heap = pairing::insert(&mut nodes, heap, NodeIndex(1), ascending);

    assert!(pairing::meld(&mut nodes, heap, Heap::Empty, ascending) == heap);
    assert!(pairing::meld(&mut nodes, Heap::Empty, heap, ascending) == heap);
}
