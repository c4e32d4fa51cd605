//! Exchange module - moves and swaps between the queue and the stack
//!
//! Each operation checks its preconditions before touching either container,
//! so a returned error always means nothing changed. Operations that consume
//! a queue piece refill the queue with a freshly generated one, keeping it at
//! capacity once a session has filled it.

use crate::queue::PieceQueue;
use crate::rng::{PieceCounter, PieceFactory};
use crate::stack::PieceStack;
use crate::types::{Container, Outcome, ReserveError, ReserveResult};

/// Consume the queue front and refill the queue.
pub fn play(
    queue: &mut PieceQueue,
    factory: &mut PieceFactory,
    counter: &mut PieceCounter,
) -> ReserveResult<Outcome> {
    let played = queue.dequeue()?;
    queue.enqueue(factory.generate(counter))?;
    Ok(Outcome::Played(played))
}

/// Move the queue front onto the stack and refill the queue.
///
/// A full stack aborts with `CapacityExceeded` before anything is dequeued.
pub fn reserve(
    queue: &mut PieceQueue,
    stack: &mut PieceStack,
    factory: &mut PieceFactory,
    counter: &mut PieceCounter,
) -> ReserveResult<Outcome> {
    if stack.is_full() {
        return Err(ReserveError::CapacityExceeded {
            container: Container::Stack,
            capacity: stack.capacity(),
        });
    }
    if queue.is_empty() {
        return Err(ReserveError::EmptyContainer {
            container: Container::Queue,
        });
    }

    let front = queue.dequeue()?;
    stack.push(front)?;
    queue.enqueue(factory.generate(counter))?;
    Ok(Outcome::Reserved(front))
}

/// Pop and discard the stack top.
pub fn use_reserved(stack: &mut PieceStack) -> ReserveResult<Outcome> {
    stack.pop().map(Outcome::UsedReserved)
}

/// Exchange the queue front with the stack top in place.
pub fn swap_top(queue: &mut PieceQueue, stack: &mut PieceStack) -> ReserveResult<Outcome> {
    let precondition = ReserveError::PreconditionFailed {
        required: 1,
        queue_len: queue.len(),
        stack_len: stack.len(),
    };

    match (queue.get_mut(0), stack.get_mut_from_top(0)) {
        (Some(front), Some(top)) => {
            std::mem::swap(front, top);
            Ok(Outcome::SwappedTop {
                to_stack: *top,
                to_queue: *front,
            })
        }
        _ => Err(precondition),
    }
}

/// Exchange the first `n` queue pieces with the top `n` stack pieces.
///
/// Pairs by offset: queue front with stack top, front+1 with top-1, and so on.
/// Both containers must hold at least `n` pieces; `n == 0` is rejected.
pub fn swap_bulk(
    queue: &mut PieceQueue,
    stack: &mut PieceStack,
    n: usize,
) -> ReserveResult<Outcome> {
    if n == 0 || queue.len() < n || stack.len() < n {
        return Err(ReserveError::PreconditionFailed {
            required: n,
            queue_len: queue.len(),
            stack_len: stack.len(),
        });
    }

    for offset in 0..n {
        if let (Some(q), Some(s)) = (queue.get_mut(offset), stack.get_mut_from_top(offset)) {
            std::mem::swap(q, s);
        }
    }
    Ok(Outcome::SwappedBulk { count: n })
}
