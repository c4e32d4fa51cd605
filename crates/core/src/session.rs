//! Session module - one queue, one stack and their piece supply
//!
//! A session owns the id counter, the generator and both containers, so no
//! state is shared between sessions. It fills the queue at start-up (and the
//! stack too, unless configured otherwise) and dispatches [`Command`]s to the
//! exchange operations.

use log::{debug, info};

use crate::config::SessionConfig;
use crate::exchange;
use crate::queue::PieceQueue;
use crate::rng::{PieceCounter, PieceFactory};
use crate::snapshot::SessionSnapshot;
use crate::stack::PieceStack;
use crate::types::{Command, Outcome, ReserveResult, BULK_SWAP_COUNT};

/// Complete state for one player
#[derive(Debug, Clone)]
pub struct Session {
    queue: PieceQueue,
    stack: PieceStack,
    factory: PieceFactory,
    counter: PieceCounter,
}

impl Session {
    /// Start a session: queue filled first, then the stack when preseeding.
    pub fn new(config: &SessionConfig) -> Self {
        let mut factory = PieceFactory::new(config.seed);
        let mut counter = PieceCounter::new();
        let mut queue = PieceQueue::new();
        let mut stack = PieceStack::new();

        while !queue.is_full() {
            if queue.enqueue(factory.generate(&mut counter)).is_err() {
                break;
            }
        }
        if config.preseed_stack {
            while !stack.is_full() {
                if stack.push(factory.generate(&mut counter)).is_err() {
                    break;
                }
            }
        }

        debug!(
            "session started: seed={} queue={} stack={}",
            config.seed,
            queue.len(),
            stack.len()
        );

        Self {
            queue,
            stack,
            factory,
            counter,
        }
    }

    /// Assemble a session from prepared parts (scripted scenarios, replays).
    pub fn from_parts(
        queue: PieceQueue,
        stack: PieceStack,
        factory: PieceFactory,
        counter: PieceCounter,
    ) -> Self {
        Self {
            queue,
            stack,
            factory,
            counter,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &PieceStack {
        &self.stack
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u64 {
        self.counter.peek()
    }

    pub fn play(&mut self) -> ReserveResult<Outcome> {
        exchange::play(&mut self.queue, &mut self.factory, &mut self.counter)
    }

    pub fn reserve(&mut self) -> ReserveResult<Outcome> {
        exchange::reserve(
            &mut self.queue,
            &mut self.stack,
            &mut self.factory,
            &mut self.counter,
        )
    }

    pub fn use_reserved(&mut self) -> ReserveResult<Outcome> {
        exchange::use_reserved(&mut self.stack)
    }

    pub fn swap_top(&mut self) -> ReserveResult<Outcome> {
        exchange::swap_top(&mut self.queue, &mut self.stack)
    }

    pub fn swap_bulk(&mut self) -> ReserveResult<Outcome> {
        exchange::swap_bulk(&mut self.queue, &mut self.stack, BULK_SWAP_COUNT)
    }

    /// Apply a command. Errors leave the session unchanged.
    pub fn apply(&mut self, command: Command) -> ReserveResult<Outcome> {
        let result = match command {
            Command::Play => self.play(),
            Command::Reserve => self.reserve(),
            Command::UseReserved => self.use_reserved(),
            Command::SwapTop => self.swap_top(),
            Command::SwapBulk => self.swap_bulk(),
        };

        match &result {
            Ok(outcome) => debug!("{}: {}", command.as_str(), outcome),
            Err(e) => info!("{} rejected: {}", command.as_str(), e),
        }
        result
    }

    /// Copy the current state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter());
        out.stack.extend(self.stack.iter());
        out.next_id = self.counter.peek();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
