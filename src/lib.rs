//! # ringq - Fixed-Capacity SPSC Ring Queue
//!
//! A lock-free single-producer single-consumer circular buffer for `no_std`
//! targets, sized at compile time.
//!
//! ## Design
//!
//! - Inline storage for `N` elements of `T`, no allocation
//! - One producer context and one consumer context, enforced by the type system
//! - Lock-free: indices are published with atomic stores, never locked
//! - Indices run over `[0, 2N)` so equal indices always mean "empty"
//! - `const fn` constructor, so a queue can live in a `static` and carry
//!   messages from an interrupt handler to the main loop
//! - Producer workflow: `split` → `Producer::add`
//! - Consumer workflow: `split` → `Consumer::peek` / `Consumer::get`
//!
//! ## Example
//!
//! ```
//! use ringq::{QueueStatus, RingQueue};
//!
//! // A queue of eight byte-sized messages.
//! let mut queue: RingQueue<u8, 8> = RingQueue::new();
//!
//! queue.add(0x48).unwrap();
//! assert_eq!(queue.status(), QueueStatus::NonEmpty);
//! assert_eq!(queue.get(), Ok(0x48));
//! assert_eq!(queue.status(), QueueStatus::Empty);
//!
//! // Hand the two endpoints to a producer and a consumer context.
//! let (mut producer, mut consumer) = queue.split();
//! producer.add(0x49).unwrap();
//! assert_eq!(consumer.get(), Ok(0x49));
//! ```

#![no_std]
#![warn(missing_docs)]

mod ring_queue;

pub use ring_queue::{Consumer, Iter, Producer, QueueEmpty, QueueFull, QueueStatus, RingQueue};
