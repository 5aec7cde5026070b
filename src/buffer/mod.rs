//! Internal buffer management for large encode operations.
//!
//! This module provides a process-wide buffer pool to minimize allocations
//! when encoding large character sequences. It is an implementation detail
//! and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
