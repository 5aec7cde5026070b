//! Process-wide buffer pool for efficient memory reuse.

use std::sync::Mutex;

/// Default capacity for pooled buffers.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep in the pool.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable byte buffer borrowed from the shared pool.
///
/// Dropping the buffer returns its storage to the pool, so release happens
/// on every exit path, normal return and unwinding alike.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the pool, grown to hold at least `min_capacity`
    /// bytes, or creates a new one if the pool is empty.
    ///
    /// A poisoned pool lock degrades to a plain allocation.
    pub fn take(min_capacity: usize) -> Self {
        let mut data = match BUFFER_POOL.lock() {
            Ok(mut pool) => pool.pop().unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        if data.capacity() < min_capacity {
            data.reserve(min_capacity.max(DEFAULT_BUFFER_SIZE));
        }
        Self { data }
    }

    /// Clears the buffer without deallocating.
    #[allow(dead_code)]
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Extends the buffer with data.
    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    /// Returns the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Return the buffer to the pool if it's not too large
        if self.data.capacity() <= DEFAULT_BUFFER_SIZE * 2 {
            self.data.clear();
            if let Ok(mut pool) = BUFFER_POOL.lock() {
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            }
        }
    }
}

// Process-wide pool. Buffers are cleared before they are returned, so a
// taken buffer never exposes bytes from a previous use.
static BUFFER_POOL: Mutex<Vec<Vec<u8>>> = Mutex::new(Vec::new());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_take_sized() {
        let buf = Buffer::take(DEFAULT_BUFFER_SIZE * 8);
        assert!(buf.data.capacity() >= DEFAULT_BUFFER_SIZE * 8);
        assert!(buf.data.is_empty());
    }

    #[test]
    fn test_buffer_extend_and_clear() {
        let mut buf = Buffer::take(1024);
        buf.extend_from_slice(b"hello world");
        assert_eq!(buf.len(), 11);
        assert_eq!(buf.as_slice(), b"hello world");

        buf.clear();
        assert!(buf.data.is_empty());
        // Capacity should be preserved
        assert!(buf.data.capacity() >= 1024);
    }

    #[test]
    fn test_buffer_reuse_starts_empty() {
        // Take a buffer, put some data in it, then drop it
        {
            let mut buf = Buffer::take(1024);
            buf.extend_from_slice(b"stale data");
        }

        // Whatever the pool hands out next must not expose prior contents
        let buf = Buffer::take(1024);
        assert!(buf.data.is_empty());
    }

    #[test]
    fn test_live_buffers_do_not_alias() {
        let mut a = Buffer::take(1024);
        let mut b = Buffer::take(1024);

        a.extend_from_slice(b"aaaa");
        b.extend_from_slice(b"bbbb");

        assert_eq!(a.as_slice(), b"aaaa");
        assert_eq!(b.as_slice(), b"bbbb");
    }

    #[test]
    fn test_concurrent_take_and_release() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let mut buf = Buffer::take(2048);
                        let fill = [i as u8; 32];
                        buf.extend_from_slice(&fill);
                        assert_eq!(buf.as_slice(), &fill);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
