//! Per-session byte FIFOs.
//!
//! The read side has a fixed capacity that doubles as the largest frame a peer
//! may send. The write side grows and shrinks in whole blocks as output queues
//! up. Both keep `0 <= cursor <= size <= capacity` at all times.

/// Initial (and maximum) read FIFO size.
pub const RFIFO_SIZE: usize = 2 * 1024;
/// Write FIFO block size; write capacity is always a multiple of this.
pub const WFIFO_SIZE: usize = 16 * 1024;
/// Queued output ceiling for client sessions.
pub const WFIFO_MAX: usize = 1024 * 1024;
/// FIFO size used by trusted server links.
pub const FIFOSIZE_SERVERLINK: usize = 256 * 1024;

/// Size bounds applied to every session's FIFOs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoLimits {
    pub rfifo_size: usize,
    pub wfifo_size: usize,
    pub wfifo_max: usize,
    pub serverlink_size: usize,
    pub max_client_packet: usize,
}

impl Default for FifoLimits {
    fn default() -> Self {
        Self {
            rfifo_size: RFIFO_SIZE,
            wfifo_size: WFIFO_SIZE,
            wfifo_max: WFIFO_MAX,
            serverlink_size: FIFOSIZE_SERVERLINK,
            max_client_packet: shared::MAX_FRAME_LEN,
        }
    }
}

/// Incoming bytes waiting to be parsed.
#[derive(Debug, Clone)]
pub struct ReadFifo {
    data: Vec<u8>,
    size: usize,
    pos: usize,
}

impl ReadFifo {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            size: 0,
            pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes received so far (logical size).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Bytes already consumed by the parser.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Bytes received but not yet consumed.
    pub fn rest(&self) -> usize {
        self.size - self.pos
    }

    pub fn space(&self) -> usize {
        self.data.len() - self.size
    }

    pub fn unread(&self) -> &[u8] {
        &self.data[self.pos..self.size]
    }

    pub fn unread_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.pos..self.size]
    }

    /// Free tail of the buffer that the next read may fill.
    pub fn space_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.size..]
    }

    /// Records `n` freshly received bytes written into [`Self::space_mut`].
    pub fn fill(&mut self, n: usize) {
        assert!(n <= self.space(), "read fifo fill past capacity");
        self.size += n;
    }

    /// Appends `bytes`, truncated to the free space. Returns how many were taken.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.space());
        self.data[self.size..self.size + n].copy_from_slice(&bytes[..n]);
        self.size += n;
        n
    }

    /// Marks `n` bytes as consumed, clamped to what is available. Returns the
    /// number actually skipped.
    pub fn skip(&mut self, n: usize) -> usize {
        let n = n.min(self.rest());
        self.pos += n;
        n
    }

    /// Moves unconsumed bytes to the front and resets the cursor.
    pub fn flush(&mut self) {
        if self.pos == 0 {
            return;
        }
        self.data.copy_within(self.pos..self.size, 0);
        self.size -= self.pos;
        self.pos = 0;
    }

    /// Changes capacity, but only if the received data still fits.
    pub fn resize(&mut self, capacity: usize) -> bool {
        if capacity == self.data.len() || self.size >= capacity {
            return false;
        }
        self.data.resize(capacity, 0);
        self.data.shrink_to_fit();
        true
    }

    pub fn u8_at(&self, offset: usize) -> Option<u8> {
        self.unread().get(offset).copied()
    }

    pub fn u16_at(&self, offset: usize) -> Option<u16> {
        shared::packets::read_u16(self.unread(), offset)
    }

    pub fn u32_at(&self, offset: usize) -> Option<u32> {
        shared::packets::read_u32(self.unread(), offset)
    }
}

/// Outgoing bytes waiting for the socket.
#[derive(Debug, Clone)]
pub struct WriteFifo {
    data: Vec<u8>,
    size: usize,
    block: usize,
}

impl WriteFifo {
    pub fn new(block: usize) -> Self {
        Self {
            data: vec![0; block],
            size: 0,
            block,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn block(&self) -> usize {
        self.block
    }

    /// Committed bytes not yet handed to the socket.
    pub fn pending(&self) -> &[u8] {
        &self.data[..self.size]
    }

    /// Makes room for `n` more bytes and returns the uncommitted region.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        if self.size + n > self.data.len() {
            self.adjust(n, self.block);
        }
        &mut self.data[self.size..self.size + n]
    }

    /// The `n` bytes right after the committed data.
    ///
    /// Callers must have checked that they fit.
    pub fn staged_mut(&mut self, n: usize) -> &mut [u8] {
        &mut self.data[self.size..self.size + n]
    }

    pub fn staged(&self, n: usize) -> &[u8] {
        let end = (self.size + n).min(self.data.len());
        &self.data[self.size..end]
    }

    /// Extends the logical size over `n` already-written bytes.
    ///
    /// Panics if the bytes lie past the capacity: memory beyond the buffer
    /// would already have been overwritten.
    pub fn advance(&mut self, n: usize) {
        if self.size + n > self.data.len() {
            panic!(
                "write buffer overflow: committed {} bytes on a {}/{} byte buffer",
                n,
                self.size,
                self.data.len()
            );
        }
        self.size += n;
    }

    /// Drops the first `n` bytes after a (possibly partial) send.
    pub fn consume(&mut self, n: usize) {
        let n = n.min(self.size);
        if n < self.size {
            self.data.copy_within(n..self.size, 0);
        }
        self.size -= n;
    }

    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Sets capacity outright, if the queued data still fits.
    pub fn resize(&mut self, capacity: usize) -> bool {
        if capacity == self.data.len() || self.size >= capacity {
            return false;
        }
        self.data.resize(capacity, 0);
        self.data.shrink_to_fit();
        true
    }

    /// Resize policy run after every commit.
    ///
    /// Grows to the smallest block multiple holding `size + addition`. Halves
    /// (rounded up to a block multiple) once capacity is at least twice
    /// `reserve` and less than a quarter is in use. Returns the new capacity
    /// when it changed.
    pub fn adjust(&mut self, addition: usize, reserve: usize) -> Option<usize> {
        let wanted = self.size + addition;
        let capacity = self.data.len();

        let new_capacity = if wanted > capacity {
            let mut grown = self.block;
            while wanted > grown {
                grown += self.block;
            }
            grown
        } else if capacity >= 2 * reserve && wanted * 4 < capacity {
            (capacity / 2).div_ceil(self.block) * self.block
        } else {
            return None;
        };

        self.data.resize(new_capacity, 0);
        self.data.shrink_to_fit();
        Some(new_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_read_fifo_fill_skip_flush() {
        let mut fifo = ReadFifo::new(16);
        assert_eq!(fifo.extend_from_slice(b"abcdefgh"), 8);
        assert_eq!(fifo.rest(), 8);

        assert_eq!(fifo.skip(3), 3);
        assert_eq!(fifo.unread(), b"defgh");

        fifo.flush();
        assert_eq!(fifo.cursor(), 0);
        assert_eq!(fifo.len(), 5);
        assert_eq!(fifo.unread(), b"defgh");
    }

    #[test]
    fn test_read_fifo_skip_is_clamped() {
        let mut fifo = ReadFifo::new(8);
        fifo.extend_from_slice(b"abc");
        assert_eq!(fifo.skip(10), 3);
        assert_eq!(fifo.rest(), 0);
        assert_eq!(fifo.cursor(), fifo.len());
    }

    #[test]
    fn test_read_fifo_never_grows() {
        let mut fifo = ReadFifo::new(4);
        assert_eq!(fifo.extend_from_slice(b"abcdef"), 4);
        assert_eq!(fifo.space(), 0);
        assert_eq!(fifo.capacity(), 4);
    }

    #[test]
    fn test_read_fifo_accessors() {
        let mut fifo = ReadFifo::new(16);
        fifo.extend_from_slice(&[0xff, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);
        fifo.skip(1);
        assert_eq!(fifo.u16_at(0), Some(0x1234));
        assert_eq!(fifo.u32_at(2), Some(0x1234_5678));
        assert_eq!(fifo.u32_at(3), None);
        assert_eq!(fifo.u8_at(0), Some(0x34));
    }

    #[test]
    fn test_read_fifo_resize_needs_room() {
        let mut fifo = ReadFifo::new(8);
        fifo.extend_from_slice(b"abcdef");
        assert!(!fifo.resize(4));
        assert!(fifo.resize(64));
        assert_eq!(fifo.capacity(), 64);
        assert_eq!(fifo.unread(), b"abcdef");
    }

    #[test]
    fn test_write_fifo_grows_in_blocks() {
        let mut fifo = WriteFifo::new(WFIFO_SIZE);
        let region = fifo.reserve(WFIFO_SIZE + 1);
        assert_eq!(region.len(), WFIFO_SIZE + 1);
        assert_eq!(fifo.capacity(), 2 * WFIFO_SIZE);

        fifo.advance(WFIFO_SIZE + 1);
        fifo.reserve(3 * WFIFO_SIZE);
        assert_eq!(fifo.capacity(), 5 * WFIFO_SIZE);
    }

    #[test]
    fn test_write_fifo_shrinks_when_mostly_empty() {
        let mut fifo = WriteFifo::new(WFIFO_SIZE);
        fifo.reserve(6 * WFIFO_SIZE);
        assert_eq!(fifo.capacity(), 6 * WFIFO_SIZE);

        assert_eq!(fifo.adjust(WFIFO_SIZE, WFIFO_SIZE), Some(3 * WFIFO_SIZE));
        assert_eq!(fifo.adjust(WFIFO_SIZE, WFIFO_SIZE), None);

        fifo.clear();
        assert_eq!(fifo.adjust(0, WFIFO_SIZE), Some(2 * WFIFO_SIZE));
        assert_eq!(fifo.adjust(0, WFIFO_SIZE), Some(WFIFO_SIZE));
        assert_eq!(fifo.adjust(0, WFIFO_SIZE), None);
    }

    #[test]
    fn test_write_fifo_shrink_respects_larger_reserve() {
        let mut fifo = WriteFifo::new(WFIFO_SIZE);
        assert!(fifo.resize(FIFOSIZE_SERVERLINK));
        assert_eq!(fifo.adjust(0, FIFOSIZE_SERVERLINK), None);
    }

    #[test]
    fn test_write_fifo_consume_shifts_remainder() {
        let mut fifo = WriteFifo::new(16);
        fifo.reserve(5).copy_from_slice(b"hello");
        fifo.advance(5);
        fifo.consume(2);
        assert_eq!(fifo.pending(), b"llo");
        fifo.consume(10);
        assert!(fifo.is_empty());
    }

    #[test]
    #[should_panic(expected = "write buffer overflow")]
    fn test_write_fifo_overflow_is_fatal() {
        let mut fifo = WriteFifo::new(16);
        fifo.advance(17);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Reserve(usize),
        Commit(usize),
        Send(usize),
        Adjust(usize),
        Receive(usize),
        Skip(usize),
        Flush,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..70_000).prop_map(Op::Reserve),
            (0usize..70_000).prop_map(Op::Commit),
            (0usize..70_000).prop_map(Op::Send),
            (0usize..20_000).prop_map(Op::Adjust),
            (0usize..3_000).prop_map(Op::Receive),
            (0usize..3_000).prop_map(Op::Skip),
            Just(Op::Flush),
        ]
    }

    proptest! {
        #[test]
        fn prop_fifo_invariants_hold(ops in proptest::collection::vec(op_strategy(), 1..60)) {
            let mut wfifo = WriteFifo::new(WFIFO_SIZE);
            let mut rfifo = ReadFifo::new(RFIFO_SIZE);
            let chunk = vec![7u8; 3_000];

            for op in ops {
                match op {
                    Op::Reserve(n) => { wfifo.reserve(n); }
                    Op::Commit(n) => {
                        // only commit what was reserved
                        let n = n.min(wfifo.capacity() - wfifo.len());
                        wfifo.advance(n);
                        wfifo.adjust(WFIFO_SIZE, WFIFO_SIZE);
                    }
                    Op::Send(n) => wfifo.consume(n),
                    Op::Adjust(n) => { wfifo.adjust(n, WFIFO_SIZE); }
                    Op::Receive(n) => { rfifo.extend_from_slice(&chunk[..n]); }
                    Op::Skip(n) => { rfifo.skip(n); }
                    Op::Flush => rfifo.flush(),
                }

                prop_assert!(wfifo.len() <= wfifo.capacity());
                prop_assert_eq!(wfifo.capacity() % WFIFO_SIZE, 0);
                prop_assert!(wfifo.capacity() >= WFIFO_SIZE);

                prop_assert!(rfifo.cursor() <= rfifo.len());
                prop_assert!(rfifo.len() <= rfifo.capacity());
                prop_assert_eq!(rfifo.capacity(), RFIFO_SIZE);
            }
        }
    }
}
