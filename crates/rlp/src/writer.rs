//! Incremental RLP writer with explicit list frames.

use crate::{Encodable, Header};
use bytes::{BufMut, Bytes, BytesMut};

/// Errors raised when list frames are not balanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// The output was requested while lists were still open.
    #[error("{open} list(s) still open")]
    UnclosedList {
        /// Number of frames left on the stack.
        open: usize,
    },
    /// `close_list` was called without a matching `start_list`.
    #[error("no open list to close")]
    NoOpenList,
    /// A scoped list body returned with a different number of open frames than it started with.
    #[error("list scope ended at depth {found}, expected {expected}")]
    UnbalancedScope {
        /// Depth the scope should have ended at.
        expected: usize,
        /// Depth it actually ended at.
        found: usize,
    },
}

/// Builds a single RLP item incrementally.
///
/// Primitives are appended with [`RlpWriter::write`]. Lists are delimited by
/// [`RlpWriter::start_list`] and [`RlpWriter::close_list`]: each open list is a frame holding the
/// offset at which its payload starts, and closing it splices the length header in front of the
/// payload. Frames close in LIFO order and [`RlpWriter::finish`] refuses to hand out the buffer
/// while any remain open.
///
/// [`RlpWriter::list`] opens a frame for the duration of a closure. If the closure fails, the
/// partially written list is discarded so the writer is left exactly as it was before the call.
///
/// ```
/// use txenc_rlp::RlpWriter;
///
/// let mut w = RlpWriter::new();
/// w.list(|w| {
///     w.write(&0xFFCCB5_u64).write(&0xFFC0B5_u64);
///     Ok::<_, txenc_rlp::RlpError>(())
/// })
/// .unwrap();
/// assert_eq!(&w.finish().unwrap()[..], &[0xc8, 0x83, 0xff, 0xcc, 0xb5, 0x83, 0xff, 0xc0, 0xb5]);
/// ```
#[derive(Debug, Default)]
pub struct RlpWriter {
    buf: BytesMut,
    frames: Vec<usize>,
}

impl RlpWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer whose output starts with `prefix` verbatim.
    ///
    /// Used for the EIP-2718 type byte that precedes a typed transaction payload.
    pub fn with_prefix(prefix: &[u8]) -> Self {
        let mut buf = BytesMut::with_capacity(prefix.len() + 128);
        buf.put_slice(prefix);
        Self { buf, frames: Vec::new() }
    }

    /// Number of lists currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Appends the canonical encoding of `value` to the innermost open list, or to the root if
    /// none is open.
    pub fn write<E: Encodable + ?Sized>(&mut self, value: &E) -> &mut Self {
        value.encode(&mut self.buf);
        self
    }

    /// Opens a new list.
    pub fn start_list(&mut self) -> &mut Self {
        self.frames.push(self.buf.len());
        self
    }

    /// Closes the innermost open list, prefixing its payload with the list header.
    pub fn close_list(&mut self) -> Result<&mut Self, RlpError> {
        let start = self.frames.pop().ok_or(RlpError::NoOpenList)?;
        let payload = self.buf.split_off(start);
        Header { list: true, payload_length: payload.len() }.encode(&mut self.buf);
        self.buf.extend_from_slice(&payload);
        Ok(self)
    }

    /// Writes a list whose items are produced by `f`.
    ///
    /// The list is closed when `f` succeeds. When `f` fails, or leaves frames of its own open,
    /// everything written since the call is discarded.
    pub fn list<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<RlpError>,
    {
        let depth = self.frames.len();
        let mark = self.buf.len();
        self.start_list();

        match f(self) {
            Ok(value) if self.frames.len() == depth + 1 => {
                self.close_list()?;
                Ok(value)
            }
            Ok(_) => {
                let found = self.frames.len().saturating_sub(1);
                self.rollback(depth, mark);
                Err(RlpError::UnbalancedScope { expected: depth, found }.into())
            }
            Err(err) => {
                self.rollback(depth, mark);
                Err(err)
            }
        }
    }

    /// Writes every item of `items` as one list.
    pub fn write_list<'a, E, I>(&mut self, items: I) -> Result<&mut Self, RlpError>
    where
        E: Encodable + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        self.start_list();
        for item in items {
            self.write(item);
        }
        self.close_list()
    }

    fn rollback(&mut self, depth: usize, mark: usize) {
        self.frames.truncate(depth);
        self.buf.truncate(mark);
    }

    /// Returns the encoded bytes.
    ///
    /// Fails if any list is still open.
    pub fn finish(self) -> Result<Bytes, RlpError> {
        if !self.frames.is_empty() {
            return Err(RlpError::UnclosedList { open: self.frames.len() })
        }
        Ok(self.buf.freeze())
    }
}
