/// The prefix of an RLP item: its kind and the length of the payload that follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// True for lists, false for byte strings.
    pub list: bool,
    /// Length of the payload in bytes, excluding the header itself.
    pub payload_length: usize,
}

/// Encoding of the empty string, also the base of the short-string prefix range.
pub const EMPTY_STRING_CODE: u8 = 0x80;
/// Encoding of the empty list, also the base of the short-list prefix range.
pub const EMPTY_LIST_CODE: u8 = 0xC0;
