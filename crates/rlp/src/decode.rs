use crate::types::{Header, EMPTY_LIST_CODE, EMPTY_STRING_CODE};

/// Largest payload that still fits a single-byte header.
const SHORT_PAYLOAD_MAX: usize = 55;

/// Errors raised while reading an RLP header.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer ended before the header or its payload did.
    #[error("input too short")]
    InputTooShort,
    /// A length-of-length field starts with a zero byte.
    #[error("leading zero")]
    LeadingZero,
    /// A single byte below `0x80` was wrapped in a string header.
    #[error("non-canonical single byte")]
    NonCanonicalSingleByte,
    /// A long-form header was used for a payload of at most 55 bytes.
    #[error("non-canonical size")]
    NonCanonicalSize,
    /// The declared payload length does not fit in `usize`.
    #[error("payload length overflows usize")]
    Overflow,
}

impl Header {
    /// Reads the header at the front of `buf` and advances past it.
    ///
    /// The payload itself is left in `buf`. Fails if fewer than `payload_length` bytes remain.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let (&first, rest) = buf.split_first().ok_or(DecodeError::InputTooShort)?;
        let prefix = first as usize;

        let header = match first {
            // a lone byte below 0x80 is its own payload and has no header byte
            0x00..=0x7F => return checked(*buf, Self { list: false, payload_length: 1 }),
            0x80..=0xB7 => {
                let payload_length = prefix - EMPTY_STRING_CODE as usize;
                if payload_length == 1 && rest.first().is_some_and(|b| *b < EMPTY_STRING_CODE) {
                    return Err(DecodeError::NonCanonicalSingleByte)
                }
                *buf = rest;
                Self { list: false, payload_length }
            }
            0xB8..=0xBF => {
                *buf = rest;
                Self { list: false, payload_length: long_payload_length(buf, prefix - 0xB7)? }
            }
            0xC0..=0xF7 => {
                *buf = rest;
                Self { list: true, payload_length: prefix - EMPTY_LIST_CODE as usize }
            }
            0xF8..=0xFF => {
                *buf = rest;
                Self { list: true, payload_length: long_payload_length(buf, prefix - 0xF7)? }
            }
        };

        checked(*buf, header)
    }
}

fn checked(buf: &[u8], header: Header) -> Result<Header, DecodeError> {
    if buf.len() < header.payload_length {
        return Err(DecodeError::InputTooShort)
    }
    Ok(header)
}

/// Reads the big-endian length that follows a long-form prefix.
fn long_payload_length(buf: &mut &[u8], len_of_len: usize) -> Result<usize, DecodeError> {
    if buf.len() < len_of_len {
        return Err(DecodeError::InputTooShort)
    }
    let (be, rest) = buf.split_at(len_of_len);
    if be[0] == 0 {
        return Err(DecodeError::LeadingZero)
    }
    if len_of_len > std::mem::size_of::<usize>() {
        return Err(DecodeError::Overflow)
    }
    let payload_length = be.iter().fold(0usize, |acc, b| (acc << 8) | *b as usize);
    if payload_length <= SHORT_PAYLOAD_MAX {
        return Err(DecodeError::NonCanonicalSize)
    }
    *buf = rest;
    Ok(payload_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode, Encodable};
    use assert_matches::assert_matches;
    use hex_literal::hex;
    use proptest::prelude::*;

    fn decoded(input: &[u8]) -> Result<(Header, usize), DecodeError> {
        let mut buf = input;
        let h = Header::decode(&mut buf)?;
        Ok((h, input.len() - buf.len()))
    }

    #[test]
    fn short_forms() {
        assert_eq!(decoded(&hex!("09")), Ok((Header { list: false, payload_length: 1 }, 0)));
        assert_eq!(decoded(&hex!("80")), Ok((Header { list: false, payload_length: 0 }, 1)));
        assert_eq!(decoded(&hex!("820505")), Ok((Header { list: false, payload_length: 2 }, 1)));
        assert_eq!(decoded(&hex!("c0")), Ok((Header { list: true, payload_length: 0 }, 1)));
        assert_eq!(
            decoded(&hex!("c883bbccb583ffc0b5")),
            Ok((Header { list: true, payload_length: 8 }, 1))
        );
    }

    #[test]
    fn long_forms() {
        let mut string = vec![0xB8, 56];
        string.extend([0xAA; 56]);
        assert_eq!(decoded(&string), Ok((Header { list: false, payload_length: 56 }, 2)));

        let mut list = vec![0xF9, 0x01, 0x00];
        list.extend([0x01; 256]);
        assert_eq!(decoded(&list), Ok((Header { list: true, payload_length: 256 }, 3)));
    }

    #[test]
    fn rejects_malformed_headers() {
        assert_matches!(decoded(&[]), Err(DecodeError::InputTooShort));
        assert_matches!(decoded(&hex!("8BFFFFFFFFFFFFFFFFFF7C")), Err(DecodeError::InputTooShort));
        assert_matches!(decoded(&hex!("8105")), Err(DecodeError::NonCanonicalSingleByte));
        assert_matches!(decoded(&hex!("B8020004")), Err(DecodeError::NonCanonicalSize));
        assert_matches!(decoded(&hex!("B900400000")), Err(DecodeError::LeadingZero));
        assert_matches!(decoded(&hex!("F8")), Err(DecodeError::InputTooShort));
        assert_matches!(decoded(&hex!("C30102")), Err(DecodeError::InputTooShort));
        assert_matches!(
            decoded(&hex!("BFFFFFFFFFFFFFFFFFFF")),
            Err(DecodeError::Overflow | DecodeError::InputTooShort)
        );
    }

    proptest! {
        #[test]
        fn header_recovers_string_length(payload in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let out = encode(payload.as_slice());
            let mut buf = &out[..];
            let h = Header::decode(&mut buf).unwrap();
            prop_assert!(!h.list);
            if payload.len() == 1 && payload[0] < 0x80 {
                // a lone low byte is its own encoding
                prop_assert_eq!(h.payload_length, 1);
                prop_assert_eq!(out.len(), 1);
            } else {
                prop_assert_eq!(h.payload_length, payload.len());
                prop_assert_eq!(buf, payload.as_slice());
                prop_assert_eq!(h.length() + payload.len(), out.len());
            }
        }

        #[test]
        fn header_recovers_list_length(items in proptest::collection::vec(any::<u64>(), 0..64)) {
            let out = encode(items.clone());
            let mut buf = &out[..];
            let h = Header::decode(&mut buf).unwrap();
            prop_assert!(h.list);
            prop_assert_eq!(h.payload_length, out.len() - h.length());
            prop_assert_eq!(buf.len(), h.payload_length);
            prop_assert_eq!(items.length(), out.len());
        }
    }
}
