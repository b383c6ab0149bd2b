use crate::types::*;
use alloy_primitives::{Address, Bytes as AlloyBytes, FixedBytes, TxKind, U256};
use auto_impl::auto_impl;
use bytes::{BufMut, Bytes, BytesMut};
use core::borrow::Borrow;

/// Strips leading zero bytes, yielding the minimal big-endian view of an integer.
pub(crate) fn zeroless_view(v: &impl AsRef<[u8]>) -> &[u8] {
    let v = v.as_ref();
    &v[v.iter().take_while(|&&b| b == 0).count()..]
}

impl Header {
    /// Encodes the header into the `out` buffer.
    pub fn encode(&self, out: &mut dyn BufMut) {
        if self.payload_length < 56 {
            let code = if self.list { EMPTY_LIST_CODE } else { EMPTY_STRING_CODE };
            out.put_u8(code + self.payload_length as u8);
        } else {
            let len_be = self.payload_length.to_be_bytes();
            let len_be = zeroless_view(&len_be);
            let code = if self.list { 0xF7 } else { 0xB7 };
            out.put_u8(code + len_be.len() as u8);
            out.put_slice(len_be);
        }
    }

    /// Returns the length of the encoded header
    pub const fn length(&self) -> usize {
        length_of_length(self.payload_length)
    }
}

/// Length of the header needed to prefix a payload of `payload_length` bytes.
pub const fn length_of_length(payload_length: usize) -> usize {
    if payload_length < 56 {
        1
    } else {
        1 + (usize::BITS as usize / 8) - payload_length.leading_zeros() as usize / 8
    }
}

/// A value with a canonical RLP encoding.
#[auto_impl(&, Box, Arc)]
pub trait Encodable {
    /// Appends the encoding of `self` to `out`.
    fn encode(&self, out: &mut dyn BufMut);

    /// Length of the encoding in bytes.
    fn length(&self) -> usize {
        let mut out = BytesMut::new();
        self.encode(&mut out);
        out.len()
    }
}

impl<'a> Encodable for &'a [u8] {
    fn length(&self) -> usize {
        let mut len = self.len();
        if self.len() != 1 || self[0] >= EMPTY_STRING_CODE {
            len += length_of_length(self.len());
        }
        len
    }

    fn encode(&self, out: &mut dyn BufMut) {
        if self.len() != 1 || self[0] >= EMPTY_STRING_CODE {
            Header { list: false, payload_length: self.len() }.encode(out);
        }
        out.put_slice(self);
    }
}

impl<const LEN: usize> Encodable for [u8; LEN] {
    fn length(&self) -> usize {
        (self as &[u8]).length()
    }

    fn encode(&self, out: &mut dyn BufMut) {
        (self as &[u8]).encode(out)
    }
}

macro_rules! encodable_uint {
    ($t:ty) => {
        #[allow(clippy::cmp_owned, clippy::unnecessary_cast)]
        impl Encodable for $t {
            fn length(&self) -> usize {
                if *self < <$t>::from(EMPTY_STRING_CODE) {
                    1
                } else {
                    1 + (<$t>::BITS as usize / 8) - (self.leading_zeros() as usize / 8)
                }
            }

            fn encode(&self, out: &mut dyn BufMut) {
                if *self == 0 {
                    out.put_u8(EMPTY_STRING_CODE);
                } else if *self < <$t>::from(EMPTY_STRING_CODE) {
                    out.put_u8(*self as u8);
                } else {
                    let be = self.to_be_bytes();
                    let be = zeroless_view(&be);
                    out.put_u8(EMPTY_STRING_CODE + be.len() as u8);
                    out.put_slice(be);
                }
            }
        }
    };
}

encodable_uint!(usize);
encodable_uint!(u8);
encodable_uint!(u16);
encodable_uint!(u32);
encodable_uint!(u64);
encodable_uint!(u128);

impl Encodable for bool {
    fn length(&self) -> usize {
        (*self as u8).length()
    }

    fn encode(&self, out: &mut dyn BufMut) {
        (*self as u8).encode(out)
    }
}

impl Encodable for U256 {
    fn length(&self) -> usize {
        if *self < U256::from(EMPTY_STRING_CODE) {
            1
        } else {
            let be = self.to_be_bytes::<32>();
            1 + zeroless_view(&be).len()
        }
    }

    fn encode(&self, out: &mut dyn BufMut) {
        let be = self.to_be_bytes::<32>();
        zeroless_view(&be).encode(out)
    }
}

impl<const N: usize> Encodable for FixedBytes<N> {
    fn length(&self) -> usize {
        self.0.length()
    }

    fn encode(&self, out: &mut dyn BufMut) {
        self.0.encode(out)
    }
}

impl Encodable for Address {
    fn length(&self) -> usize {
        self.0.length()
    }

    fn encode(&self, out: &mut dyn BufMut) {
        self.0.encode(out)
    }
}

/// Contract creation has no recipient and encodes as the empty string.
impl Encodable for TxKind {
    fn length(&self) -> usize {
        match self {
            TxKind::Create => 1,
            TxKind::Call(to) => to.length(),
        }
    }

    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            TxKind::Create => out.put_u8(EMPTY_STRING_CODE),
            TxKind::Call(to) => to.encode(out),
        }
    }
}

impl<T> Encodable for Vec<T>
where
    T: Encodable,
{
    fn length(&self) -> usize {
        let payload_length = rlp_list_header::<T, T>(self).payload_length;
        length_of_length(payload_length) + payload_length
    }

    fn encode(&self, out: &mut dyn BufMut) {
        encode_list(self, out)
    }
}

impl Encodable for String {
    fn encode(&self, out: &mut dyn BufMut) {
        self.as_bytes().encode(out);
    }
    fn length(&self) -> usize {
        self.as_bytes().length()
    }
}

impl Encodable for &str {
    fn encode(&self, out: &mut dyn BufMut) {
        self.as_bytes().encode(out);
    }
    fn length(&self) -> usize {
        self.as_bytes().length()
    }
}

macro_rules! slice_impl {
    ($t:ty) => {
        impl $crate::Encodable for $t {
            fn length(&self) -> usize {
                <Self as AsRef<[u8]>>::as_ref(self).length()
            }

            fn encode(&self, out: &mut dyn bytes::BufMut) {
                <Self as AsRef<[u8]>>::as_ref(self).encode(out)
            }
        }
    };
}

slice_impl!(Bytes);
slice_impl!(BytesMut);
slice_impl!(AlloyBytes);

fn rlp_list_header<E, K>(v: &[K]) -> Header
where
    E: Encodable + ?Sized,
    K: Borrow<E>,
{
    let mut h = Header { list: true, payload_length: 0 };
    for x in v {
        h.payload_length += x.borrow().length();
    }
    h
}

/// Encodes `v` as an RLP list into `out`.
pub fn encode_list<E, K>(v: &[K], out: &mut dyn BufMut)
where
    E: Encodable + ?Sized,
    K: Borrow<E>,
{
    let h = rlp_list_header(v);
    h.encode(out);
    for x in v {
        x.borrow().encode(out);
    }
}

/// Encodes a single value into a fresh buffer.
pub fn encode<T: Encodable>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.length());
    value.encode(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};
    use bytes::BytesMut;
    use hex_literal::hex;
    use proptest::prelude::*;

    fn encoded<T: Encodable>(t: T) -> BytesMut {
        let mut out = BytesMut::new();
        t.encode(&mut out);
        out
    }

    fn encoded_list<T: Encodable + Clone>(t: &[T]) -> BytesMut {
        let mut out1 = BytesMut::new();
        encode_list(t, &mut out1);

        let v = t.to_vec();
        assert_eq!(out1.len(), v.length());

        let mut out2 = BytesMut::new();
        v.encode(&mut out2);
        assert_eq!(out1, out2);

        out1
    }

    #[test]
    fn rlp_str() {
        assert_eq!(encoded("")[..], hex!("80")[..]);
        assert_eq!(encoded("{")[..], hex!("7b")[..]);
        assert_eq!(encoded("test str")[..], hex!("887465737420737472")[..]);
    }

    #[test]
    fn rlp_strings() {
        assert_eq!(encoded(hex!(""))[..], hex!("80")[..]);
        assert_eq!(encoded(hex!("7B"))[..], hex!("7b")[..]);
        assert_eq!(encoded(hex!("80"))[..], hex!("8180")[..]);
        assert_eq!(encoded(hex!("ABBA"))[..], hex!("82abba")[..]);
    }

    #[test]
    fn rlp_long_string() {
        let payload = [0xAAu8; 56];
        let out = encoded(payload);
        assert_eq!(&out[..2], &hex!("b838")[..]);
        assert_eq!(&out[2..], &payload[..]);
        assert_eq!(out.len(), payload.length());

        let payload = vec![0x11u8; 1024];
        let out = encoded(payload.as_slice());
        assert_eq!(&out[..3], &hex!("b90400")[..]);
        assert_eq!(out.len(), 1024 + 3);
    }

    fn u8_fixtures() -> impl IntoIterator<Item = (u8, &'static [u8])> {
        vec![
            (0, &hex!("80")[..]),
            (1, &hex!("01")[..]),
            (0x7F, &hex!("7F")[..]),
            (0x80, &hex!("8180")[..]),
        ]
    }

    fn c<T, U: From<T>>(
        it: impl IntoIterator<Item = (T, &'static [u8])>,
    ) -> impl Iterator<Item = (U, &'static [u8])> {
        it.into_iter().map(|(k, v)| (k.into(), v))
    }

    fn u16_fixtures() -> impl IntoIterator<Item = (u16, &'static [u8])> {
        c(u8_fixtures()).chain(vec![(0x400, &hex!("820400")[..])])
    }

    fn u32_fixtures() -> impl IntoIterator<Item = (u32, &'static [u8])> {
        c(u16_fixtures())
            .chain(vec![(0xFFCCB5, &hex!("83ffccb5")[..]), (0xFFCCB5DD, &hex!("84ffccb5dd")[..])])
    }

    fn u64_fixtures() -> impl IntoIterator<Item = (u64, &'static [u8])> {
        c(u32_fixtures()).chain(vec![
            (0xFFCCB5DDFF, &hex!("85ffccb5ddff")[..]),
            (0xFFCCB5DDFFEE, &hex!("86ffccb5ddffee")[..]),
            (0xFFCCB5DDFFEE14, &hex!("87ffccb5ddffee14")[..]),
            (0xFFCCB5DDFFEE1483, &hex!("88ffccb5ddffee1483")[..]),
        ])
    }

    fn u128_fixtures() -> impl IntoIterator<Item = (u128, &'static [u8])> {
        c(u64_fixtures()).chain(vec![(
            0x10203E405060708090A0B0C0D0E0F2,
            &hex!("8f10203e405060708090a0b0c0d0e0f2")[..],
        )])
    }

    fn u256_fixtures() -> impl IntoIterator<Item = (U256, &'static [u8])> {
        u128_fixtures().into_iter().map(|(k, v)| (U256::from(k), v)).chain(vec![(
            U256::from_str_radix("0100020003000400050006000700080009000A0B4B000C000D000E01", 16)
                .unwrap(),
            &hex!("9c0100020003000400050006000700080009000a0b4b000c000d000e01")[..],
        )])
    }

    macro_rules! uint_rlp_test {
        ($fixtures:expr) => {
            for (input, output) in $fixtures {
                assert_eq!(encoded(input), output);
                assert_eq!(input.length(), output.len());
            }
        };
    }

    #[test]
    fn rlp_uints() {
        uint_rlp_test!(u8_fixtures());
        uint_rlp_test!(u16_fixtures());
        uint_rlp_test!(u32_fixtures());
        uint_rlp_test!(u64_fixtures());
        uint_rlp_test!(u128_fixtures());
        uint_rlp_test!(u256_fixtures());
    }

    #[test]
    fn rlp_bool() {
        assert_eq!(encoded(false)[..], hex!("80")[..]);
        assert_eq!(encoded(true)[..], hex!("01")[..]);
    }

    #[test]
    fn rlp_list() {
        assert_eq!(encoded_list::<u64>(&[]), &hex!("c0")[..]);
        assert_eq!(encoded_list::<u8>(&[0x00u8]), &hex!("c180")[..]);
        assert_eq!(encoded_list(&[0xFFCCB5_u64, 0xFFC0B5_u64]), &hex!("c883ffccb583ffc0b5")[..]);
    }

    #[test]
    fn rlp_fixed_hashes() {
        let to = address!("3535353535353535353535353535353535353535");
        assert_eq!(
            encoded(to)[..],
            hex!("943535353535353535353535353535353535353535")[..]
        );
        assert_eq!(to.length(), 21);

        let key = b256!("0000000000000000000000000000000000000000000000000000000000000001");
        let out = encoded(key);
        assert_eq!(out[0], 0xa0);
        assert_eq!(&out[1..], key.as_slice());
    }

    #[test]
    fn rlp_tx_kind() {
        assert_eq!(encoded(TxKind::Create)[..], hex!("80")[..]);
        let to = address!("d3e8763675e4c425df46cc3b5c0f6cbdac396046");
        assert_eq!(encoded(TxKind::Call(to)), encoded(to));
        assert_eq!(TxKind::Create.length(), 1);
    }

    #[test]
    fn rlp_alloy_bytes() {
        assert_eq!(encoded(AlloyBytes::new())[..], hex!("80")[..]);
        assert_eq!(encoded(AlloyBytes::from_static(&hex!("1b55ba3a")))[..], hex!("841b55ba3a")[..]);
    }

    #[test]
    fn encode_helper_matches_length() {
        let out = encode(0x0400u64);
        assert_eq!(out, hex!("820400"));
        assert_eq!(out.len(), 0x0400u64.length());
    }

    proptest! {
        #[test]
        fn minimal_integer_encoding(n in any::<u64>()) {
            let out = encode(n);
            prop_assert_eq!(out.len(), n.length());
            if n == 0 {
                prop_assert_eq!(out, vec![EMPTY_STRING_CODE]);
            } else if n < EMPTY_STRING_CODE as u64 {
                prop_assert_eq!(out, vec![n as u8]);
            } else {
                // the payload never starts with a zero byte
                prop_assert_eq!(out[0] as usize, EMPTY_STRING_CODE as usize + out.len() - 1);
                prop_assert_ne!(out[1], 0);
            }
        }

        #[test]
        fn minimal_u256_encoding(limbs in any::<[u64; 4]>()) {
            let n = U256::from_limbs(limbs);
            let out = encode(n);
            prop_assert_eq!(out.len(), n.length());
            if n.is_zero() {
                prop_assert_eq!(out, vec![EMPTY_STRING_CODE]);
            } else if n >= U256::from(EMPTY_STRING_CODE) {
                prop_assert_ne!(out[1], 0);
            }
        }
    }
}
