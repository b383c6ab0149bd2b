use alloy_primitives::{Address, U256};
use txenc_rlp::{RlpError, RlpWriter};

/// A signed EIP-7702 authorization: permission for `address`'s code to be installed on the
/// signing account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SignedAuthorization {
    /// The chain the authorization is valid on, `0` for any chain.
    pub chain_id: u64,
    /// The address whose code is delegated to.
    pub address: Address,
    /// Nonce of the authorizing account.
    pub nonce: u64,
    /// Parity of the y coordinate of the signer's public key.
    pub odd_y_parity: bool,
    /// The R field of the authorization signature.
    pub r: U256,
    /// The S field of the authorization signature.
    pub s: U256,
}

impl SignedAuthorization {
    /// The `y_parity` as it is written on the wire.
    pub const fn y_parity(&self) -> u8 {
        self.odd_y_parity as u8
    }

    /// Writes `[chain_id, address, nonce, y_parity, r, s]`.
    ///
    /// An even parity is the integer zero, so it is written as the empty string `0x80`.
    pub(crate) fn write_to(&self, w: &mut RlpWriter) -> Result<(), RlpError> {
        w.list(|w| {
            w.write(&self.chain_id)
                .write(&self.address)
                .write(&self.nonce)
                .write(&self.y_parity())
                .write(&self.r)
                .write(&self.s);
            Ok(())
        })
    }
}

/// Writes the authorization list of a set-code transaction.
pub(crate) fn write_authorization_list(
    w: &mut RlpWriter,
    list: &[SignedAuthorization],
) -> Result<(), RlpError> {
    w.list(|w| list.iter().try_for_each(|auth| auth.write_to(w)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    fn written(auth: &SignedAuthorization) -> Vec<u8> {
        let mut w = RlpWriter::new();
        auth.write_to(&mut w).unwrap();
        w.finish().unwrap().to_vec()
    }

    #[test]
    fn even_parity_is_empty_string() {
        let auth = SignedAuthorization {
            chain_id: 1,
            address: address!("3333333333333333333333333333333333333333"),
            nonce: 0,
            odd_y_parity: false,
            r: U256::from(1u64),
            s: U256::from(2u64),
        };
        assert_eq!(
            written(&auth),
            hex!("da0194333333333333333333333333333333333333333380800102")
        );
        assert_eq!(written(&auth)[24], 0x80);
    }

    #[test]
    fn odd_parity_is_one() {
        let auth = SignedAuthorization {
            chain_id: 0,
            address: Address::ZERO,
            nonce: 7,
            odd_y_parity: true,
            r: U256::ZERO,
            s: U256::ZERO,
        };
        assert_eq!(
            written(&auth),
            hex!("da8094000000000000000000000000000000000000000007018080")
        );
    }

    #[test]
    fn empty_authorization_list() {
        let mut w = RlpWriter::new();
        write_authorization_list(&mut w, &[]).unwrap();
        assert_eq!(&w.finish().unwrap()[..], &hex!("c0")[..]);
    }
}
