use alloy_primitives::U256;
use core::fmt;

/// `v` offset of pre-EIP-155 legacy signatures.
const LEGACY_V_OFFSET: u128 = 27;

/// `v` offset of EIP-155 signatures, added to `chain_id * 2`.
const EIP155_V_OFFSET: u128 = 35;

/// r, s: Values corresponding to the signature of the
/// transaction and used to determine the sender of
/// the transaction; formally Tr and Ts. This is expanded in Appendix F of yellow paper.
///
/// The shape decides how the recovery bit is serialized: legacy transactions carry it inside `v`,
/// typed transactions carry a bare `y_parity`. A signature of one shape can only be attached to
/// the matching transaction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum Signature {
    /// Legacy signature without replay protection, `v = 27 + y_parity`.
    Legacy {
        /// Parity of the y coordinate of the public key.
        odd_y_parity: bool,
        /// The R field of the signature; the point on the curve.
        r: U256,
        /// The S field of the signature; the point on the curve.
        s: U256,
    },
    /// Legacy signature bound to a chain, `v = chain_id * 2 + 35 + y_parity`.
    Eip155 {
        /// Chain the signature is valid for.
        chain_id: u64,
        /// Parity of the y coordinate of the public key.
        odd_y_parity: bool,
        /// The R field of the signature; the point on the curve.
        r: U256,
        /// The S field of the signature; the point on the curve.
        s: U256,
    },
    /// Signature of a typed transaction, serialized as `y_parity, r, s`.
    Eip2930 {
        /// Parity of the y coordinate of the public key.
        odd_y_parity: bool,
        /// The R field of the signature; the point on the curve.
        r: U256,
        /// The S field of the signature; the point on the curve.
        s: U256,
    },
}

impl Signature {
    /// Builds a legacy signature from a raw `v` value.
    ///
    /// `27` and `28` give an unprotected signature, values from `35` up give an EIP-155
    /// signature whose chain id is derived from `v`.
    pub fn from_legacy_v(v: u128, r: U256, s: U256) -> Result<Self, SignatureError> {
        match v {
            27 | 28 => Ok(Self::Legacy { odd_y_parity: v == 28, r, s }),
            v if v >= EIP155_V_OFFSET => {
                let chain_id = u64::try_from((v - EIP155_V_OFFSET) / 2)
                    .map_err(|_| SignatureError::ChainIdOverflow(v))?;
                Ok(Self::Eip155 { chain_id, odd_y_parity: (v - EIP155_V_OFFSET) % 2 == 1, r, s })
            }
            v => Err(SignatureError::InvalidV(v)),
        }
    }

    /// Builds a typed transaction signature from a `y_parity` of `0` or `1`.
    pub fn from_y_parity(y_parity: u8, r: U256, s: U256) -> Result<Self, SignatureError> {
        match y_parity {
            0 | 1 => Ok(Self::Eip2930 { odd_y_parity: y_parity == 1, r, s }),
            _ => Err(SignatureError::InvalidYParity(y_parity)),
        }
    }

    /// The shape of this signature.
    pub const fn kind(&self) -> SignatureKind {
        match self {
            Self::Legacy { .. } => SignatureKind::Legacy,
            Self::Eip155 { .. } => SignatureKind::Eip155,
            Self::Eip2930 { .. } => SignatureKind::Eip2930,
        }
    }

    /// The R field.
    pub const fn r(&self) -> U256 {
        match self {
            Self::Legacy { r, .. } | Self::Eip155 { r, .. } | Self::Eip2930 { r, .. } => *r,
        }
    }

    /// The S field.
    pub const fn s(&self) -> U256 {
        match self {
            Self::Legacy { s, .. } | Self::Eip155 { s, .. } | Self::Eip2930 { s, .. } => *s,
        }
    }

    /// Parity of the y coordinate of the public key.
    pub const fn odd_y_parity(&self) -> bool {
        match self {
            Self::Legacy { odd_y_parity, .. } |
            Self::Eip155 { odd_y_parity, .. } |
            Self::Eip2930 { odd_y_parity, .. } => *odd_y_parity,
        }
    }

    /// The chain this signature is bound to, if it is an EIP-155 signature.
    pub const fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Eip155 { chain_id, .. } => Some(*chain_id),
            Self::Legacy { .. } | Self::Eip2930 { .. } => None,
        }
    }

    /// The `v` value written into a legacy transaction, `None` for typed signatures which have
    /// no `v`.
    pub const fn legacy_v(&self) -> Option<u128> {
        match self {
            Self::Legacy { odd_y_parity, .. } => Some(LEGACY_V_OFFSET + *odd_y_parity as u128),
            Self::Eip155 { chain_id, odd_y_parity, .. } => {
                Some(*chain_id as u128 * 2 + EIP155_V_OFFSET + *odd_y_parity as u128)
            }
            Self::Eip2930 { .. } => None,
        }
    }
}

/// The shape of a [`Signature`], without its values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    /// Pre-EIP-155 legacy signature.
    Legacy,
    /// Chain-bound legacy signature.
    Eip155,
    /// Typed transaction signature.
    Eip2930,
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "pre-EIP-155"),
            Self::Eip155 => write!(f, "EIP-155"),
            Self::Eip2930 => write!(f, "EIP-2930"),
        }
    }
}

/// Errors raised while building a [`Signature`] from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// `v` is neither `27`/`28` nor an EIP-155 value.
    #[error("invalid legacy v value {0}")]
    InvalidV(u128),
    /// `v` encodes a chain id that does not fit in 64 bits.
    #[error("chain id encoded in v value {0} overflows u64")]
    ChainIdOverflow(u128),
    /// `y_parity` is neither `0` nor `1`.
    #[error("invalid y parity {0}")]
    InvalidYParity(u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn eip155_v_roundtrips() {
        let r = U256::from(1u64);
        let s = U256::from(2u64);

        let sig = Signature::from_legacy_v(37, r, s).unwrap();
        assert_eq!(sig, Signature::Eip155 { chain_id: 1, odd_y_parity: false, r, s });
        assert_eq!(sig.legacy_v(), Some(37));
        assert_eq!(sig.chain_id(), Some(1));

        let sig = Signature::from_legacy_v(0x2c, r, s).unwrap();
        assert_eq!(sig.chain_id(), Some(4));
        assert!(sig.odd_y_parity());
        assert_eq!(sig.legacy_v(), Some(0x2c));
    }

    #[test]
    fn pre_eip155_v() {
        let sig = Signature::from_legacy_v(28, U256::ZERO, U256::ZERO).unwrap();
        assert_eq!(sig.kind(), SignatureKind::Legacy);
        assert!(sig.odd_y_parity());
        assert_eq!(sig.legacy_v(), Some(28));
        assert_eq!(sig.chain_id(), None);
    }

    #[test]
    fn invalid_v_values() {
        for v in [0u128, 1, 26, 29, 34] {
            assert_matches!(
                Signature::from_legacy_v(v, U256::ZERO, U256::ZERO),
                Err(SignatureError::InvalidV(_))
            );
        }
        let v = (u64::MAX as u128 + 1) * 2 + 35;
        assert_matches!(
            Signature::from_legacy_v(v, U256::ZERO, U256::ZERO),
            Err(SignatureError::ChainIdOverflow(_))
        );
    }

    #[test]
    fn typed_signature_has_no_v() {
        let sig = Signature::from_y_parity(1, U256::from(3u64), U256::from(4u64)).unwrap();
        assert_eq!(sig.kind(), SignatureKind::Eip2930);
        assert_eq!(sig.legacy_v(), None);
        assert_eq!(sig.r(), U256::from(3u64));
        assert_eq!(sig.s(), U256::from(4u64));
        assert_matches!(
            Signature::from_y_parity(2, U256::ZERO, U256::ZERO),
            Err(SignatureError::InvalidYParity(2))
        );
    }

    #[test]
    fn max_chain_id_fits_v() {
        let sig = Signature::Eip155 {
            chain_id: u64::MAX,
            odd_y_parity: true,
            r: U256::ZERO,
            s: U256::ZERO,
        };
        let v = sig.legacy_v().unwrap();
        assert_eq!(Signature::from_legacy_v(v, U256::ZERO, U256::ZERO).unwrap(), sig);
    }
}
