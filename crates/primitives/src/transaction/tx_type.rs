use core::fmt;

/// Identifier for legacy transaction, however [`TxLegacy`](crate::TxLegacy) this is technically
/// not typed.
pub const LEGACY_TX_TYPE_ID: u8 = 0;

/// Identifier for [`TxEip2930`](crate::TxEip2930) transaction.
pub const EIP2930_TX_TYPE_ID: u8 = 1;

/// Identifier for [`TxEip1559`](crate::TxEip1559) transaction.
pub const EIP1559_TX_TYPE_ID: u8 = 2;

/// Identifier for [`TxEip4844`](crate::TxEip4844) transaction.
pub const EIP4844_TX_TYPE_ID: u8 = 3;

/// Identifier for [`TxEip7702`](crate::TxEip7702) transaction.
pub const EIP7702_TX_TYPE_ID: u8 = 4;

/// Transaction Type
///
/// The discriminant is the EIP-2718 type flag written in front of typed payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TxType {
    /// Legacy transaction pre EIP-2929
    #[default]
    Legacy = 0_isize,
    /// AccessList transaction
    Eip2930 = 1_isize,
    /// Transaction with Priority fee
    Eip1559 = 2_isize,
    /// Shard Blob Transactions - EIP-4844
    Eip4844 = 3_isize,
    /// EOA Contract Code Transactions - EIP-7702
    Eip7702 = 4_isize,
}

impl TxType {
    /// The EIP-2718 type flag, or `None` for legacy transactions which are written as a bare RLP
    /// list.
    pub const fn flag(self) -> Option<u8> {
        match self {
            Self::Legacy => None,
            Self::Eip2930 => Some(EIP2930_TX_TYPE_ID),
            Self::Eip1559 => Some(EIP1559_TX_TYPE_ID),
            Self::Eip4844 => Some(EIP4844_TX_TYPE_ID),
            Self::Eip7702 => Some(EIP7702_TX_TYPE_ID),
        }
    }

    /// Returns true for every type that uses the EIP-2718 envelope.
    pub const fn is_typed(self) -> bool {
        !matches!(self, Self::Legacy)
    }
}

impl From<TxType> for u8 {
    fn from(value: TxType) -> Self {
        match value {
            TxType::Legacy => LEGACY_TX_TYPE_ID,
            TxType::Eip2930 => EIP2930_TX_TYPE_ID,
            TxType::Eip1559 => EIP1559_TX_TYPE_ID,
            TxType::Eip4844 => EIP4844_TX_TYPE_ID,
            TxType::Eip7702 => EIP7702_TX_TYPE_ID,
        }
    }
}

impl TryFrom<u8> for TxType {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            LEGACY_TX_TYPE_ID => Ok(Self::Legacy),
            EIP2930_TX_TYPE_ID => Ok(Self::Eip2930),
            EIP1559_TX_TYPE_ID => Ok(Self::Eip1559),
            EIP4844_TX_TYPE_ID => Ok(Self::Eip4844),
            EIP7702_TX_TYPE_ID => Ok(Self::Eip7702),
            _ => Err("invalid tx type"),
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Eip2930 => write!(f, "EIP-2930"),
            Self::Eip1559 => write!(f, "EIP-1559"),
            Self::Eip4844 => write!(f, "EIP-4844"),
            Self::Eip7702 => write!(f, "EIP-7702"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_match_eip_2718_assignments() {
        assert_eq!(TxType::Legacy.flag(), None);
        assert_eq!(TxType::Eip2930.flag(), Some(0x01));
        assert_eq!(TxType::Eip1559.flag(), Some(0x02));
        assert_eq!(TxType::Eip4844.flag(), Some(0x03));
        assert_eq!(TxType::Eip7702.flag(), Some(0x04));
    }

    #[test]
    fn u8_conversions() {
        for ty in
            [TxType::Legacy, TxType::Eip2930, TxType::Eip1559, TxType::Eip4844, TxType::Eip7702]
        {
            assert_eq!(TxType::try_from(u8::from(ty)), Ok(ty));
            assert_eq!(ty.flag().is_some(), ty.is_typed());
        }
        assert!(TxType::try_from(5u8).is_err());
        assert!(TxType::try_from(0xc0u8).is_err());
    }
}
