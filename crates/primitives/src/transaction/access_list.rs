use alloy_primitives::{Address, B256};
use txenc_rlp::{RlpError, RlpWriter};

/// A list of addresses and storage keys that the transaction plans to access.
/// Accesses outside the list are possible, but become more expensive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AccessListItem {
    /// Account addresses that would be loaded at the start of execution
    pub address: Address,
    /// Keys of storage that would be loaded at the start of execution
    #[cfg_attr(feature = "serde", serde(default))]
    pub storage_keys: Vec<B256>,
}

impl AccessListItem {
    /// Writes `[address, [storage_key, ...]]`.
    fn write_to(&self, w: &mut RlpWriter) -> Result<(), RlpError> {
        w.list(|w| {
            w.write(&self.address);
            w.write_list(&self.storage_keys)?;
            Ok(())
        })
    }
}

/// AccessList as defined in EIP-2930
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    /// Returns an iterator over the list's entries.
    pub fn iter(&self) -> impl Iterator<Item = &AccessListItem> {
        self.0.iter()
    }

    /// Number of accessed addresses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no address is accessed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of storage keys across all entries.
    pub fn storage_keys_count(&self) -> usize {
        self.0.iter().map(|item| item.storage_keys.len()).sum()
    }

    /// Writes the list as a nested RLP list. An empty access list is the empty list `0xc0`.
    pub(crate) fn write_to(&self, w: &mut RlpWriter) -> Result<(), RlpError> {
        w.list(|w| self.0.iter().try_for_each(|item| item.write_to(w)))
    }
}

impl From<Vec<AccessListItem>> for AccessList {
    fn from(items: Vec<AccessListItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<AccessListItem> for AccessList {
    fn from_iter<I: IntoIterator<Item = AccessListItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, hex};

    fn written(list: &AccessList) -> Vec<u8> {
        let mut w = RlpWriter::new();
        list.write_to(&mut w).unwrap();
        w.finish().unwrap().to_vec()
    }

    #[test]
    fn empty_access_list_is_empty_list() {
        assert_eq!(written(&AccessList::default()), hex!("c0"));
    }

    #[test]
    fn entry_without_keys() {
        let list = AccessList::from(vec![AccessListItem {
            address: address!("de0b295669a9fd93d5f28d9ec85e40f4cb697bae"),
            storage_keys: vec![],
        }]);
        assert_eq!(written(&list), hex!("d7d694de0b295669a9fd93d5f28d9ec85e40f4cb697baec0"));
    }

    #[test]
    fn entry_with_keys() {
        // EIP-2930 example access list
        let list: AccessList = [
            AccessListItem {
                address: address!("de0b295669a9fd93d5f28d9ec85e40f4cb697bae"),
                storage_keys: vec![
                    b256!("0000000000000000000000000000000000000000000000000000000000000003"),
                    b256!("0000000000000000000000000000000000000000000000000000000000000007"),
                ],
            },
            AccessListItem {
                address: address!("bb9bc244d798123fde783fcc1c72d3bb8c189413"),
                storage_keys: vec![],
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 2);
        assert_eq!(list.storage_keys_count(), 2);
        assert_eq!(
            written(&list),
            hex!("f872f85994de0b295669a9fd93d5f28d9ec85e40f4cb697baef842a00000000000000000000000000000000000000000000000000000000000000003a00000000000000000000000000000000000000000000000000000000000000007d694bb9bc244d798123fde783fcc1c72d3bb8c189413c0")
        );
    }
}
