use alloc::vec::Vec;
use fuel_types::{
    canonical::{
        Deserialize,
        Serialize,
    },
    Bytes32,
};

#[cfg(feature = "random")]
use rand::{
    distributions::{
        Distribution,
        Standard,
    },
    Rng,
};

use core::cmp::Ordering;

pub type StorageData = Vec<u8>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "typescript", wasm_bindgen::prelude::wasm_bindgen)]
#[derive(Deserialize, Serialize)]
pub struct StorageSlot {
    key: Bytes32,
    value: StorageData,
}

impl StorageSlot {
    pub const fn new(key: Bytes32, value: StorageData) -> Self {
        StorageSlot { key, value }
    }

    pub const fn key(&self) -> &Bytes32 {
        &self.key
    }

    pub const fn value(&self) -> &StorageData {
        &self.value
    }

    pub fn size(&self) -> usize {
        Serialize::size(self)
    }
}

impl From<&(Bytes32, StorageData)> for StorageSlot {
    fn from((key, value): &(Bytes32, StorageData)) -> Self {
        Self::new(*key, value.clone())
    }
}

#[cfg(feature = "random")]
impl Distribution<StorageSlot> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StorageSlot {
        StorageSlot {
            key: rng.gen(),
            value: rng.gen::<Bytes32>().to_vec(),
        }
    }
}

impl PartialOrd for StorageSlot {
    fn partial_cmp(&self, other: &StorageSlot) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl Ord for StorageSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
