use crate::{
    alloc::borrow::ToOwned,
    storage::{
        Mappable,
        StorageInspect,
        StorageMutate,
    },
};

use alloc::borrow::Cow;
use hashbrown::HashMap;

#[derive(Debug, Clone)]
pub struct StorageMap<Type>
where
    Type: Mappable,
{
    map: HashMap<Type::OwnedKey, Type::OwnedValue>,
}

impl<Type> Default for StorageMap<Type>
where
    Type: Mappable,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Type> StorageMap<Type>
where
    Type: Mappable,
{
    pub fn new() -> Self {
        Self {
            map: Default::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<Type> StorageInspect<Type> for StorageMap<Type>
where
    Type: Mappable,
    Type::Key: Eq + core::hash::Hash,
    Type::OwnedKey: Eq + core::hash::Hash + core::borrow::Borrow<Type::Key>,
{
    type Error = core::convert::Infallible;

    fn get(&self, key: &Type::Key) -> Result<Option<Cow<Type::OwnedValue>>, Self::Error> {
        let result = self.map.get(key);
        let value = result.map(Cow::Borrowed);
        Ok(value)
    }

    fn contains_key(&self, key: &Type::Key) -> Result<bool, Self::Error> {
        let contains = self.map.contains_key(key);
        Ok(contains)
    }
}

impl<Type> StorageMutate<Type> for StorageMap<Type>
where
    Type: Mappable,
    Type::Key: Eq + core::hash::Hash,
    Type::OwnedKey: Eq + core::hash::Hash + core::borrow::Borrow<Type::Key>,
{
    fn replace(
        &mut self,
        key: &Type::Key,
        value: &Type::Value,
    ) -> Result<Option<Type::OwnedValue>, Self::Error> {
        let previous = self
            .map
            .insert(key.to_owned().into(), value.to_owned().into());
        Ok(previous)
    }

    fn take(&mut self, key: &Type::Key) -> Result<Option<Type::OwnedValue>, Self::Error> {
        let value = self.map.remove(key);
        Ok(value)
    }
}
