use ash::vk;
use smallvec::SmallVec;
use vpt::{CapabilityBlock, Registry};

/// The blocks one capability query fills in, in the order the caller linked
/// them.
///
/// Several blocks may share a tag; lookups return the first one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    blocks: SmallVec<[CapabilityBlock; 4]>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain of empty blocks for `types`. Tags the registry doesn't know
    /// become opaque blocks.
    pub fn for_types(registry: &Registry, types: &[vk::StructureType]) -> Self {
        types
            .iter()
            .map(|&ty| match registry.lookup(ty) {
                Some(desc) => CapabilityBlock::new(desc),
                None => CapabilityBlock::opaque(ty),
            })
            .collect()
    }

    pub fn push(&mut self, block: CapabilityBlock) {
        self.blocks.push(block);
    }

    pub fn with(mut self, block: CapabilityBlock) -> Self {
        self.push(block);
        self
    }

    pub fn find(&self, ty: vk::StructureType) -> Option<&CapabilityBlock> {
        self.blocks.iter().find(|block| block.ty() == ty)
    }

    pub fn find_mut(&mut self, ty: vk::StructureType) -> Option<&mut CapabilityBlock> {
        self.blocks.iter_mut().find(|block| block.ty() == ty)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CapabilityBlock> {
        self.blocks.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, CapabilityBlock> {
        self.blocks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<CapabilityBlock> for Chain {
    fn from_iter<I: IntoIterator<Item = CapabilityBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a CapabilityBlock;
    type IntoIter = std::slice::Iter<'a, CapabilityBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let registry = Registry::builtin();
        let desc = registry
            .lookup(vk::StructureType::PHYSICAL_DEVICE_FEATURES_2)
            .unwrap();
        let mut first = CapabilityBlock::new(desc);
        first.set("robustBufferAccess", true).unwrap();
        let mut second = CapabilityBlock::new(desc);
        second.set("robustBufferAccess", false).unwrap();

        let mut chain = Chain::new()
            .with(CapabilityBlock::opaque(vk::StructureType::APPLICATION_INFO))
            .with(first.clone())
            .with(second);
        assert_eq!(
            chain.find(vk::StructureType::PHYSICAL_DEVICE_FEATURES_2),
            Some(&first)
        );
        chain
            .find_mut(vk::StructureType::PHYSICAL_DEVICE_FEATURES_2)
            .unwrap()
            .set("geometryShader", true)
            .unwrap();
        assert_eq!(
            chain.iter().nth(1).unwrap().get("geometryShader"),
            Some(&true.into())
        );
    }

    #[test]
    fn absent_tag() {
        let registry = Registry::builtin();
        let chain = Chain::for_types(
            &registry,
            &[
                vk::StructureType::PHYSICAL_DEVICE_FEATURES_2,
                vk::StructureType::APPLICATION_INFO,
            ],
        );
        assert_eq!(chain.len(), 2);
        assert!(chain.find(vk::StructureType::APPLICATION_INFO).unwrap().is_opaque());
        assert!(chain
            .find(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES)
            .is_none());
    }
}
