mod branch;
#[allow(clippy::module_inception)]
mod merkle_tree;
mod node;

use node::{
    Node,
    StorageNode,
    StorageNodeError,
};

pub use merkle_tree::{
    MerkleTree,
    MerkleTreeError,
    MerkleTreeKey,
};
