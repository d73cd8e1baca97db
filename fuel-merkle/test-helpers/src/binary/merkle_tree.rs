use crate::binary::{
    empty_sum,
    leaf_sum,
    node_sum,
    Data,
    Node,
};
use std::collections::VecDeque;

type DataNode = Node<Data>;
type ProofSet = Vec<Data>;

#[derive(Default)]
pub struct MerkleTree {
    head: Option<Box<DataNode>>,
    leaves_count: u64,
    proof_index: u64,
    proof_set: ProofSet,
}

impl MerkleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_proof_index(&mut self, proof_index: u64) {
        if self.head().is_some() {
            panic!("Cannot change the proof index after adding a leaf!");
        }
        self.proof_index = proof_index;
    }

    pub fn root(&self) -> Data {
        match self.head() {
            None => *empty_sum(),
            Some(head) => {
                let mut current = head.clone();
                while current.next().is_some() {
                    let mut node = current;
                    let mut next_node = node.take_next().unwrap();
                    current = Self::join_subtrees(&mut next_node, &node)
                }
                *current.data()
            }
        }
    }

    pub fn leaves_count(&self) -> u64 {
        self.leaves_count
    }

    pub fn push(&mut self, data: &[u8]) {
        if self.leaves_count == self.proof_index {
            self.proof_set.push(leaf_sum(data));
        }

        let node = Self::create_node(self.head.take(), 0, leaf_sum(data));
        self.head = Some(node);
        self.join_all_subtrees();

        self.leaves_count += 1;
    }

    pub fn prove(mut self) -> (Data, ProofSet) {
        let proof_set_length = self.proof_set.len() as u32;

        if self.head().is_none() || proof_set_length == 0 {
            return (self.root(), self.proof_set)
        }

        let mut current = self.head().clone().unwrap();
        while current.next().is_some()
            && current.next_height().unwrap() < proof_set_length - 1
        {
            let mut node = current;
            let mut next_node = node.take_next().unwrap();
            current = Self::join_subtrees(&mut next_node, &node)
        }

        if current.next().is_some()
            && current.next_height().unwrap() == proof_set_length - 1
        {
            self.proof_set.push(*current.data());
            current = current.take_next().unwrap();
        }

        while current.next().is_some() {
            self.proof_set.push(*current.next_data().unwrap());
            current = current.take_next().unwrap();
        }

        let root = self.root();

        // The proof set starts with the hashed leaf data; remove the leaf data
        // in order to conform with the proof set specification.
        let mut proof_set = VecDeque::from(self.proof_set);
        proof_set.pop_front();

        (root, proof_set.into())
    }

    fn head(&self) -> &Option<Box<DataNode>> {
        &self.head
    }

    fn join_all_subtrees(&mut self) {
        loop {
            let head = self.head.as_ref().unwrap();
            if !(head.next().is_some() && head.height() == head.next_height().unwrap()) {
                break
            }

            let proof_set_length = self.proof_set.len() as u32;
            if head.height() + 1 == proof_set_length {
                let head_leaves_count = 1u64 << head.height();
                let mid = (self.leaves_count / head_leaves_count) * head_leaves_count;
                if self.proof_index < mid {
                    self.proof_set.push(*head.data());
                } else {
                    self.proof_set.push(*head.next_data().unwrap());
                }
            }

            // Merge the two front nodes of the list into a single node
            let mut node = self.head.take().unwrap();
            let mut next_node = node.take_next().unwrap();
            let joined_node = Self::join_subtrees(&mut next_node, &node);

            self.head = Some(joined_node);
        }
    }

    fn join_subtrees(a: &mut DataNode, b: &DataNode) -> Box<DataNode> {
        let next = a.take_next();
        let height = a.height() + 1;
        let data = node_sum(a.data(), b.data());
        Self::create_node(next, height, data)
    }

    fn create_node(
        next: Option<Box<DataNode>>,
        height: u32,
        data: Data,
    ) -> Box<DataNode> {
        Box::new(DataNode::new(next, height, data))
    }
}
