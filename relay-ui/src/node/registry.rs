use super::types::NodeId;
use crate::error::ApplyError;
use std::collections::HashMap;

/// Lookup table from node ids to live surface elements
pub struct NodeRegistry<E> {
    elements: HashMap<NodeId, E>,
}

impl<E> NodeRegistry<E> {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
        }
    }

    /// Record `element` under `id`, returning the element it displaced
    pub fn insert(&mut self, id: NodeId, element: E) -> Option<E> {
        self.elements.insert(id, element)
    }

    pub fn get(&self, id: NodeId) -> Option<&E> {
        self.elements.get(&id)
    }

    /// Like `get`, but a missing entry is a `NodeNotFound` error
    pub fn lookup(&self, id: NodeId) -> Result<&E, ApplyError> {
        self.elements.get(&id).ok_or(ApplyError::NodeNotFound(id))
    }

    pub fn remove(&mut self, id: NodeId) -> Result<E, ApplyError> {
        self.elements.remove(&id).ok_or(ApplyError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Registered ids in ascending order
    pub fn ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.elements.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E> Default for NodeRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
