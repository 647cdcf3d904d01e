use drawsync_core::{Element, ElementDraft, ElementPatch};

/// Ordered element collection of one room.
///
/// Insertion order is creation order; clients replay snapshots in that order
/// because later elements paint over earlier ones.
#[derive(Debug, Default, Clone)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element. Returns `None` when the id is already taken,
    /// which is treated as a retransmitted create.
    pub fn create(&mut self, draft: ElementDraft) -> Option<Element> {
        if self.position(&draft.object_id).is_some() {
            return None;
        }
        let element = Element::new(draft);
        self.elements.push(element.clone());
        Some(element)
    }

    /// Shallow-merges the patch into the stored element and returns the
    /// result, or `None` if the element no longer exists.
    pub fn modify(&mut self, patch: ElementPatch) -> Option<Element> {
        let index = self.position(&patch.object_id)?;
        let element = &mut self.elements[index];
        element.apply(patch);
        Some(element.clone())
    }

    pub fn delete(&mut self, object_id: &str) -> bool {
        match self.position(object_id) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes everything and returns how many elements were dropped.
    pub fn delete_all(&mut self) -> usize {
        let count = self.elements.len();
        self.elements.clear();
        count
    }

    pub fn snapshot(&self) -> Vec<Element> {
        self.elements.clone()
    }

    pub fn get(&self, object_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.object_id == object_id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn position(&self, object_id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.object_id == object_id)
    }
}
