use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::view::memory::MemoryView;
use crate::view::view_model::Element;

/// Point-in-time copy of every element in a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub elements: Vec<Element>,
}

impl ViewSnapshot {
    pub fn capture(view: &MemoryView) -> Self {
        ViewSnapshot {
            elements: view.elements().to_vec(),
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_str() == id)
    }

    /// SHA-1 over element state. Equal views give equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha1::new();
        for el in &self.elements {
            hasher.update(el.id.as_str().as_bytes());
            hasher.update([0u8]);
            hasher.update(el.text.as_bytes());
            hasher.update([0u8]);
            hasher.update(el.value.as_bytes());
            hasher.update([0u8]);
            let mut classes: Vec<&String> = el.classes.iter().collect();
            classes.sort();
            for class in classes {
                hasher.update(class.as_bytes());
                hasher.update([1u8]);
            }
            for (prop, value) in &el.styles {
                hasher.update(prop.as_bytes());
                hasher.update([2u8]);
                hasher.update(value.as_bytes());
                hasher.update([3u8]);
            }
            hasher.update([0xffu8]);
        }
        format!("{:x}", hasher.finalize())
    }
}

pub fn view_fingerprint(view: &MemoryView) -> String {
    ViewSnapshot::capture(view).fingerprint()
}
