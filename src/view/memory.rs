use std::collections::HashMap;

use crate::view::error::PageError;
use crate::view::layout::PageLayout;
use crate::view::snapshot::view_fingerprint;
use crate::view::view_model::{DISPLAY_STYLE, Element, ElementId, View};

/// Headless, in-memory view. Elements keep their document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &PageLayout) -> Self {
        let mut view = MemoryView::new();
        for el in &layout.elements {
            view.push(el.clone());
        }
        view
    }

    /// Append an element. An element with an existing id replaces the old one in place.
    pub fn push(&mut self, element: Element) {
        match self.index.get(&element.id) {
            Some(&idx) => self.elements[idx] = element,
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.index.get(id).map(|&idx| &self.elements[idx])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn get(&self, id: &ElementId) -> Result<&Element, PageError> {
        self.element(id)
            .ok_or_else(|| PageError::missing(id.as_str(), "not present in view"))
    }

    fn get_mut(&mut self, id: &ElementId) -> Result<&mut Element, PageError> {
        match self.index.get(id) {
            Some(&idx) => Ok(&mut self.elements[idx]),
            None => Err(PageError::missing(id.as_str(), "not present in view")),
        }
    }
}

impl View for MemoryView {
    fn contains(&self, id: &ElementId) -> bool {
        self.index.contains_key(id)
    }

    fn value(&self, id: &ElementId) -> Result<String, PageError> {
        Ok(self.get(id)?.value.clone())
    }

    fn set_value(&mut self, id: &ElementId, value: &str) -> Result<(), PageError> {
        self.get_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn text(&self, id: &ElementId) -> Result<String, PageError> {
        Ok(self.get(id)?.text.clone())
    }

    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), PageError> {
        self.get_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn is_visible(&self, id: &ElementId) -> Result<bool, PageError> {
        Ok(self.get(id)?.is_visible())
    }

    fn set_visible(&mut self, id: &ElementId, visible: bool) -> Result<(), PageError> {
        let display = if visible { "block" } else { "none" };
        self.get_mut(id)?
            .styles
            .insert(DISPLAY_STYLE.to_string(), display.to_string());
        Ok(())
    }

    fn has_class(&self, id: &ElementId, class: &str) -> Result<bool, PageError> {
        Ok(self.get(id)?.has_class(class))
    }

    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) -> Result<(), PageError> {
        self.get_mut(id)?.set_class(class, on);
        Ok(())
    }

    fn style(&self, id: &ElementId, prop: &str) -> Result<Option<String>, PageError> {
        Ok(self.get(id)?.styles.get(prop).cloned())
    }

    fn set_style(&mut self, id: &ElementId, prop: &str, value: &str) -> Result<(), PageError> {
        self.get_mut(id)?
            .styles
            .insert(prop.to_string(), value.to_string());
        Ok(())
    }

    fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|el| el.has_class(class))
            .map(|el| el.id.clone())
            .collect()
    }

    fn next_sibling(&self, id: &ElementId) -> Option<ElementId> {
        let idx = *self.index.get(id)?;
        self.elements.get(idx + 1).map(|el| el.id.clone())
    }

    fn fingerprint(&self) -> Option<String> {
        Some(view_fingerprint(self))
    }
}
