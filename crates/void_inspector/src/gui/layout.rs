//! Ordered element list that fields insert their widgets into.

/// The kind of widget an element displays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    IntField,
    FloatField,
    Slider,
    Toggle,
    TextBox,
    ColorField,
    ListBox,
    ResourceField,
    Vector3DistributionField,
    Label,
    Foldout,
}

/// One element placed in a layout
#[derive(Clone, Debug, PartialEq)]
pub struct ElementInfo {
    /// Path of the field that owns the element
    pub owner: String,
    pub label: String,
    pub kind: WidgetKind,
    /// Nesting depth of the owning field
    pub depth: usize,
    /// Width reserved for the label
    pub title_width: u32,
}

/// Ordered list of GUI elements.
#[derive(Clone, Debug, Default)]
pub struct GuiLayout {
    elements: Vec<ElementInfo>,
}

impl GuiLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element at `index`, or at the end if `index` is past it.
    /// Returns the index the element ended up at.
    pub fn add_element(&mut self, index: usize, element: ElementInfo) -> usize {
        let index = index.min(self.elements.len());
        log::trace!("Layout element '{}' ({:?}) at {}", element.owner, element.kind, index);
        self.elements.insert(index, element);
        index
    }

    /// Remove every element owned by `owner` or by a field nested below it.
    /// Returns the number of elements removed.
    pub fn remove_owned_by(&mut self, owner: &str) -> usize {
        let before = self.elements.len();
        self.elements
            .retain(|e| e.owner != owner && !super::is_descendant_path(&e.owner, owner));
        before - self.elements.len()
    }

    /// Remove only the elements of fields nested below `owner`.
    pub fn remove_descendants_of(&mut self, owner: &str) -> usize {
        let before = self.elements.len();
        self.elements
            .retain(|e| !super::is_descendant_path(&e.owner, owner));
        before - self.elements.len()
    }

    /// Index of the first element owned by `owner`
    pub fn position(&self, owner: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.owner == owner)
    }

    pub fn get(&self, index: usize) -> Option<&ElementInfo> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[ElementInfo] {
        &self.elements
    }

    /// Labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(owner: &str) -> ElementInfo {
        ElementInfo {
            owner: owner.to_string(),
            label: owner.rsplit('/').next().unwrap_or(owner).to_string(),
            kind: WidgetKind::Label,
            depth: owner.matches('/').count(),
            title_width: 100,
        }
    }

    #[test]
    fn test_insert_order() {
        let mut layout = GuiLayout::new();
        layout.add_element(0, element("b"));
        layout.add_element(0, element("a"));
        assert_eq!(layout.add_element(99, element("c")), 2);

        let labels: Vec<_> = layout.labels().collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert_eq!(layout.position("c"), Some(2));
    }

    #[test]
    fn test_remove_owned() {
        let mut layout = GuiLayout::new();
        for owner in ["obj", "obj/x", "obj/y", "other", "objective"] {
            let len = layout.len();
            layout.add_element(len, element(owner));
        }

        assert_eq!(layout.remove_descendants_of("obj"), 2);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.remove_owned_by("obj"), 1);
        let labels: Vec<_> = layout.labels().collect();
        assert_eq!(labels, ["other", "objective"]);
    }
}
