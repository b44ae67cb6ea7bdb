use serde::{Deserialize, Serialize};

/// Collapsible panels on the results page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Citations,
    Queries,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Citations => "Citations",
            Section::Queries => "Generated Queries",
        }
    }
}

/// Display order of open panels, most recently shown first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOrder {
    open: Vec<Section>,
}

impl SectionOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `section`, or move it to the front if already open
    pub fn show(&mut self, section: Section) {
        self.open.retain(|s| *s != section);
        self.open.insert(0, section);
    }

    pub fn dismiss(&mut self, section: Section) {
        self.open.retain(|s| *s != section);
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.open.contains(&section)
    }

    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.open.iter().copied()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_moves_to_front() {
        let mut order = SectionOrder::new();
        order.show(Section::Citations);
        order.show(Section::Queries);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![Section::Queries, Section::Citations]);

        order.show(Section::Citations);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![Section::Citations, Section::Queries]);
    }

    #[test]
    fn test_dismiss_removes_only_that_section() {
        let mut order = SectionOrder::new();
        order.show(Section::Citations);
        order.show(Section::Queries);
        order.dismiss(Section::Queries);

        assert!(!order.is_open(Section::Queries));
        assert!(order.is_open(Section::Citations));

        // dismissing a closed section is a no-op
        order.dismiss(Section::Queries);
        assert_eq!(order.iter().count(), 1);
    }
}
