use crate::model::catalog::{CATALOG, PortfolioEntry};

/// Sentinel filter matching every category
pub const FILTER_ALL: &str = "all";

/// The fixed catalog plus the active category filter.
///
/// The filter is an arbitrary string on purpose: an unknown category is not
/// an error, it just matches nothing, and the caller decides how to present
/// an empty result.
pub struct PortfolioView {
    filter: String,
}

impl Default for PortfolioView {
    fn default() -> Self {
        PortfolioView::new()
    }
}

impl PortfolioView {
    pub fn new() -> PortfolioView {
        PortfolioView {
            filter: FILTER_ALL.to_string(),
        }
    }

    pub fn with_filter(filter: &str) -> PortfolioView {
        PortfolioView {
            filter: filter.to_string(),
        }
    }

    pub fn set_filter(&mut self, category: &str) {
        self.filter = category.to_string();
    }

    pub fn current_filter(&self) -> &str {
        &self.filter
    }

    /// Catalog entries matching the active filter, in catalog order.
    pub fn visible_items(&self) -> Vec<&'static PortfolioEntry> {
        CATALOG
            .iter()
            .filter(|entry| self.filter == FILTER_ALL || entry.category.name() == self.filter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Category;

    #[test]
    fn all_filter_returns_full_catalog_in_order() {
        let view = PortfolioView::new();
        assert_eq!(view.current_filter(), "all");
        let items = view.visible_items();
        assert_eq!(items.len(), CATALOG.len());
        let ids: Vec<u32> = items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_returns_exact_subsequence() {
        let mut view = PortfolioView::new();
        view.set_filter("design");
        let items = view.visible_items();
        assert!(items.iter().all(|e| e.category == Category::Design));
        let ids: Vec<u32> = items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 6]);
    }

    #[test]
    fn unknown_category_yields_empty_not_error() {
        let view = PortfolioView::with_filter("sculpture");
        assert!(view.visible_items().is_empty());
    }

    #[test]
    fn filter_can_be_changed_back() {
        let mut view = PortfolioView::with_filter("mobile");
        assert_eq!(view.visible_items().len(), 2);
        view.set_filter("all");
        assert_eq!(view.visible_items().len(), CATALOG.len());
    }
}
