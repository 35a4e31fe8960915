use pizzadash_core::{DashboardService, DashboardView, FilterCriteria};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Months,
    Products,
}

pub struct App {
    pub service: DashboardService,
    pub products: Vec<(String, String)>,
    pub criteria: FilterCriteria,
    pub view: DashboardView,
    pub focus: Focus,
    pub month_state: ListState,
    pub product_state: ListState,
}

impl App {
    pub fn new(service: DashboardService, criteria: FilterCriteria) -> App {
        let products = service.dataset().products();
        let view = service.refresh(&criteria);

        let mut month_state = ListState::default();
        month_state.select(Some(0));
        let mut product_state = ListState::default();
        if !products.is_empty() {
            product_state.select(Some(0));
        }

        App {
            service,
            products,
            criteria,
            view,
            focus: Focus::Months,
            month_state,
            product_state,
        }
    }

    fn active(&mut self) -> (&mut ListState, usize) {
        match self.focus {
            Focus::Months => (&mut self.month_state, 12),
            Focus::Products => (&mut self.product_state, self.products.len()),
        }
    }

    pub fn next(&mut self) {
        let (state, len) = self.active();
        if len == 0 { return; }

        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let (state, len) = self.active();
        if len == 0 { return; }

        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Months => Focus::Products,
            Focus::Products => Focus::Months,
        };
    }

    pub fn toggle_selected(&mut self) {
        match self.focus {
            Focus::Months => {
                if let Some(i) = self.month_state.selected() {
                    self.criteria.toggle_month(i as u32 + 1);
                }
            }
            Focus::Products => {
                if let Some((id, _)) = self.product_state.selected().and_then(|i| self.products.get(i)) {
                    self.criteria.toggle_product(id);
                }
            }
        }
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refresh();
    }

    /// Replaces the whole view; nothing from the previous selection is reused.
    pub fn refresh(&mut self) {
        self.view = self.service.refresh(&self.criteria);
    }

    pub fn is_month_selected(&self, month: u32) -> bool {
        self.criteria.selected_months.contains(&month)
    }

    pub fn is_product_selected(&self, id: &str) -> bool {
        self.criteria.selected_pizza_type_ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzadash_core::{Category, Dataset, SalesRecord};

    fn app() -> App {
        let records = vec![
            SalesRecord::new("1/5/2023", "classic_small", "Classic", "S", Category::Classic, 2, 9.50),
            SalesRecord::new("1/7/2023", "veggie_large", "Veggie Deluxe", "L", Category::Veggie, 1, 15.00),
            SalesRecord::new("2/1/2023", "classic_small", "Classic", "S", Category::Classic, 3, 9.50),
        ];
        App::new(DashboardService::new(Dataset::from_records(records)), FilterCriteria::default())
    }

    #[test]
    fn test_toggle_month_refreshes_view() {
        let mut app = app();
        assert_eq!(app.view.summary.total_orders, 3);

        app.next(); // February
        app.toggle_selected();
        assert!(app.is_month_selected(2));
        assert_eq!(app.view.summary.total_orders, 1);

        app.clear_filters();
        assert_eq!(app.view.summary.total_orders, 3);
    }

    #[test]
    fn test_toggle_product() {
        let mut app = app();
        app.switch_focus();
        app.next();
        app.toggle_selected();
        assert!(app.is_product_selected("veggie_large"));
        assert_eq!(app.view.summary.total_orders, 1);
        assert_eq!(app.view.category_axis.counts, [0, 0, 1, 0]);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.previous();
        assert_eq!(app.month_state.selected(), Some(11));
        app.next();
        assert_eq!(app.month_state.selected(), Some(0));
    }
}
