/// Shows every resource card regardless of category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub category: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    pub category: String,
    pub visibility: CardVisibility,
}

impl ResourceCard {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            visibility: CardVisibility::Shown,
        }
    }
}

/// Applies a click on the filter button for `category`.
pub fn filter_resources(category: &str, buttons: &mut [FilterButton], cards: &mut [ResourceCard]) {
    for button in buttons.iter_mut() {
        button.active = button.category == category;
    }
    for card in cards.iter_mut() {
        card.visibility = if category == ALL_CATEGORIES || card.category == category {
            CardVisibility::Shown
        } else {
            CardVisibility::Hidden
        };
    }
}
