use crate::domain::recipe::entities::{CartItem, CartState, RecipeCard, RecipeEntry};

/// Create display cards and the shopping cart from parsed recipe entries
///
/// The cart is the union of all missing ingredients across the entries,
/// deduplicated by exact name in first-seen order. Every item starts
/// selected.
pub fn create_cards_and_cart(entries: Vec<RecipeEntry>) -> (Vec<RecipeCard>, CartState) {
    let mut cards = Vec::with_capacity(entries.len());
    let mut cart = CartState::default();

    for entry in entries {
        let card = RecipeCard::from(entry);

        for name in &card.missing_ingredients {
            if !cart.contains(name) {
                cart.items.push(CartItem::new(name.clone()));
            }
        }

        cards.push(card);
    }

    (cards, cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::MISSING_MARKER;

    fn entry(name: &str, missing: &[&str]) -> RecipeEntry {
        RecipeEntry {
            name: name.to_string(),
            time: "10 min".to_string(),
            steps: "1. Cook".to_string(),
            missing_ingredients: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_cart_unions_and_deduplicates_missing_ingredients() {
        let (cards, cart) = create_cards_and_cart(vec![
            entry("Quick Poha", &[]),
            entry("Paneer Bhurji", &["Paneer", "Cumin"]),
            entry("Chili Paneer Toast", &["Paneer", "Chili"]),
        ]);

        assert_eq!(cards.len(), 3);
        let names: Vec<&str> = cart.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Paneer", "Cumin", "Chili"]);
        assert!(cart.items.iter().all(|item| item.selected));
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let (_, cart) = create_cards_and_cart(vec![
            entry("One", &["Paneer"]),
            entry("Two", &["paneer"]),
        ]);

        let names: Vec<&str> = cart.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Paneer", "paneer"]);
    }

    #[test]
    fn test_only_marked_cards_reference_the_cart() {
        let (cards, cart) = create_cards_and_cart(vec![
            entry("Quick Poha", &[]),
            entry("Paneer Bhurji", &["Paneer"]),
        ]);

        assert_eq!(cards[0].display_name, "Quick Poha");
        assert!(cards[1].display_name.ends_with(MISSING_MARKER));
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn test_no_missing_ingredients_yields_empty_cart() {
        let (_, cart) = create_cards_and_cart(vec![entry("A", &[]), entry("B", &[])]);
        assert!(cart.is_empty());
    }
}
