//! Static menu catalog.
//!
//! DESIGN
//! ======
//! The catalog ships with the bundle; ordering and inventory live in the
//! point-of-sale backend, not here.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// One orderable menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub slug: &'static str,
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub price_cents: u32,
}

impl MenuItem {
    /// Comma-separated ingredient list, as sent to the copy generator.
    #[must_use]
    pub fn ingredient_list(&self) -> String {
        self.ingredients.join(", ")
    }
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        slug: "garden-bowl",
        name: "Garden Bowl",
        ingredients: &["spinach", "chickpeas", "cucumber", "lemon tahini"],
        price_cents: 1150,
    },
    MenuItem {
        slug: "harvest-bowl",
        name: "Harvest Bowl",
        ingredients: &["kale", "roasted sweet potato", "wild rice", "apple", "balsamic"],
        price_cents: 1325,
    },
    MenuItem {
        slug: "kale-caesar",
        name: "Kale Caesar",
        ingredients: &["kale", "romaine", "parmesan", "croutons", "caesar"],
        price_cents: 1095,
    },
    MenuItem {
        slug: "fiesta-bowl",
        name: "Fiesta Bowl",
        ingredients: &["brown rice", "black beans", "corn salsa", "avocado", "lime cilantro"],
        price_cents: 1250,
    },
];

/// Look up an item by slug.
#[must_use]
pub fn find_item(slug: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.slug == slug)
}

/// Format cents as a dollar price, e.g. `1150` → `"$11.50"`.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
