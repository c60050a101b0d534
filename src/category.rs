//! The static category registry.
//!
//! Categories classify a transaction and are scoped per transaction kind.
//! They are compiled into the binary, not persisted, and not user-editable.
//! Transaction records store only the category key.

use crate::transaction::TransactionKind;

/// A category for expenses or income, e.g., 'Supermarket', 'Salary'.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    /// The key stored on transaction records.
    pub key: &'static str,
    /// The display name shown in forms and tables.
    pub name: &'static str,
    /// An emoji shown alongside the name.
    pub icon: &'static str,
}

pub const EXPENSE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "Fuel",
        name: "Fuel",
        icon: "⛽",
    },
    CategoryDef {
        key: "Supermarket",
        name: "Supermarket",
        icon: "🛒",
    },
    CategoryDef {
        key: "Leisure",
        name: "Leisure",
        icon: "🍿",
    },
    CategoryDef {
        key: "Electricity",
        name: "Electricity",
        icon: "⚡",
    },
    CategoryDef {
        key: "Water",
        name: "Water",
        icon: "💧",
    },
    CategoryDef {
        key: "Education",
        name: "Education",
        icon: "🎓",
    },
    CategoryDef {
        key: "Bills",
        name: "Bills",
        icon: "🧾",
    },
    CategoryDef {
        key: "Gifts",
        name: "Gifts",
        icon: "🎁",
    },
    CategoryDef {
        key: "Other",
        name: "Other",
        icon: "🛠️",
    },
];

pub const INCOME_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "Salary",
        name: "Salary",
        icon: "💰",
    },
    CategoryDef {
        key: "Gift",
        name: "Gift",
        icon: "🎁",
    },
    CategoryDef {
        key: "Investment",
        name: "Investment",
        icon: "📈",
    },
    CategoryDef {
        key: "OtherIncome",
        name: "Other",
        icon: "💵",
    },
];

/// The categories available for transactions of `kind`.
pub fn categories_for(kind: TransactionKind) -> &'static [CategoryDef] {
    match kind {
        TransactionKind::Expense => EXPENSE_CATEGORIES,
        TransactionKind::Income => INCOME_CATEGORIES,
    }
}

/// The display label for a category key, e.g., "🛒 Supermarket".
///
/// Keys not present in the registry are valid. Records may carry keys from
/// older registry versions, so unknown keys fall back to displaying the raw
/// key rather than failing.
pub fn category_label(key: &str) -> String {
    EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES)
        .find(|category| category.key == key)
        .map(|category| format!("{} {}", category.icon, category.name))
        .unwrap_or_else(|| key.to_owned())
}

#[cfg(test)]
mod category_tests {
    use crate::transaction::TransactionKind;

    use super::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, categories_for, category_label};

    #[test]
    fn categories_are_scoped_by_kind() {
        assert_eq!(
            categories_for(TransactionKind::Expense),
            EXPENSE_CATEGORIES
        );
        assert_eq!(categories_for(TransactionKind::Income), INCOME_CATEGORIES);
    }

    #[test]
    fn label_includes_icon_and_name() {
        assert_eq!(category_label("Supermarket"), "🛒 Supermarket");
        assert_eq!(category_label("Salary"), "💰 Salary");
    }

    #[test]
    fn unknown_key_falls_back_to_raw_key() {
        assert_eq!(category_label("Vintage"), "Vintage");
    }

    #[test]
    fn keys_are_unique_across_kinds() {
        let mut keys: Vec<&str> = EXPENSE_CATEGORIES
            .iter()
            .chain(INCOME_CATEGORIES)
            .map(|category| category.key)
            .collect();
        let total = keys.len();

        keys.sort();
        keys.dedup();

        assert_eq!(keys.len(), total);
    }
}
