//! Default category names
//!
//! Categories are free-form strings on transactions and budgets; these lists
//! are the choices offered by default.

/// Categories offered for expenses
pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Alimentação",
    "Transporte",
    "Moradia",
    "Saúde",
    "Educação",
    "Lazer",
    "Compras",
    "Viagem",
    "Outros",
];

/// Categories offered for income
pub const INCOME_CATEGORIES: [&str; 5] = [
    "Salário",
    "Freelance",
    "Investimentos",
    "Vendas",
    "Outros",
];

/// Check whether `name` is one of the default expense categories
pub fn is_default_expense_category(name: &str) -> bool {
    EXPENSE_CATEGORIES.contains(&name)
}

/// Check whether `name` is one of the default income categories
pub fn is_default_income_category(name: &str) -> bool {
    INCOME_CATEGORIES.contains(&name)
}
