// Backend configuration
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

// Validation limits
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_DAY_OF_MONTH: u32 = 1;
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Categories offered by the add-transaction form.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Alimentação",
    "Transporte",
    "Moradia",
    "Lazer",
    "Saúde",
    "Compras",
    "Serviços",
    "Educação",
    "Viagem",
    "Outros",
];
