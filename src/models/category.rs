//! Category and payment-method labels
//!
//! Both are closed sets of known labels with an `Other` fallback, so stored
//! documents keep plain strings while code can match exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending/income category of an entry, goal or budget
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Comida,
    Transporte,
    Entretenimiento,
    Hogar,
    Salud,
    Ropa,
    Cafe,
    Restaurante,
    Otros,
    /// Fixed category of entries created through `add_income`
    Ingreso,
    Viajes,
    Emergencia,
    /// Any label outside the known set
    Other(String),
}

impl Category {
    /// Categories offered when recording an expense
    pub const EXPENSE_CHOICES: [Category; 9] = [
        Category::Comida,
        Category::Transporte,
        Category::Entretenimiento,
        Category::Hogar,
        Category::Salud,
        Category::Ropa,
        Category::Cafe,
        Category::Restaurante,
        Category::Otros,
    ];

    /// The stored label
    pub fn label(&self) -> &str {
        match self {
            Self::Comida => "Comida",
            Self::Transporte => "Transporte",
            Self::Entretenimiento => "Entretenimiento",
            Self::Hogar => "Hogar",
            Self::Salud => "Salud",
            Self::Ropa => "Ropa",
            Self::Cafe => "Café",
            Self::Restaurante => "Restaurante",
            Self::Otros => "Otros",
            Self::Ingreso => "Ingreso",
            Self::Viajes => "Viajes",
            Self::Emergencia => "Emergencia",
            Self::Other(label) => label,
        }
    }

    /// Look up a category by label. Unknown labels become `Other`.
    ///
    /// Matching is case-insensitive and accepts "Cafe" for "Café".
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "comida" => Self::Comida,
            "transporte" => Self::Transporte,
            "entretenimiento" => Self::Entretenimiento,
            "hogar" => Self::Hogar,
            "salud" => Self::Salud,
            "ropa" => Self::Ropa,
            "café" | "cafe" => Self::Cafe,
            "restaurante" => Self::Restaurante,
            "otros" => Self::Otros,
            "ingreso" => Self::Ingreso,
            "viajes" => Self::Viajes,
            "emergencia" => Self::Emergencia,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// An empty label means the caller did not pick a category
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Other(label) if label.trim().is_empty())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an entry was paid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Yape,
    Plin,
    Other(String),
}

impl PaymentMethod {
    pub fn label(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Transfer => "transfer",
            Self::Yape => "yape",
            Self::Plin => "plin",
            Self::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "cash" | "efectivo" => Self::Cash,
            "card" | "tarjeta" => Self::Card,
            "transfer" | "transferencia" => Self::Transfer,
            "yape" => Self::Yape,
            "plin" => Self::Plin,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.label().to_string()
    }
}

impl FromStr for PaymentMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
