//! Product search
//!
//! Selects which listing endpoint a product query goes to. A free-text term always wins over
//! a category; with neither, the full catalogue is listed.

/// Resolved product query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductQuery {
    /// Every product.
    #[default]
    All,

    /// Products matching a free-text term.
    Term(String),

    /// Products in a named category.
    Category(String),
}

impl ProductQuery {
    /// Resolve the query from the search bar's inputs. Blank inputs count as absent.
    pub fn select(term: Option<&str>, category: Option<&str>) -> Self {
        fn non_blank(value: Option<&str>) -> Option<&str> {
            value.filter(|value| !value.trim().is_empty())
        }

        match (non_blank(term), non_blank(category)) {
            (Some(term), _) => Self::Term(term.to_string()),
            (None, Some(category)) => Self::Category(category.to_string()),
            (None, None) => Self::All,
        }
    }

    /// Path of the listing endpoint, relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Self::All | Self::Term(_) => "products",
            Self::Category(_) => "products/term",
        }
    }

    /// Query-string parameters for the listing endpoint.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::All => Vec::new(),
            Self::Term(term) => vec![("arg", term.clone())],
            Self::Category(category) => vec![("category", category.clone())],
        }
    }
}
