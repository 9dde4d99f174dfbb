//! Search bar.

use storefront::{products::Category, search::ProductQuery};

use crate::context::AppContext;

use super::{ComponentError, ResultExt};

/// Free-text term, selected category and the category picker.
#[derive(Debug)]
pub struct SearchBar {
    ctx: AppContext,
    term: String,
    category: Option<String>,
    categories: Option<Vec<Category>>,
}

impl SearchBar {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            term: String::new(),
            category: None,
            categories: None,
        }
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Categories, while the picker is open.
    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    /// Open the category picker, fetching its entries, or close it if open.
    ///
    /// # Errors
    ///
    /// Returns an error when the categories cannot be fetched; the picker stays closed.
    pub async fn toggle_categories(&mut self) -> Result<Option<&[Category]>, ComponentError> {
        if self.categories.take().is_none() {
            let categories = self
                .ctx
                .products
                .list_categories()
                .await
                .or_log("failed to list categories")?;

            self.categories = Some(categories);
        }

        Ok(self.categories())
    }

    /// The listing query for the current input.
    pub fn query(&self) -> ProductQuery {
        ProductQuery::select(Some(&self.term), self.category.as_deref())
    }
}
