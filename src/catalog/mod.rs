//! Menu category filter shown above the dish list.

use serde::Serialize;
use thiserror::Error;

/// Title-cases each run that starts with an ASCII word character and extends
/// to the next whitespace. Characters outside such runs are left as-is.
///
/// `"main DISHES"` becomes `"Main Dishes"`.
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            in_word = false;
            out.push(ch);
        } else if in_word {
            out.extend(ch.to_lowercase());
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            in_word = true;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("category '{0}' is not offered")]
pub struct UnknownCategory(pub String);

/// One rendered entry of the category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub category: String,
    pub label: String,
    pub selected: bool,
}

/// Offered categories plus the user's current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryList {
    categories: Vec<String>,
    selected: Vec<String>,
}

impl CategoryList {
    pub fn new<I, T>(categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut list = Self::default();
        for category in categories {
            let category = category.into();
            if !list.categories.contains(&category) {
                list.categories.push(category);
            }
        }
        list
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Selected categories in the order they were picked.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.iter().any(|c| c == category)
    }

    /// Flips the selection of `category` and returns whether it is now selected.
    pub fn toggle(&mut self, category: &str) -> Result<bool, UnknownCategory> {
        if !self.categories.iter().any(|c| c == category) {
            return Err(UnknownCategory(category.to_string()));
        }
        if let Some(pos) = self.selected.iter().position(|c| c == category) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(category.to_string());
            Ok(true)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn chips(&self) -> Vec<CategoryChip> {
        self.categories
            .iter()
            .map(|category| CategoryChip {
                category: category.clone(),
                label: to_title_case(category),
                selected: self.is_selected(category),
            })
            .collect()
    }
}
