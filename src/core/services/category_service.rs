use crate::subscription::{Category, Roster, UNKNOWN_CATEGORY_ID};

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(roster: &mut Roster, category: Category) -> ServiceResult<String> {
        if category.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Category name cannot be empty".into()));
        }
        if category.id == UNKNOWN_CATEGORY_ID
            || category.name.trim().eq_ignore_ascii_case("unknown")
        {
            return Err(ServiceError::Invalid(
                "`Unknown` is reserved for unresolved references".into(),
            ));
        }
        Self::validate_name(roster, &category.name)?;
        Ok(roster.add_category(category))
    }

    /// Removing a category never cascades; clients that still reference it
    /// resolve to the unknown fallback afterwards.
    pub fn remove(roster: &mut Roster, id: &str) -> ServiceResult<()> {
        if roster.remove_category(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Category".into()))
        }
    }

    pub fn list(roster: &Roster) -> Vec<&Category> {
        roster.categories.iter().collect()
    }

    fn validate_name(roster: &Roster, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = roster
            .categories
            .iter()
            .any(|category| category.name.trim().to_ascii_lowercase() == normalized);
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
