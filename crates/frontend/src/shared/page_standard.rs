//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_employee--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector, paste it into the IDE search and you land in the
//! matching module.

/// Marketing / landing content.
pub const PAGE_CAT_LANDING: &str = "landing";

/// List of records with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case action page (upload, processing).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account pages (sign-up, sign-in, not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LANDING,
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format
/// and that the category part is known.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_employee--list"));
        assert!(is_valid_page_id("d400_allocation_results--dashboard"));
        assert!(!is_valid_page_id("a001_employee"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_employee--detail"));
    }
}
