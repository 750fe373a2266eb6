//! Pure projection of a buffer snapshot through a set of independent,
//! optional predicates combined with logical AND.

/// Filter criteria applied to one record type.
///
/// Implementors are plain structs of independent predicates; a predicate in
/// its unset ("All") state always passes, so `Default` must mean
/// "everything is visible".
pub trait Criteria<R> {
    /// True if `record` satisfies every active predicate.
    fn accepts(&self, record: &R) -> bool;

    /// True if no predicate is active.
    fn is_default(&self) -> bool;
}

/// Project `snapshot` through `criteria`, preserving relative order.
///
/// Pure: never mutates its inputs, deterministic for identical inputs.
pub fn apply<R: Clone, C: Criteria<R>>(snapshot: &[R], criteria: &C) -> Vec<R> {
    snapshot
        .iter()
        .filter(|record| criteria.accepts(record))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over a record's textual fields.
/// An empty or whitespace-only needle always passes.
pub fn text_match(haystacks: &[&str], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Categorical equality predicate over one filter dimension.
/// `None` means "All" and passes every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionFilter<T>(Option<T>);

impl<T> Default for DimensionFilter<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: PartialEq> DimensionFilter<T> {
    pub fn all() -> Self {
        Self(None)
    }

    pub fn only(value: T) -> Self {
        Self(Some(value))
    }

    pub fn set(&mut self, value: Option<T>) {
        self.0 = value;
    }

    pub fn selected(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_all(&self) -> bool {
        self.0.is_none()
    }

    pub fn matches(&self, value: &T) -> bool {
        match &self.0 {
            Some(selected) => selected == value,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        text: String,
        kind: u8,
    }

    fn row(text: &str, kind: u8) -> Row {
        Row { text: text.to_string(), kind }
    }

    #[derive(Default)]
    struct RowCriteria {
        search: String,
        kind: DimensionFilter<u8>,
    }

    impl Criteria<Row> for RowCriteria {
        fn accepts(&self, record: &Row) -> bool {
            text_match(&[&record.text], &self.search) && self.kind.matches(&record.kind)
        }

        fn is_default(&self) -> bool {
            self.search.trim().is_empty() && self.kind.is_all()
        }
    }

    #[test]
    fn test_default_criteria_pass_everything() {
        let snapshot = vec![row("Pod scaling event", 1), row("Backup failed", 2)];
        let criteria = RowCriteria::default();
        assert!(criteria.is_default());
        assert_eq!(apply(&snapshot, &criteria), snapshot);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let snapshot = vec![row("Pod scaling event", 1), row("Backup failed", 2)];
        let criteria = RowCriteria {
            search: "pod".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&snapshot, &criteria), vec![row("Pod scaling event", 1)]);
    }

    #[test]
    fn test_and_composition_never_grows_the_view() {
        let snapshot = vec![
            row("Pod scaling event", 1),
            row("Pod restarted", 2),
            row("Backup failed", 2),
        ];
        let search_only = RowCriteria {
            search: "pod".to_string(),
            ..Default::default()
        };
        let search_and_kind = RowCriteria {
            search: "pod".to_string(),
            kind: DimensionFilter::only(2),
        };
        let wide = apply(&snapshot, &search_only);
        let narrow = apply(&snapshot, &search_and_kind);
        assert!(narrow.len() <= wide.len());
        assert_eq!(narrow, vec![row("Pod restarted", 2)]);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_view() {
        let criteria = RowCriteria {
            search: "anything".to_string(),
            ..Default::default()
        };
        assert!(apply(&Vec::<Row>::new(), &criteria).is_empty());
    }

    #[test]
    fn test_blank_search_always_passes() {
        assert!(text_match(&["whatever"], ""));
        assert!(text_match(&["whatever"], "   "));
        assert!(!text_match(&["whatever"], "missing"));
    }
}
