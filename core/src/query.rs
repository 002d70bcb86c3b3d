//! List query parameters.

use serde::Deserialize;

/// Sort direction over `position`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only a case-insensitive `"desc"` selects descending order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(order) if order.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Raw `GET /` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub completed: Option<String>,
    pub order: Option<String>,
}

/// Parsed list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub completed: Option<bool>,
    pub order: SortOrder,
}

impl ListParams {
    /// `completed` filters only when it is exactly `"true"` or `"false"`;
    /// any other value lists everything.
    pub fn filter(&self) -> ListFilter {
        let completed = match self.completed.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };
        ListFilter {
            completed,
            order: SortOrder::parse(self.order.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, SortOrder::Asc)]
    #[case(Some("desc"), SortOrder::Desc)]
    #[case(Some("DESC"), SortOrder::Desc)]
    #[case(Some("Desc"), SortOrder::Desc)]
    #[case(Some("asc"), SortOrder::Asc)]
    #[case(Some("descending"), SortOrder::Asc)]
    #[case(Some(""), SortOrder::Asc)]
    fn sort_order_parse(#[case] raw: Option<&str>, #[case] expected: SortOrder) {
        assert_eq!(SortOrder::parse(raw), expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("true"), Some(true))]
    #[case(Some("false"), Some(false))]
    #[case(Some("TRUE"), None)]
    #[case(Some("1"), None)]
    fn completed_filter(#[case] raw: Option<&str>, #[case] expected: Option<bool>) {
        let params = ListParams {
            completed: raw.map(str::to_string),
            order: None,
        };
        assert_eq!(params.filter().completed, expected);
    }
}
