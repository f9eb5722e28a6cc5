use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// 分页列表查询参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page_number: i64,
    #[serde(default = "default_size")]
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    pub fn with_organization(mut self, organization_id: Option<i64>) -> Self {
        self.organization_id = organization_id;
        self
    }

    /// 空白搜索词视为无搜索
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            organization_id: None,
            search: None,
        }
    }
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

// 分页列表响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default = "default_page")]
    pub page_number: i64,
    #[serde(default = "default_size")]
    pub page_size: i64,
    #[serde(default)]
    pub total_pages: i64,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_number: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_skips_empty_filters() {
        let query = ListQuery::page(2, 20).with_search("   ");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({ "pageNumber": 2, "pageSize": 20 }));
    }

    #[test]
    fn test_query_clamps_page() {
        let query = ListQuery::page(0, -5);
        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn test_response_defaults_missing_fields() {
        let page: PaginatedResponse<i64> =
            serde_json::from_str(r#"{"items":[1,2],"totalCount":12,"totalPages":2}"#).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.page_number, 1);
        assert!(page.has_next_page());
        assert!(!page.has_previous_page());
    }
}
