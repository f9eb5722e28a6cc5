use crate::errors::{Result, TrackademyError};
use crate::models::PaginatedResponse;

/// 一次加载请求的凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// 分页列表状态
///
/// 每次 `begin_load` 发放新的凭据，只有最新凭据对应的结果会被应用，
/// 先发后到的旧响应直接丢弃。
#[derive(Debug, Clone)]
pub struct ListState<T> {
    page: PaginatedResponse<T>,
    loading: bool,
    error: Option<TrackademyError>,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            page: PaginatedResponse::default(),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// 应用加载结果，返回是否被采用
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PaginatedResponse<T>>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale list response (ticket {})", ticket.0);
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        true
    }

    pub fn items(&self) -> &[T] {
        &self.page.items
    }

    pub fn page(&self) -> &PaginatedResponse<T> {
        &self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&TrackademyError> {
        self.error.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.page.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&str>) -> PaginatedResponse<String> {
        PaginatedResponse {
            total_count: items.len() as i64,
            items: items.into_iter().map(String::from).collect(),
            page_number: 1,
            page_size: 10,
            total_pages: 1,
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(page(vec!["new"]))));
        assert!(!state.finish_load(first, Ok(page(vec!["old"]))));

        assert_eq!(state.items(), ["new".to_string()]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_error_keeps_previous_items() {
        let mut state = ListState::new();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(page(vec!["a", "b"])));

        let ticket = state.begin_load();
        assert!(state.is_loading());
        state.finish_load(ticket, Err(TrackademyError::network("timeout")));

        assert_eq!(state.items().len(), 2);
        assert_eq!(state.error().map(|e| e.code()), Some("E003"));
    }
}
