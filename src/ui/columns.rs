use std::collections::BTreeSet;

/// 表格列显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    defaults: BTreeSet<String>,
    visible: BTreeSet<String>,
}

impl ColumnVisibility {
    pub fn new<I, S>(default_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let defaults: BTreeSet<String> = default_columns.into_iter().map(Into::into).collect();
        Self {
            visible: defaults.clone(),
            defaults,
        }
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.visible.contains(column)
    }

    pub fn show(&mut self, column: &str) {
        self.visible.insert(column.to_string());
    }

    pub fn hide(&mut self, column: &str) {
        self.visible.remove(column);
    }

    /// 切换后返回新状态
    pub fn toggle(&mut self, column: &str) -> bool {
        if self.visible.remove(column) {
            false
        } else {
            self.visible.insert(column.to_string());
            true
        }
    }

    pub fn reset(&mut self) {
        self.visible = self.defaults.clone();
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(String::as_str)
    }
}
