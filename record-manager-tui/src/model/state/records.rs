//! 记录列表状态

use record_manager_core::Field;

/// 行内编辑器中可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFocus {
    #[default]
    Name,
    Email,
    Phone,
    Save,
}

impl RowFocus {
    /// 下一个控件（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            RowFocus::Name => RowFocus::Email,
            RowFocus::Email => RowFocus::Phone,
            RowFocus::Phone => RowFocus::Save,
            RowFocus::Save => RowFocus::Name,
        }
    }

    /// 上一个控件（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            RowFocus::Name => RowFocus::Save,
            RowFocus::Email => RowFocus::Name,
            RowFocus::Phone => RowFocus::Email,
            RowFocus::Save => RowFocus::Phone,
        }
    }

    /// 对应的文本输入框
    pub fn as_field(self) -> Option<Field> {
        match self {
            RowFocus::Name => Some(Field::Name),
            RowFocus::Email => Some(Field::Email),
            RowFocus::Phone => Some(Field::Phone),
            RowFocus::Save => None,
        }
    }
}

/// 记录列表状态
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 当前选中的记录索引
    pub selected: usize,
    /// 行内编辑器的焦点
    pub editor_focus: RowFocus,
}

impl RecordsState {
    /// 创建新的记录列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表变短后（删除记录）把选中项拉回范围内
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_range() {
        let mut state = RecordsState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.select_last(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn clamp_after_delete() {
        let mut state = RecordsState::new();
        state.select_last(3);
        state.clamp(2);
        assert_eq!(state.selected, 1);
        state.clamp(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn row_focus_cycles() {
        assert_eq!(RowFocus::Save.next(), RowFocus::Name);
        assert_eq!(RowFocus::Name.prev(), RowFocus::Save);
        assert_eq!(RowFocus::Save.as_field(), None);
    }
}
