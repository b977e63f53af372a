//! 表单面板状态

use record_manager_core::Field;

/// 表单面板中可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Phone,
    Gender,
    Submit,
}

impl FormFocus {
    /// 按显示顺序获取所有控件
    #[cfg(test)]
    pub fn all() -> &'static [FormFocus] {
        &[
            FormFocus::Name,
            FormFocus::Email,
            FormFocus::Phone,
            FormFocus::Gender,
            FormFocus::Submit,
        ]
    }

    /// 下一个控件（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Phone,
            FormFocus::Phone => FormFocus::Gender,
            FormFocus::Gender => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    /// 上一个控件（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Email => FormFocus::Name,
            FormFocus::Phone => FormFocus::Email,
            FormFocus::Gender => FormFocus::Phone,
            FormFocus::Submit => FormFocus::Gender,
        }
    }

    /// 对应的文本输入框；性别和按钮没有
    pub fn as_field(self) -> Option<Field> {
        match self {
            FormFocus::Name => Some(Field::Name),
            FormFocus::Email => Some(Field::Email),
            FormFocus::Phone => Some(Field::Phone),
            FormFocus::Gender | FormFocus::Submit => None,
        }
    }
}

/// 表单面板状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 当前获得焦点的控件
    pub focus: FormFocus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(FormFocus::Submit.next(), FormFocus::Name);
        assert_eq!(FormFocus::Name.prev(), FormFocus::Submit);

        let mut focus = FormFocus::Name;
        for _ in FormFocus::all() {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Name);
    }

    #[test]
    fn only_text_inputs_map_to_fields() {
        assert_eq!(FormFocus::Email.as_field(), Some(Field::Email));
        assert_eq!(FormFocus::Gender.as_field(), None);
        assert_eq!(FormFocus::Submit.as_field(), None);
    }
}
