//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // 左侧表单
            Constraint::Percentage(60), // 右侧记录列表
        ])
        .split(content_area);

    let form_area = render_panel(frame, columns[0], " Form ", app.focus.is_form());
    components::form_panel::render(app, frame, form_area);

    let records_area = render_panel(frame, columns[1], " Records ", app.focus.is_records());
    components::record_list::render(app, frame, records_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(concat!(" Record Manager v", env!("CARGO_PKG_VERSION")))
        .style(Styles::bar());
    frame.render_widget(title, area);
}

/// 渲染面板边框，返回内部区域
fn render_panel(frame: &mut Frame, area: Rect, title: &str, is_focused: bool) -> Rect {
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused))
        .style(Style::default().bg(colors().bg));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    inner_area
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{add_record, draw_to_string, test_app};
    use record_manager_core::Gender;

    #[test]
    fn draws_both_panels_and_alert_on_top() {
        let mut app = test_app();
        add_record(&mut app, "Ann", "ann@x.com", Gender::Female);
        app.form.begin_edit(0).unwrap();
        app.modal.show_alert("Alert", "Missing Values");

        let screen = draw_to_string(140, 40, |frame| render(&app, frame));

        assert!(screen.contains("Record Manager"));
        assert!(screen.contains("To-do List"));
        assert!(screen.contains("[ Update ]"));
        assert!(screen.contains("Submitted Records:"));
        assert!(screen.contains("[ Save ]"));
        assert!(screen.contains("Missing Values"));
    }
}
