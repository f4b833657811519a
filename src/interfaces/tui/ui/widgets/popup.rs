//! 通用弹窗容器
//!
//! 提供居中弹窗的辅助功能

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::{PopupSize, colors};

/// 弹窗容器
pub struct Popup<'a> {
    /// 弹窗标题
    title: &'a str,
    /// 标题与边框颜色
    color: Color,
    /// 尺寸配置
    size: PopupSize,
    /// 内边距
    margin: Margin,
}

impl<'a> Popup<'a> {
    /// 创建新的弹窗
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: colors::PRIMARY,
            size,
            margin: Margin::new(2, 1),
        }
    }

    /// 设置主题颜色（同时设置标题和边框颜色）
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// 设置内边距
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// 渲染弹窗并返回内部区域
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size.width, self.size.height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(
                Style::default()
                    .fg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color));
        frame.render_widget(block, popup_area);

        popup_area.inner(self.margin)
    }
}

/// 创建居中矩形
///
/// 根据百分比在给定区域中创建居中的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 10);
    }
}
