use ratatui::prelude::*;

/// A rectangle centered in `area`, sized as a percentage of it
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// A rectangle of at most `width` x `height` centered in `area`
pub fn center_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(center_fixed(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(center_fixed(area, 50, 50), area);
    }

    #[test]
    fn test_center_popup_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = center_popup(area, 60, 50);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}
