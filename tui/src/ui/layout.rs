use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centers a box of the given percentage size inside `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
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
        .split(vert[1])[1]
}

/// Splits `area` into a `cols`-wide grid of `n` cells, row-major.
///
/// Rows share the height evenly; trailing cells of the last row are dropped.
pub fn grid(area: Rect, cols: u16, n: usize) -> Vec<Rect> {
    let cols = cols.max(1);
    let rows = (n as u16).div_ceil(cols).max(1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, u32::from(rows)); rows as usize])
        .split(area);

    let mut cells = Vec::with_capacity(n);
    'rows: for row in row_areas.iter() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, u32::from(cols)); cols as usize])
            .split(*row);

        for cell in col_areas.iter() {
            if cells.len() == n {
                break 'rows;
            }
            cells.push(*cell);
        }
    }

    cells
}
