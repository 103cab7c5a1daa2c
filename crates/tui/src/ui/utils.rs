//! Geometry helpers shared by the shell components, and the panic boundary
//! section renderers draw inside.

use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

/// Index of the area containing `(x, y)`, provided the point is inside
/// `container` as well.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let point = Position::new(x, y);
    if !container.contains(point) {
        return None;
    }
    areas.iter().position(|area| area.contains(point))
}

/// Converts a travel offset in percent of `extent` to whole cells.
pub fn percent_to_cells(percent: f32, extent: u16) -> i32 {
    (percent / 100.0 * f32::from(extent)).round() as i32
}

/// Copies `source` into `target`, with the source's top-left corner placed at
/// `clip`'s origin shifted by `(dx, dy)`. Cells landing outside `clip` are
/// discarded.
pub fn blit(source: &Buffer, target: &mut Buffer, clip: Rect, dx: i32, dy: i32) {
    let src = source.area;
    for row in 0..src.height {
        let y = i32::from(clip.y) + dy + i32::from(row);
        if y < i32::from(clip.y) || y >= i32::from(clip.bottom()) {
            continue;
        }
        for column in 0..src.width {
            let x = i32::from(clip.x) + dx + i32::from(column);
            if x < i32::from(clip.x) || x >= i32::from(clip.right()) {
                continue;
            }
            let (Some(cell), Ok(x), Ok(y)) = (source.cell((src.x + column, src.y + row)), u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if let Some(slot) = target.cell_mut((x, y)) {
                *slot = cell.clone();
            }
        }
    }
}

thread_local! {
    static IN_RENDER_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

/// Runs `draw`, catching a panic instead of unwinding further. The panic hook
/// checks [`in_render_boundary`] and leaves the terminal alone meanwhile.
pub fn render_boundary<R>(draw: impl FnOnce() -> R) -> thread::Result<R> {
    let previous = IN_RENDER_BOUNDARY.replace(true);
    let result = catch_unwind(AssertUnwindSafe(draw));
    IN_RENDER_BOUNDARY.set(previous);
    result
}

/// Whether the current thread is inside [`render_boundary`].
pub fn in_render_boundary() -> bool {
    IN_RENDER_BOUNDARY.get()
}
