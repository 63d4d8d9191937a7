//! Plain-text frames of the tank.

use aquasim_world::{Tank, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Draw the tank with its walls and a temperature readout.
///
/// Each cell is `GLYPH_WIDTH` x `GLYPH_HEIGHT` characters and shows only the
/// first item in its bucket.
pub fn render(tank: &Tank) -> String {
    let columns = GLYPH_WIDTH * tank.width() as usize;
    let rows = GLYPH_HEIGHT * tank.height() as usize;
    let mut canvas = vec![vec![' '; columns]; rows];

    for (pos, _) in tank.iter_cells() {
        let Some(item) = tank.top_occupant(pos) else {
            continue;
        };
        let top = GLYPH_HEIGHT * pos.y as usize;
        let left = GLYPH_WIDTH * pos.x as usize;
        for (dy, line) in item.glyph().iter().enumerate() {
            for (dx, ch) in line.chars().take(GLYPH_WIDTH).enumerate() {
                canvas[top + dy][left + dx] = ch;
            }
        }
    }

    let mut frame = format!("|{}|\n", "~".repeat(columns));
    for row in canvas {
        frame.push('|');
        frame.extend(row);
        frame.push_str("|\n");
    }
    frame.push_str(&format!("+{}+\n", "-".repeat(columns)));
    frame.push_str(&format!(
        "tank temperature is {:.1} degrees",
        tank.temperature().current()
    ));
    frame
}
