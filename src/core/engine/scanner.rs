use std::collections::HashSet;

/// Length of the window extracted in each scan direction.
pub const RUN_LENGTH: usize = 4;

// Scan directions as (row step, col step): horizontal, vertical,
// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(usize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Collect every 4-character window readable from some cell in one of the
/// four directions, deduplicated by value.
///
/// Windows are recorded whether or not their characters repeat; the pattern
/// filter lives in the classifier. Total over any input: rows smaller than
/// the window in a given direction simply contribute no candidates there.
pub fn scan(rows: &[String]) -> HashSet<String> {
    let mut windows = HashSet::new();

    for row in 0..rows.len() {
        for col in 0..rows[row].len() {
            for (row_step, col_step) in DIRECTIONS {
                if let Some(window) = read_window(rows, row, col, row_step, col_step) {
                    windows.insert(window);
                }
            }
        }
    }

    windows
}

// Returns None as soon as any cell of the span falls out of bounds.
fn read_window(
    rows: &[String],
    row: usize,
    col: usize,
    row_step: usize,
    col_step: isize,
) -> Option<String> {
    let mut window = String::with_capacity(RUN_LENGTH);
    for step in 0..RUN_LENGTH {
        let r = row + step * row_step;
        let c = col.checked_add_signed(step as isize * col_step)?;
        let cell = *rows.get(r)?.as_bytes().get(c)?;
        window.push(cell as char);
    }
    Some(window)
}
