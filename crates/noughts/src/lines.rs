//! Winning line enumeration for square boards.

/// Enumerates every winning line for a board of the given side length.
///
/// Produces `side` rows, `side` columns, and the two full diagonals -
/// `2 * side + 2` lines in total, each of length `side`, over row-major
/// cell indices.
pub fn winning_lines(side: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * side + 2);

    for row in 0..side {
        lines.push((row * side..(row + 1) * side).collect());
    }
    for col in 0..side {
        lines.push((0..side).map(|row| row * side + col).collect());
    }
    // Top-left to bottom-right, then top-right to bottom-left.
    lines.push((0..side).map(|step| step * (side + 1)).collect());
    lines.push((1..=side).map(|step| step * (side - 1)).collect());

    lines
}
