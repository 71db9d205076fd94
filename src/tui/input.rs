//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell in the arrow's direction; edges stop it.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let step = match key {
        KeyCode::Up => cursor.offset(-1, 0),
        KeyCode::Down => cursor.offset(1, 0),
        KeyCode::Left => cursor.offset(0, -1),
        KeyCode::Right => cursor.offset(0, 1),
        _ => None,
    };
    step.unwrap_or(cursor)
}

/// Cell selected by a digit key, numbered 1-9 in row-major order.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::CENTER, KeyCode::Up), Position::TOP_CENTER);
        assert_eq!(move_cursor(Position::CENTER, KeyCode::Right), Position::MIDDLE_RIGHT);
        assert_eq!(move_cursor(Position::BOTTOM_LEFT, KeyCode::Down), Position::BOTTOM_LEFT);
        assert_eq!(move_cursor(Position::TOP_LEFT, KeyCode::Left), Position::TOP_LEFT);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::CENTER, KeyCode::Char('x')), Position::CENTER);
    }

    #[test]
    fn test_digits_map_row_major() {
        assert_eq!(digit_position('1'), Some(Position::TOP_LEFT));
        assert_eq!(digit_position('5'), Some(Position::CENTER));
        assert_eq!(digit_position('9'), Some(Position::BOTTOM_RIGHT));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('a'), None);
    }
}
