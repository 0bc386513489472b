/// Logical keys the game understands. Everything else maps to `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Space,
    Q,
    None,
}
