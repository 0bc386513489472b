use crate::key::Key;
use crate::screen::Screen;

/// A game the frontend can drive.
///
/// Each frame the frontend polls input and forwards it through
/// `handle_key_event`, then calls `update` once and `render` once, and
/// finally presents the frame. `render` must not change game state.
pub trait App {
    fn init(&mut self);
    fn update(&mut self);
    fn render(&self, screen: &mut Screen);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    /// Called once when the frontend stops, either because `should_exit`
    /// returned true or because the window was closed.
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn title(&self) -> String;
}
