use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::coords::Vec2;
use crate::input::{InputEvent, Key, KeyState, PointerEvent};

/// Translates winit `WindowEvent`s into engine `InputEvent`s.
///
/// Cursor positions are converted from physical pixels to normalized device
/// coordinates (`[-1, 1]`, +Y up) against the current window size; nothing
/// past this point sees raw screen coordinates.
///
/// winit button events carry no position, so the last converted cursor
/// position is tracked here and attached to `Down`/`Up`.
#[derive(Debug, Default)]
pub struct WinitTranslator {
    cursor: Option<Vec2>,
}

impl WinitTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for events not represented by the input subsystem.
    pub fn translate(&mut self, window: &Window, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos = to_ndc(window, *position);
                self.cursor = Some(pos);
                Some(InputEvent::Pointer(PointerEvent::Moved(pos)))
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                Some(InputEvent::PointerLeft)
            }

            // Only the primary button drives drawing.
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let pos = self.cursor?;
                let ev = match state {
                    ElementState::Pressed => PointerEvent::Down(pos),
                    ElementState::Released => PointerEvent::Up(pos),
                };
                Some(InputEvent::Pointer(ev))
            }

            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                let state = match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                };
                Some(InputEvent::Key { key: map_key(event.physical_key), state })
            }

            _ => None,
        }
    }
}

/// Physical pixels to NDC; the Y axis is flipped so +1 is the top edge.
fn to_ndc(window: &Window, pos: PhysicalPosition<f64>) -> Vec2 {
    let size = window.inner_size();
    let w = size.width.max(1) as f32;
    let h = size.height.max(1) as f32;

    Vec2::new(
        (pos.x as f32 / w) * 2.0 - 1.0,
        (pos.y as f32 / h) * -2.0 + 1.0,
    )
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,

            KeyCode::KeyC => Key::C,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,

            KeyCode::Digit0 => Key::Digit0,
            KeyCode::Digit1 => Key::Digit1,
            KeyCode::Digit2 => Key::Digit2,
            KeyCode::Digit3 => Key::Digit3,
            KeyCode::Digit4 => Key::Digit4,
            KeyCode::Digit5 => Key::Digit5,
            KeyCode::Digit6 => Key::Digit6,
            KeyCode::Digit7 => Key::Digit7,
            KeyCode::Digit8 => Key::Digit8,
            KeyCode::Digit9 => Key::Digit9,

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode has no stable numeric in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
