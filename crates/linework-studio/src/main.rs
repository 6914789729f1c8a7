use anyhow::Result;
use winit::dpi::LogicalSize;

use linework_engine::editor::{Editor, Tool};
use linework_engine::input::{InputEvent, Key, KeyState, PointerEvent};
use linework_engine::logging::{LoggingConfig, init_logging};
use linework_engine::paint::Rgb;
use linework_engine::window::{App, AppControl, FrameOutput, Runtime, RuntimeConfig};

/// Swatches cycled with Space. Hex strings go through the same parser a
/// color-picker input would use.
const PALETTE: [&str; 6] = [
    "#ffffff", "#ff4040", "#40ff40", "#4080ff", "#ffd040", "#ff40ff",
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!("linework studio");
    println!();
    println!("  tools    L line   S square   R rectangle   P polygon   G resize");
    println!("  polygon  3-9 set side count, click to place nodes");
    println!("  colors   Space cycles the palette");
    println!("  scene    C clear   Esc cancel the shape in progress");
    println!();

    Runtime::run(
        RuntimeConfig {
            title: "linework studio".to_string(),
            initial_size: LogicalSize::new(900.0, 900.0),
        },
        EditorApp::new(),
    )
}

struct EditorApp {
    editor: Editor,
    palette_index: usize,
}

impl EditorApp {
    fn new() -> Self {
        let mut editor = Editor::new();
        editor.set_color_hex(PALETTE[0]);
        Self { editor, palette_index: 0 }
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::L => self.select_tool(Tool::Line),
            Key::S => self.select_tool(Tool::Square),
            Key::R => self.select_tool(Tool::Rectangle),
            Key::P => self.select_tool(Tool::Polygon),
            Key::G => self.select_tool(Tool::Resize),

            Key::C => {
                self.editor.clear();
                log::info!("canvas cleared");
            }

            Key::Escape => self.editor.cancel(),

            Key::Space => {
                self.palette_index = (self.palette_index + 1) % PALETTE.len();
                self.editor.set_color_hex(PALETTE[self.palette_index]);
                log::info!("color {}", self.editor.color().to_hex());
            }

            _ => {
                if let Some(d) = key.digit().filter(|&d| d >= 3) {
                    self.editor.set_polygon_sides(d);
                    log::info!("polygon sides: {d}");
                }
            }
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        self.editor.set_tool(tool);
        log::info!("tool: {tool:?}");
    }
}

impl App for EditorApp {
    fn on_event(&mut self, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::Pointer(ev) => {
                self.editor.handle_pointer(*ev);
                if matches!(ev, PointerEvent::Up(_)) {
                    log::debug!("{} object(s) committed", self.editor.scene().committed().len());
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed } => self.on_key(*key),
            InputEvent::Key { .. } => {}

            InputEvent::PointerLeft => {}
        }

        AppControl::Continue
    }

    fn frame(&mut self) -> FrameOutput {
        FrameOutput {
            stream: self.editor.stream(),
            clear: Rgb::BLACK,
        }
    }
}
