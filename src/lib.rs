#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod export;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod preview;
pub mod raster;
pub mod renderer;
pub mod session;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use element::{Element, ElementType};
pub use export::ExportError;
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use preview::ToolPreview;
pub use raster::RasterSurface;
pub use session::SketchSession;
pub use surface::{DrawSurface, PainterSurface};
pub use tool::Tool;
