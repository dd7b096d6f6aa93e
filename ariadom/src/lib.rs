pub mod aria;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod query;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use aria::{Aria, AriaSort, Role};
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{apply_focus, collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use render::{render, Frame, Line, Span};
pub use terminal::Terminal;
pub use types::*;
