//! Core of the bloom circular selector: a button that expands into a ring
//! of items while pressed and reports the item under the pointer when
//! released. Everything here is host independent; a host adapter supplies
//! layout, pointer events, frame timestamps and a [`render::Surface`].

pub mod animation;
pub mod button;
pub mod geometry;
pub mod icon;
pub mod input;
pub mod item;
pub mod macros;
pub mod render;
pub mod style;
pub mod tilt;

pub use button::ChoiceButton;
pub use geometry::{Insets, Point, Rect, Size};
pub use icon::IconName;
pub use input::{EventResponse, PointerEvent, PointerKind};
pub use item::{Item, Label};
pub use style::{ButtonStyle, Color, DisplayScale, ItemConfig, StyleConfig};
