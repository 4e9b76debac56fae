pub mod app;
pub mod canvas;
pub mod frames;
pub mod icons;
pub mod theme;
