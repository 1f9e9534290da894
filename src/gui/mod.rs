pub mod app;
pub mod component;
pub mod slider;
pub mod theme;
