//! Display side of the trainer

pub mod presenter;
pub mod render;

pub use presenter::DisplayPresenter;
pub use render::render;
