pub mod root;
pub mod screens;
pub mod session;
pub mod stack;
pub mod tabs;
