pub mod display;
pub mod engine;
pub mod events;
pub mod history;
pub mod mode;
pub mod number;
pub mod resources;
pub mod util;
