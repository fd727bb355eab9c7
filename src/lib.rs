pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod meta;
pub mod playlist;
pub mod scan;
pub mod shell;

pub use controller::AppController;
pub use error::Error;
pub use playlist::Playlist;
