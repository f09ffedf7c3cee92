pub mod error;
pub mod settings;
pub mod encode;
pub mod save;
pub mod holder;
pub mod layout;
pub mod session;
