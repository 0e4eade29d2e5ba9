pub mod bookmark;
pub mod dispatcher;
pub mod handlers;
pub mod host;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod mode;
pub mod settings;
pub mod store;
pub mod suggestion;
