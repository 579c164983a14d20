pub mod io;
pub mod logging;
pub mod model;
pub mod store;
pub mod tui;
pub mod util;
pub mod view;
