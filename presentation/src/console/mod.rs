//! Console adapters implementing [`ConsolePort`](promptline_application::ConsolePort)

pub mod stream;
