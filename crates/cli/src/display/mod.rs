mod console;

pub use console::{Console, Quiet, print_report};
