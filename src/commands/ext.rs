//! `natsort-ls ext` command.

use crate::extension::get_extension;

/// Execute the `ext` command, printing one extension per file name.
pub fn run(filenames: &[String]) {
    for name in filenames {
        println!("{}", get_extension(name));
    }
}
