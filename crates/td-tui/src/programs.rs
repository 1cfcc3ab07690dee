//! Locating helper programs on `PATH`.

use std::env;
use std::path::Path;

/// Whether `program` names an executable file, directly or on `PATH`.
pub fn on_path(program: &str) -> bool {
    if program.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(program).is_file();
    }
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| {
        dir.join(program).is_file() || dir.join(format!("{program}.exe")).is_file()
    })
}

/// The first of `candidates` found on `PATH`.
pub fn first_on_path<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|p| on_path(p))
}
