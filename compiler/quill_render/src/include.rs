//! Include file lookup.

use std::fs::File;
use std::path::{Path, PathBuf};

/// The first `dir/name` that exists and can be opened, searching `dirs` in
/// order.
pub fn find_include<'a>(dirs: impl IntoIterator<Item = &'a Path>, name: &str) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file() && File::open(path).is_ok())
}
