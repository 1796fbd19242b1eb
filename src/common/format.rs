use colored::*;
use std::path::Path;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Render a byte count the way humans read it
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < KIB {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Size string colored by how much space it represents: red for
/// gigabytes, yellow for hundreds of megabytes
pub fn human_size_colored(bytes: u64) -> ColoredString {
    let text = human_size(bytes);
    if bytes >= GIB {
        text.red().bold()
    } else if bytes >= 100 * MIB {
        text.yellow()
    } else {
        text.normal()
    }
}

/// Pluralized file count for report lines
pub fn file_count(count: usize) -> String {
    match count {
        1 => "1 file".to_string(),
        n => format!("{} files", n),
    }
}

/// Shorten a path for display by folding the home directory into ~
pub fn display_path(path: &Path) -> String {
    let shortened = dirs::home_dir()
        .and_then(|home| path.strip_prefix(home).ok().map(|rest| rest.to_path_buf()));

    match shortened {
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}
