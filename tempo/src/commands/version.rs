/// Get the version string for tempo and libtempo
pub fn get_version_string() -> String {
    format!(
        "tempo {}\nlibtempo {}",
        env!("CARGO_PKG_VERSION"),
        libtempo::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
