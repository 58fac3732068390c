use log::debug;
use std::path::Path;

pub const HEADER_MARKER: &str = "<!-- partial:header -->";
pub const FOOTER_MARKER: &str = "<!-- partial:footer -->";

/// Read a partial fragment from disk. A missing or unreadable partial is
/// swallowed; the caller leaves the mount unpopulated.
pub fn load_partial<P: AsRef<Path>>(dir: P, name: &str) -> Option<String> {
    let path = dir.as_ref().join(name);
    match std::fs::read_to_string(&path) {
        Ok(body) => Some(body),
        Err(e) => {
            debug!("Partial {} not loaded: {}", path.display(), e);
            None
        }
    }
}

/// Splice header/footer markup at the mount markers. Markers whose partial
/// failed to load are left in place, which a browser treats as an empty
/// mount.
pub fn inject_partials(html: &str, header: Option<&str>, footer: Option<&str>) -> String {
    let mut out = html.to_string();
    if let Some(h) = header {
        out = out.replace(HEADER_MARKER, h);
    }
    if let Some(f) = footer {
        out = out.replace(FOOTER_MARKER, f);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_both_partials() {
        let page = format!("{}\n<main></main>\n{}", HEADER_MARKER, FOOTER_MARKER);
        let out = inject_partials(&page, Some("<header>H</header>"), Some("<footer>F</footer>"));
        assert!(out.starts_with("<header>H</header>"));
        assert!(out.ends_with("<footer>F</footer>"));
        assert!(!out.contains("partial:"));
    }

    #[test]
    fn test_missing_partial_leaves_mount_unpopulated() {
        let page = format!("{}\n<main></main>", HEADER_MARKER);
        let out = inject_partials(&page, None, None);
        assert_eq!(out, page);
    }

    #[test]
    fn test_load_partial_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_partial(dir.path(), "header.html").is_none());
    }

    #[test]
    fn test_load_partial_reads_fragment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("footer.html"), "<footer>F</footer>").unwrap();
        assert_eq!(
            load_partial(dir.path(), "footer.html").as_deref(),
            Some("<footer>F</footer>")
        );
    }
}
