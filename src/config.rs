/// Section tracing is compiled in when `SEGMENT_TRACE` is set at build time.
pub fn section_tracing_enabled() -> bool {
    tracing_flag(option_env!("SEGMENT_TRACE"))
}

fn tracing_flag(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        Some("") | Some("0") | None => false,
        Some(value) => !value.eq_ignore_ascii_case("false"),
    }
}

/// Root-relative path for a static asset served next to the bundle.
pub fn asset_url(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_is_off_unless_flag_is_truthy() {
        assert!(!tracing_flag(None));
        assert!(!tracing_flag(Some("")));
        assert!(!tracing_flag(Some("0")));
        assert!(!tracing_flag(Some(" FALSE ")));
        assert!(tracing_flag(Some("1")));
        assert!(tracing_flag(Some("debug")));
    }

    #[test]
    fn asset_paths_are_root_relative() {
        assert_eq!(asset_url("PictureBox/4.jpg"), "/PictureBox/4.jpg");
        assert_eq!(asset_url("/PictureBox/17.jpg"), "/PictureBox/17.jpg");
        assert_eq!(asset_url("feature.mp4"), "/feature.mp4");
    }
}
