// Unit tests for domain models

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::domain::errors::*;
    use crate::domain::model::*;

    fn secs(value: u32) -> ClipDuration {
        ClipDuration::from_secs(value).unwrap()
    }

    #[test]
    fn test_clip_duration_rejects_zero() {
        assert!(matches!(ClipDuration::from_secs(0), Err(DomainError::BadArgs(_))));
        assert_eq!(secs(1).as_secs(), 1);
        assert_eq!(secs(10).to_string(), "10");
    }

    #[test]
    fn test_processing_request_valid() {
        let request = ProcessingRequest::new(
            "in.mp4",
            "out.mkv",
            "Hello",
            secs(5),
            Some(PathBuf::from("/fonts/a.ttf")),
        )
        .unwrap();

        assert_eq!(request.input, PathBuf::from("in.mp4"));
        assert_eq!(request.output, PathBuf::from("out.mkv"));
        assert_eq!(request.text, "Hello");
        assert_eq!(request.duration.as_secs(), 5);
        assert_eq!(request.font_path(), Some(PathBuf::from("/fonts/a.ttf").as_path()));
    }

    #[test]
    fn test_processing_request_allows_empty_text() {
        let request = ProcessingRequest::new("in.mp4", "out.mp4", "", secs(1), None).unwrap();
        assert!(request.text.is_empty());
        assert!(request.font_path().is_none());
    }

    #[test]
    fn test_processing_request_rejects_bad_paths() {
        assert!(ProcessingRequest::new("", "out.mp4", "x", secs(1), None).is_err());
        assert!(ProcessingRequest::new("in.mp4", "", "x", secs(1), None).is_err());
        assert!(ProcessingRequest::new("same.mp4", "same.mp4", "x", secs(1), None).is_err());
        assert!(ProcessingRequest::new("in.mp4", "out.mp4", "x", secs(1), Some(PathBuf::new())).is_err());
    }

    #[test]
    fn test_default_style_matches_overlay_policy() {
        let style = DrawtextStyle::default();
        assert_eq!(style.font_color, "white");
        assert_eq!(style.font_size, 32);
        assert!(style.box_enabled);
        assert_eq!(style.box_color, "black@0.4");
        assert_eq!(style.box_border_width, 10);
        assert_eq!(style.margin, 20);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_style_validation() {
        let mut style = DrawtextStyle::default();
        style.font_size = 0;
        assert!(matches!(style.validate(), Err(DomainError::InvalidConfig(_))));

        let mut style = DrawtextStyle::default();
        style.font_color = "  ".to_string();
        assert!(style.validate().is_err());

        // An empty box colour only matters when the box is drawn
        let mut style = DrawtextStyle::default();
        style.box_color.clear();
        assert!(style.validate().is_err());
        style.box_enabled = false;
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tool.program, DEFAULT_FFMPEG_PROGRAM);
        assert_eq!(config.defaults.text, DEFAULT_WATERMARK_TEXT);
        assert_eq!(config.defaults.duration, DEFAULT_DURATION_SECS);
        assert_eq!(config.defaults.font, Some(PathBuf::from(DEFAULT_FONT_PATH)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_app_config_validation() {
        let mut config = AppConfig::default();
        config.tool.program = String::new();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.defaults.duration = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dot_prefixed_output_matches_input() {
        let err = ProcessingRequest::new("./clip.mp4", "clip.mp4", "x", secs(1), None).unwrap_err();
        assert!(matches!(err, DomainError::BadArgs(_)));
        assert!(ProcessingRequest::new("dir/./clip.mp4", "dir/clip.mp4", "x", secs(1), None).is_err());
        assert!(ProcessingRequest::new("clip.mp4", "out/clip.mp4", "x", secs(1), None).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_font_path_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let font = PathBuf::from(OsStr::from_bytes(b"/f/\xffa.ttf"));
        let err = ProcessingRequest::new("in.mp4", "out.mp4", "x", secs(1), Some(font)).unwrap_err();
        assert!(matches!(err, DomainError::BadArgs(_)));
    }

    #[test]
    fn test_style_colors_cannot_inject_options() {
        let mut style = DrawtextStyle::default();
        style.box_color = "black@0.4:x=0".to_string();
        assert!(matches!(style.validate(), Err(DomainError::InvalidConfig(_))));

        let mut style = DrawtextStyle::default();
        style.font_color = "white'".to_string();
        assert!(style.validate().is_err());

        let mut style = DrawtextStyle::default();
        style.font_color = "0xFF0000@0.5".to_string();
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_empty_default_font_is_invalid_config() {
        let mut config = AppConfig::default();
        config.defaults.font = Some(PathBuf::new());
        assert!(matches!(config.validate(), Err(DomainError::InvalidConfig(_))));

        config.defaults.font = None;
        assert!(config.validate().is_ok());
    }
}
