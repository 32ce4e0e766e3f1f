use super::*;

#[test]
fn default_config_is_valid() {
    PipelineConfig::default().validate().unwrap();
}

#[test]
fn default_config_matches_conventions() {
    let config = PipelineConfig::default();
    assert_eq!(config.target_sample_rate, 44_100);
    assert_eq!(config.inter_segment_delay_sec, 0.1);
}

#[test]
fn zero_sample_rate_rejected() {
    let config = PipelineConfig {
        target_sample_rate: 0,
        ..PipelineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn negative_delay_rejected() {
    let config = PipelineConfig {
        inter_segment_delay_sec: -0.1,
        ..PipelineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn zero_bounds_rejected() {
    let config = PipelineConfig {
        max_segment_words: 0,
        ..PipelineConfig::default()
    };
    assert!(config.validate().is_err());

    let config = PipelineConfig {
        max_segment_chars: 0,
        ..PipelineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn default_render_target_is_vertical() {
    let target = RenderTarget::default();
    target.validate().unwrap();
    assert_eq!((target.width, target.height, target.fps), (1080, 1920, 30));
}

#[test]
fn odd_render_dimensions_rejected() {
    let target = RenderTarget {
        width: 1081,
        ..RenderTarget::default()
    };
    assert!(target.validate().is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = PipelineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: PipelineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.voice, config.voice);
    assert_eq!(back.target_sample_rate, config.target_sample_rate);
}
