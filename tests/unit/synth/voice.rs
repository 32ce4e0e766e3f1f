use super::*;

#[test]
fn language_codes_roundtrip() {
    for lang in [
        LanguageId::American,
        LanguageId::British,
        LanguageId::French,
        LanguageId::Japanese,
    ] {
        assert_eq!(LanguageId::from_code(lang.code()).unwrap(), lang);
    }
    assert!(LanguageId::from_code('x').is_err());
}

#[test]
fn voice_language_is_inferred_from_prefix() {
    assert_eq!(
        VoiceId::new("af_sarah").language().unwrap(),
        LanguageId::American
    );
    assert_eq!(
        VoiceId::new("bm_george").language().unwrap(),
        LanguageId::British
    );
    assert!(VoiceId::new("zz_nobody").language().is_err());
    assert!(VoiceId::new("").language().is_err());
}

#[test]
fn default_voice_is_in_the_catalog() {
    let voice = VoiceId::default();
    let language = voice.language().unwrap();
    assert!(known_voices(language).contains(&voice.as_str()));
}

#[test]
fn known_voices_share_their_language_prefix() {
    for lang in [LanguageId::American, LanguageId::British] {
        for name in known_voices(lang) {
            assert_eq!(VoiceId::new(*name).language().unwrap(), lang);
        }
    }
}

#[test]
fn native_rate_constant() {
    assert_eq!(KOKORO_NATIVE_SAMPLE_RATE, 24_000);
}
