use yane_mitsumori::config::{load_or_create_config_at, save_config_to, Config, ThemeMode};

/// トグルがライト / ダークを往復することを確認する。
#[test]
fn theme_toggle_round_trip() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);

    assert!(!ThemeMode::Light.is_dark());
    assert!(ThemeMode::Dark.is_dark());
}

/// 既定のテーマがライトであることを確認する。
#[test]
fn default_theme_is_light() {
    let config = Config::default();
    assert_eq!(config.theme, ThemeMode::Light);
}

/// テーマが小文字の文字列として TOML に保存されることを確認する。
#[test]
fn theme_serializes_as_lowercase() {
    let config = Config {
        theme: ThemeMode::Dark,
    };
    let toml_str = toml::to_string_pretty(&config).expect("serialize should succeed");
    assert!(
        toml_str.contains("theme = \"dark\""),
        "serialized config should contain lowercase theme, got: {toml_str}"
    );
}

/// 保存済みの設定ファイル内容が読み戻せることを確認する。
#[test]
fn theme_deserializes_from_toml() {
    let cases: &[(&str, ThemeMode)] = &[
        ("theme = \"light\"", ThemeMode::Light),
        ("theme = \"dark\"", ThemeMode::Dark),
    ];

    for &(input, expected) in cases {
        let config: Config = toml::from_str(input).expect("parse should succeed");
        assert_eq!(config.theme, expected, "parsed theme for {input:?}");
    }
}

/// theme キーが無い設定ファイルでも既定のライトで読めることを確認する。
#[test]
fn missing_theme_falls_back_to_light() {
    let config: Config = toml::from_str("").expect("empty config should parse");
    assert_eq!(config.theme, ThemeMode::Light);
}

/// 設定ファイルへの保存と再読み込みでテーマが保持されることを確認する。
#[test]
fn settings_file_round_trip_preserves_theme() {
    let path = std::env::temp_dir().join(format!(
        "yane_mitsumori_roundtrip_{}.toml",
        std::process::id()
    ));

    let config = Config {
        theme: ThemeMode::Dark,
    };
    save_config_to(&config, &path).expect("save should succeed");
    let loaded = load_or_create_config_at(&path).expect("load should succeed");
    assert_eq!(
        loaded.theme,
        ThemeMode::Dark,
        "theme should survive a save/load round trip"
    );

    std::fs::remove_file(&path).ok();
}

/// 設定ファイルが無い場合、ライト既定で新規作成されることを確認する。
#[test]
fn missing_settings_file_is_created_with_light_default() {
    let path = std::env::temp_dir().join(format!(
        "yane_mitsumori_defaults_{}.toml",
        std::process::id()
    ));
    std::fs::remove_file(&path).ok();

    let config = load_or_create_config_at(&path).expect("load should create defaults");
    assert_eq!(config.theme, ThemeMode::Light);
    assert!(path.exists(), "default settings should be written to disk");

    std::fs::remove_file(&path).ok();
}
