//! UI テーマ定数（カラーパレット・フォントサイズ・レイアウト）。
//!
//! - ライト / ダーク両テーマに対応するため、色は `Palette` 構造体にまとめ、
//!   描画側は `crate::ui_theme::palette(mode)` で現在のテーマの色を引きます。
//! - フォントサイズとレイアウトはテーマ非依存の定数です。

use eframe::egui::Color32;

use crate::config::ThemeMode;

/// テーマごとのカラーパレット。
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// サーフェス背景（ウィンドウ全体）
    pub surface_bg: Color32,
    /// カード背景
    pub card_bg: Color32,
    /// 入力欄の背景
    pub input_bg: Color32,
    /// カード・入力欄の枠線
    pub border: Color32,
    /// プライマリテキスト
    pub text_primary: Color32,
    /// セカンダリテキスト（ラベル・補足）
    pub text_secondary: Color32,
    /// アクセント（Calculate ボタン・価格表示）
    pub accent: Color32,
    /// アクセント背景上のテキスト
    pub on_accent: Color32,
    /// エラーメッセージ用の赤
    pub danger: Color32,
    /// コピー完了の確認表示用の緑
    pub success: Color32,
}

/// ライトテーマ（初回起動時の既定）。
pub const LIGHT: Palette = Palette {
    surface_bg: Color32::from_rgb(0xF8, 0xFA, 0xFC),
    card_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    input_bg: Color32::from_rgb(0xF1, 0xF5, 0xF9),
    border: Color32::from_rgb(0xE2, 0xE8, 0xF0),
    text_primary: Color32::from_rgb(0x0F, 0x17, 0x2A),
    text_secondary: Color32::from_rgb(0x64, 0x74, 0x8B),
    accent: Color32::from_rgb(0x0D, 0x94, 0x88),
    on_accent: Color32::WHITE,
    danger: Color32::from_rgb(0xDC, 0x26, 0x26),
    success: Color32::from_rgb(0x16, 0xA3, 0x4A),
};

/// ダークテーマ。
pub const DARK: Palette = Palette {
    surface_bg: Color32::from_rgb(0x0F, 0x17, 0x2A),
    card_bg: Color32::from_rgb(0x1E, 0x29, 0x3B),
    input_bg: Color32::from_rgb(0x33, 0x41, 0x55),
    border: Color32::from_rgb(0x33, 0x41, 0x55),
    text_primary: Color32::from_rgb(0xF1, 0xF5, 0xF9),
    text_secondary: Color32::from_rgb(0x94, 0xA3, 0xB8),
    accent: Color32::from_rgb(0x2D, 0xD4, 0xBF),
    on_accent: Color32::from_rgb(0x0F, 0x17, 0x2A),
    danger: Color32::from_rgb(0xF8, 0x71, 0x71),
    success: Color32::from_rgb(0x4A, 0xDE, 0x80),
};

/// 屋根勾配図の強調ストローク色（ティール）。両テーマ共通の固定色。
pub const PITCH_ACCENT: Color32 = Color32::from_rgb(0x2D, 0xD4, 0xBF);

/// 現在のテーマモードに対応するパレットを返す。
pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// フォントサイズ（論理ピクセル）
///
/// eframe/egui は DPI スケーリングを自動で行うため、
/// ここでは「論理ピクセル」で指定すれば FHD/4K どちらでも適切なサイズになる。
pub mod font_sizes {
    /// ヘッダーのアプリタイトル
    pub const TITLE: f32 = 22.0;
    /// セクション見出し（Calculation Results など）
    pub const SECTION: f32 = 16.0;
    /// 本文
    pub const BODY: f32 = 14.0;
    /// ラベル
    pub const LABEL: f32 = 12.0;
}

/// レイアウト定数（論理ピクセル）
pub mod layout {
    /// カード間のギャップ
    pub const CARD_GAP: f32 = 12.0;
    /// パネルマージン
    pub const PANEL_MARGIN: f32 = 16.0;
    /// カード内パディング
    pub const CARD_PADDING: f32 = 16.0;
    /// カード角丸
    pub const CARD_ROUNDING: f32 = 10.0;
    /// 入力欄の高さ
    pub const INPUT_HEIGHT: f32 = 32.0;
    /// ボタンの高さ
    pub const BUTTON_HEIGHT: f32 = 32.0;
    /// カード高さ計算時のオフセット
    pub const CARD_HEIGHT_OFFSET: f32 = 32.0;
    /// 中サイズ入力欄の標準幅
    pub const INPUT_WIDTH_MEDIUM: f32 = 150.0;
    /// 勾配図カードの描画領域の高さ
    pub const PITCH_CARD_HEIGHT: f32 = 220.0;
}
