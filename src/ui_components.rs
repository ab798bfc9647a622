//! 再利用可能な UI コンポーネント／ヘルパー関数。
//!
//! - テキスト入力欄やカードフレーム、ラベル装飾などをまとめています。
//! - 色はテーマ依存のため、各ヘルパーは現在の `Palette` を受け取ります。

use eframe::egui;

use crate::ui_theme::{font_sizes, layout, Palette};

/// 縦中央揃えのテキスト入力欄を作成
pub fn styled_text_edit(text: &mut String) -> egui::TextEdit<'_> {
    egui::TextEdit::singleline(text).font(egui::TextStyle::Body).margin(egui::Margin {
        left: 8.0,
        right: 8.0,
        top: 11.0,
        bottom: 5.0,
    })
}

/// セクション見出しラベルを作成
pub fn section_title(text: &str, palette: &Palette) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::SECTION)
        .color(palette.text_primary)
}

/// フィールドラベルを作成
pub fn field_label(text: &str, palette: &Palette) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::LABEL)
        .color(palette.text_secondary)
}

/// 補足テキスト（空状態の案内・カテゴリ説明など）を作成
pub fn muted_note(text: &str, palette: &Palette) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::BODY)
        .color(palette.text_secondary)
}

/// カードフレームを作成
///
/// ライトテーマではカードと背景の明度差が小さいため、1px の枠線も描く。
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.card_bg)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(egui::Rounding::same(layout::CARD_ROUNDING))
        .inner_margin(egui::Margin::same(layout::CARD_PADDING))
}
