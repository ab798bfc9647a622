//! egui スタイル設定まわりをまとめたモジュール。
//!
//! `MyApp::new` とテーマ切り替え時に呼び出され、選択中のテーマに応じた
//! アプリ全体の見た目（カードベースのミニマルテーマ）を構成します。

use eframe::egui;

use crate::config::ThemeMode;
use crate::ui_theme;

/// グローバルな egui スタイルを選択中のテーマで設定する。
///
/// - 余白や角丸を大きめにとった、カードベースのミニマルテーマ。
/// - テキストスタイルや選択範囲などもここで一括設定する。
/// - 起動時だけでなくトグルのたびに呼ばれるため、毎回そのモードの
///   ベース Visuals から組み立て直す。
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let palette = ui_theme::palette(mode);
    let mut style = (*ctx.style()).clone();

    style.visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    // 余白を大きめに取って呼吸感を出す
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(20.0, 10.0);
    style.spacing.window_margin = egui::Margin::same(20.0);

    let bg_surface = palette.surface_bg;
    let bg_card = palette.card_bg;
    let accent = palette.accent;

    style.visuals.panel_fill = bg_surface;
    style.visuals.extreme_bg_color = palette.input_bg;
    style.visuals.faint_bg_color = bg_card;
    style.visuals.code_bg_color = bg_card;

    style.visuals.window_stroke = egui::Stroke::NONE;

    style.visuals.widgets.noninteractive.bg_fill = bg_card;
    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.border,
    };
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_primary,
    };

    // 大きめの角丸で柔らかさを出す
    style.visuals.window_rounding = egui::Rounding::same(14.0);
    style.visuals.widgets.noninteractive.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.active.rounding = egui::Rounding::same(10.0);

    // インタラクティブ要素（コンボボックスや Reset ボタンなどの標準ウィジェット）
    style.visuals.widgets.inactive.bg_fill = palette.input_bg;
    style.visuals.widgets.inactive.weak_bg_fill = palette.input_bg;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.border,
    };
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_primary,
    };

    style.visuals.widgets.hovered.bg_fill = palette.border;
    style.visuals.widgets.hovered.weak_bg_fill = palette.border;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.border,
    };
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_primary,
    };

    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.active.weak_bg_fill = accent;
    style.visuals.widgets.active.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.active.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.on_accent,
    };

    // 選択範囲
    style.visuals.selection.bg_fill = accent.linear_multiply(0.4);
    style.visuals.selection.stroke = egui::Stroke::NONE;

    // テキストスタイル: 見出しは軽く大きく、本文は読みやすく
    // 論理ピクセルで指定することで DPI スケーリングに対応
    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(24.0));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(14.0));
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(13.0));
    style
        .text_styles
        .insert(egui::TextStyle::Small, egui::FontId::proportional(12.0));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(14.0));

    ctx.set_style(style);
}
