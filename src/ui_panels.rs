//! メイン画面のパネル描画ロジック。
//!
//! - ヘッダー（タイトルとテーマトグル）と、フォーム / 勾配図 / 結果カードの
//!   2 カラム配置をこのファイルに集約しています。
//! - すべて `&mut MyApp` を引数に取り、状態は `MyApp` にだけ持たせます。

use eframe::egui;

use crate::app::MyApp;
use crate::config::ThemeMode;
use crate::ui_panel_form::render_form_card;
use crate::ui_panel_pitch::render_pitch_card;
use crate::ui_panel_results::render_results_card;
use crate::ui_theme::{self, font_sizes, layout};

/// ヘッダーパネルを描画
pub fn render_header(app: &mut MyApp, ctx: &egui::Context) {
    let palette = ui_theme::palette(app.config.theme);

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(palette.surface_bg)
                .inner_margin(egui::Margin::symmetric(24.0, 16.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // タイトル
                ui.label(
                    egui::RichText::new("Yane-Mitsumori")
                        .size(font_sizes::TITLE)
                        .color(palette.text_primary),
                );

                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new("Roof Pricing Calculator")
                        .size(font_sizes::LABEL)
                        .color(palette.text_secondary),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_theme_toggle(app, ui);
                });
            });
        });
}

/// テーマ切り替えボタン（ラベルは切り替え先のモード名）
fn render_theme_toggle(app: &mut MyApp, ui: &mut egui::Ui) {
    let label = match app.config.theme {
        ThemeMode::Light => "🌙 Dark Mode",
        ThemeMode::Dark => "☀ Light Mode",
    };

    if ui
        .add(egui::Button::new(label).min_size(egui::vec2(110.0, layout::BUTTON_HEIGHT)))
        .clicked()
    {
        app.toggle_theme(ui.ctx());
    }
}

/// メインパネル（左: 入力フォームと勾配図、右: 計算結果）
pub fn render_main_panel(app: &mut MyApp, ctx: &egui::Context) {
    let palette = ui_theme::palette(app.config.theme);

    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(palette.surface_bg)
                .inner_margin(egui::Margin::same(layout::PANEL_MARGIN)),
        )
        .show(ctx, |ui| {
            let available_height = ui.available_height();

            ui.columns(2, |columns| {
                // 左カラム: 入力フォーム + 勾配図
                render_form_card(&mut columns[0], app);
                columns[0].add_space(layout::CARD_GAP);
                render_pitch_card(&mut columns[0], app);

                // 右カラム: 計算結果
                render_results_card(&mut columns[1], app, available_height);
            });
        });
}
