use eframe::egui;

use crate::app::{MyApp, ResultView};
use crate::quote_text::{quote_lines, RESULTS_HEADING};
use crate::ui_components::{card_frame, muted_note, section_title};
use crate::ui_theme::{self, font_sizes, layout, Palette};

/// 結果行のスタガー間隔（秒）。i 行目は表示開始から i * 0.1 秒後に現れる
const ROW_STAGGER_SECS: f64 = 0.1;
/// 各行のフェードイン時間（秒）
const ROW_FADE_SECS: f64 = 0.25;

/// 計算結果カードを描画
pub fn render_results_card(ui: &mut egui::Ui, app: &mut MyApp, height: f32) {
    let palette = ui_theme::palette(app.config.theme);
    let now = ui.input(|i| i.time);

    // 借用チェッカー対策: 表示内容を先にクローンしてから描画する
    let result = app.result.clone();

    card_frame(palette).show(ui, |ui| {
        ui.set_min_height(height - layout::CARD_HEIGHT_OFFSET);

        ui.label(section_title(RESULTS_HEADING, palette));
        ui.add_space(12.0);

        match result {
            ResultView::Empty => {
                ui.label(muted_note(
                    "Enter roof details and press Calculate.",
                    palette,
                ));
            }
            ResultView::Error(message) => {
                let alpha = fade_alpha(now, app.result_shown_at.unwrap_or(now));
                ui.label(
                    egui::RichText::new(message)
                        .size(font_sizes::BODY)
                        .color(palette.danger.gamma_multiply(alpha)),
                );
            }
            ResultView::Quote(quote) => {
                let shown_at = app.result_shown_at.unwrap_or(now);
                let lines = quote_lines(&quote);
                let last = lines.len() - 1;

                for (i, line) in lines.iter().enumerate() {
                    let alpha = fade_alpha(now, shown_at + i as f64 * ROW_STAGGER_SECS);
                    // 最終行（Minimum Price）はアクセント色で強調する
                    render_result_row(ui, palette, line.label, &line.value, i == last, alpha);
                    ui.add_space(6.0);
                }

                ui.add_space(10.0);
                render_copy_button(ui, app, palette);
            }
        }
    });
}

/// 行の表示開始時刻からの経過に応じたフェードイン係数（0.0〜1.0）
fn fade_alpha(now: f64, start: f64) -> f32 {
    ((now - start) / ROW_FADE_SECS).clamp(0.0, 1.0) as f32
}

/// ラベル左寄せ・値右寄せの結果行を 1 行描画
fn render_result_row(
    ui: &mut egui::Ui,
    palette: &Palette,
    label: &str,
    value: &str,
    emphasized: bool,
    alpha: f32,
) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(font_sizes::BODY)
                .color(palette.text_secondary.gamma_multiply(alpha)),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut value_text = egui::RichText::new(value).size(font_sizes::BODY);
            value_text = if emphasized {
                value_text.strong().color(palette.accent.gamma_multiply(alpha))
            } else {
                value_text.color(palette.text_primary.gamma_multiply(alpha))
            };
            ui.label(value_text);
        });
    });
}

/// コピーボタンを描画（コピー直後の 2 秒間は確認表示に切り替わる）
fn render_copy_button(ui: &mut egui::Ui, app: &mut MyApp, palette: &Palette) {
    let (label, fill) = if app.copied_until.is_some() {
        ("✓ Copied!", palette.success)
    } else {
        ("📋 Copy Results", palette.accent)
    };

    if ui
        .add(
            egui::Button::new(egui::RichText::new(label).color(palette.on_accent))
                .fill(fill)
                .min_size(egui::vec2(140.0, layout::BUTTON_HEIGHT)),
        )
        .clicked()
    {
        app.copy_results();
    }
}
