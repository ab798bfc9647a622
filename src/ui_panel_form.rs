use eframe::egui;

use crate::app::MyApp;
use crate::pricing::SlopeCategory;
use crate::ui_components::{card_frame, field_label, muted_note, section_title, styled_text_edit};
use crate::ui_theme::{self, layout};

/// 入力フォームカード（面積・勾配カテゴリ・Calculate / Reset ボタン）を描画
pub fn render_form_card(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = ui_theme::palette(app.config.theme);

    card_frame(palette).show(ui, |ui| {
        ui.label(section_title("Roof Details", palette));
        ui.add_space(12.0);

        // 水平投影面積
        ui.label(field_label("Horizontal Area (sq ft)", palette));
        ui.add_space(4.0);
        let area_response = ui.add_sized(
            [ui.available_width(), layout::INPUT_HEIGHT],
            styled_text_edit(&mut app.area_input),
        );
        // 入力欄で Enter を押した場合もフォーム送信として扱う
        let submitted_by_enter =
            area_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(12.0);

        // 勾配カテゴリ
        ui.label(field_label("Slope Category", palette));
        ui.add_space(4.0);
        egui::ComboBox::new("slope_category", "")
            .width(layout::INPUT_WIDTH_MEDIUM)
            .selected_text(match app.selected_category {
                Some(c) => format!("{} ({:.2}x)", c.code(), c.factor()),
                None => "Select slope category".to_string(),
            })
            .show_ui(ui, |ui| {
                for category in SlopeCategory::ALL {
                    ui.selectable_value(
                        &mut app.selected_category,
                        Some(category),
                        format!("{} ({:.2}x)", category.code(), category.factor()),
                    )
                    .on_hover_text(category.description());
                }
            });

        // 選択中カテゴリの説明（未選択のあいだは何も出さない）
        if let Some(category) = app.selected_category {
            ui.add_space(4.0);
            ui.label(muted_note(category.description(), palette));
        }

        ui.add_space(16.0);

        // Calculate / Reset ボタン
        ui.horizontal(|ui| {
            let button_size = egui::vec2(100.0, layout::BUTTON_HEIGHT);

            let calculate_clicked = ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("Calculate").color(palette.on_accent),
                    )
                    .fill(palette.accent)
                    .min_size(button_size),
                )
                .clicked();

            ui.add_space(8.0);

            if ui
                .add(egui::Button::new("Reset").min_size(button_size))
                .clicked()
            {
                app.reset();
            }

            if calculate_clicked || submitted_by_enter {
                let now = ui.input(|i| i.time);
                app.submit(now);
            }
        });
    });
}
