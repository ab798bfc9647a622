//! 屋根勾配図カード。
//!
//! - 1/12〜12/12 の勾配線を扇状に描き、選択中カテゴリに属する線だけを
//!   ティールの強調表示にします（未選択のあいだは全線が減光表示）。
//! - どの線がどのカテゴリに属するかは純粋関数としてここに定義しています。

use eframe::egui;

use crate::app::MyApp;
use crate::pricing::SlopeCategory;
use crate::ui_components::{card_frame, section_title};
use crate::ui_theme::{self, layout, Palette};

/// 図に描く最小勾配（1/12）
pub const MIN_RISE: u32 = 1;
/// 図に描く最大勾配（12/12 = 45 度）
pub const MAX_RISE: u32 = 12;

/// 勾配図の 1 本の線（rise/12 勾配）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchLine {
    /// 水平 12 に対する立ち上がり（1〜12）
    pub rise: u32,
    /// この勾配が属するカテゴリ
    pub category: SlopeCategory,
}

/// 図に描く勾配線の一覧（1/12〜12/12 の固定 12 本）
pub fn pitch_lines() -> Vec<PitchLine> {
    (MIN_RISE..=MAX_RISE)
        .map(|rise| PitchLine {
            rise,
            category: line_category(rise),
        })
        .collect()
}

/// rise/12 勾配が属するカテゴリを返す
///
/// カテゴリ説明（A: ≤ 3/12, B: 4/12〜6/12, C: 7/12〜9/12, D: ≥ 10/12）と
/// 同じ区切りで対応づける。
pub fn line_category(rise: u32) -> SlopeCategory {
    match rise {
        0..=3 => SlopeCategory::A,
        4..=6 => SlopeCategory::B,
        7..=9 => SlopeCategory::C,
        _ => SlopeCategory::D,
    }
}

/// 線を強調表示すべきか。カテゴリ未選択のときは全線が減光表示になる
pub fn is_emphasized(line: &PitchLine, selected: Option<SlopeCategory>) -> bool {
    selected == Some(line.category)
}

/// 勾配図カードを描画
pub fn render_pitch_card(ui: &mut egui::Ui, app: &MyApp) {
    let palette = ui_theme::palette(app.config.theme);

    card_frame(palette).show(ui, |ui| {
        ui.label(section_title("Pitch Reference", palette));
        ui.add_space(8.0);

        let mut rect = ui.available_rect_before_wrap();
        rect.set_height(layout::PITCH_CARD_HEIGHT);
        ui.allocate_rect(rect, egui::Sense::hover());
        let painter = ui.painter_at(rect.intersect(ui.clip_rect()));

        draw_pitch_diagram(&painter, rect, app.selected_category, palette);
    });
}

/// 勾配線の扇とラベルを描画
fn draw_pitch_diagram(
    painter: &egui::Painter,
    rect: egui::Rect,
    selected: Option<SlopeCategory>,
    palette: &Palette,
) {
    // 右側はラベル分のマージンを広めに取る
    let inner = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + 12.0, rect.min.y + 12.0),
        egui::pos2(rect.max.x - 40.0, rect.max.y - 20.0),
    );

    // 軒先（左下）を原点に、水平 12 に対する立ち上がりで線を引く
    let run = inner.width().min(inner.height()).max(0.0);
    let origin = egui::pos2(inner.min.x, inner.max.y);

    // 水平の基準線
    painter.line_segment(
        [origin, egui::pos2(origin.x + run, origin.y)],
        egui::Stroke::new(1.0, palette.border),
    );

    let font_id = egui::FontId::proportional(10.0);

    for line in pitch_lines() {
        let end = egui::pos2(
            origin.x + run,
            origin.y - run * line.rise as f32 / MAX_RISE as f32,
        );

        let stroke = if is_emphasized(&line, selected) {
            egui::Stroke::new(2.0, ui_theme::PITCH_ACCENT)
        } else {
            // 対象外の線は本文色の 25% で描く
            egui::Stroke::new(1.0, palette.text_primary.gamma_multiply(0.25))
        };
        painter.line_segment([origin, end], stroke);

        let label_color = if is_emphasized(&line, selected) {
            ui_theme::PITCH_ACCENT
        } else {
            palette.text_secondary.gamma_multiply(0.5)
        };
        painter.text(
            egui::pos2(end.x + 4.0, end.y),
            egui::Align2::LEFT_CENTER,
            format!("{}/12", line.rise),
            font_id.clone(),
            label_color,
        );
    }
}
