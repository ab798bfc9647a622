//! GUI アプリケーション本体（`eframe::App` の実装）を定義するモジュールです。
//!
//! このモジュールは `update` ループのみを保持し、アプリケーション状態や
//! ボタン操作のロジックは `app_state` / `app_actions` に分割されています。

use eframe::{egui, App};

use crate::clipboard::CopyMessage;

// 外部からは従来どおり `crate::app::MyApp` などでアクセスできるようにする。
pub use crate::app_state::{MyApp, ResultView};

/// コピー成功後にボタンを「✓ Copied!」表示にしておく秒数。
const COPIED_CONFIRMATION_SECS: f64 = 2.0;

impl App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // コピーワーカーからの結果をすべて処理し、UI に即時反映する。
        // 成否にかかわらずタスクは 1 メッセージで完結するため、受信後は
        // receiver を破棄する。
        if let Some(ref receiver) = self.copy_receiver {
            let mut remove_receiver = false;
            while let Ok(message) = receiver.try_recv() {
                match message {
                    CopyMessage::Copied => {
                        self.copied_until = Some(now + COPIED_CONFIRMATION_SECS);
                        remove_receiver = true;
                    }
                    CopyMessage::Failed(reason) => {
                        // 失敗時はボタン表示を変えず、ログにだけ残す
                        log::warn!("Failed to copy results: {reason}");
                        remove_receiver = true;
                    }
                }
            }
            if remove_receiver {
                self.copy_receiver = None;
            }
        }

        // 確認表示の期限が過ぎたらボタンを通常表示に戻す
        if let Some(until) = self.copied_until {
            if now >= until {
                self.copied_until = None;
            }
        }

        // パネル描画は `ui_panels` モジュール経由にまとめる
        crate::ui_panels::render_header(self, ctx);
        crate::ui_panels::render_main_panel(self, ctx);

        ctx.request_repaint();
    }
}
