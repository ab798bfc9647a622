//! `MyApp` の操作ロジック（フォームのボタンで動く処理）をまとめたモジュール。
//!
//! - 見積りの計算 (`submit`)
//! - フォームと結果パネルのクリア (`reset`)
//! - 結果テキストのクリップボードコピー (`copy_results`)
//! - テーマ切り替え (`toggle_theme`)

use std::sync::mpsc;

use eframe::egui;

use crate::app_state::{MyApp, ResultView};
use crate::app_style::apply_theme;
use crate::clipboard;
use crate::config::save_config;
use crate::pricing::evaluate_submission;
use crate::quote_text::{clipboard_text, quote_lines};

impl MyApp {
    /// Calculate ボタン。入力を検証して見積りを計算し、結果パネルに反映する。
    ///
    /// - 成功時は内訳 5 行、失敗時はエラーメッセージ 1 行の表示に切り替わる。
    /// - どちらの場合も表示開始時刻を取り直し、行のスタガー表示をやり直す。
    /// - 古い結果に対するコピータスクの受信は打ち切る。
    pub fn submit(&mut self, now: f64) {
        match evaluate_submission(&self.area_input, self.selected_category) {
            Ok(quote) => {
                log::info!(
                    "Quote: {} sq ft, category {} -> ${:.2}",
                    quote.horizontal_area,
                    quote.category.code(),
                    quote.price
                );
                self.result = ResultView::Quote(quote);
            }
            Err(e) => {
                log::info!("Submission rejected: {e}");
                self.result = ResultView::Error(e.to_string());
            }
        }

        self.result_shown_at = Some(now);
        self.copied_until = None;
        self.copy_receiver = None;
    }

    /// Reset ボタン。フォーム入力と結果パネルを初期状態に戻す。
    pub fn reset(&mut self) {
        self.area_input.clear();
        self.selected_category = None;
        self.result = ResultView::Empty;
        self.result_shown_at = None;
        self.copied_until = None;
        self.copy_receiver = None;
    }

    /// Copy Results ボタン。表示中の内訳をプレーンテキストとしてコピーする。
    ///
    /// - クリップボード操作そのものはワーカースレッドで行い、
    ///   結果は `update` 内で `CopyMessage` として受け取る。
    pub fn copy_results(&mut self) {
        let quote = match &self.result {
            ResultView::Quote(q) => *q,
            _ => return,
        };
        let text = clipboard_text(&quote_lines(&quote));

        let (sender, receiver) = mpsc::channel();
        self.copy_receiver = Some(receiver);
        clipboard::start_copy_task(text, sender);
    }

    /// テーマトグル。ライト / ダークを切り替えて即時適用し、設定ファイルに保存する。
    ///
    /// 保存に失敗しても切り替え自体は有効のまま（次回起動時に前のテーマへ戻るだけ）。
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.theme = self.config.theme.toggled();
        apply_theme(ctx, self.config.theme);

        if let Err(e) = save_config(&self.config) {
            log::warn!("Failed to save settings: {e}");
        }
    }
}
