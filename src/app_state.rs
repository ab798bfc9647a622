//! アプリケーション状態 (`MyApp`) と初期化ロジックをまとめたモジュール。
//!
//! - 結果パネルの表示状態（`ResultView`）の enum 定義
//! - `MyApp` 構造体
//! - `MyApp::new` による初期化

use std::sync::mpsc;

use eframe::CreationContext;

use crate::app_style::apply_theme;
use crate::clipboard::CopyMessage;
use crate::config::{load_or_create_config, Config};
use crate::pricing::{Quote, SlopeCategory};

/// 結果パネルの表示状態（未計算 / 見積り / エラー）
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultView {
    /// まだ一度も計算していない、または Reset 直後
    #[default]
    Empty,
    /// 計算に成功し、内訳 5 行を表示中
    Quote(Quote),
    /// 入力が不正で、エラーメッセージを表示中
    Error(String),
}

pub struct MyApp {
    pub config: Config,

    /// 水平投影面積の入力欄（生テキストのまま保持し、送信時に検証する）
    pub area_input: String,
    /// 選択中の勾配カテゴリ。未選択はプレースホルダ表示のまま `None`
    pub selected_category: Option<SlopeCategory>,

    /// 結果パネルの表示内容
    pub result: ResultView,
    /// 結果の表示開始時刻（`ctx.input(|i| i.time)` の秒）。行のスタガー表示に使う
    pub result_shown_at: Option<f64>,

    /// コピー確認表示（✓ Copied!）を出し続ける期限時刻
    pub copied_until: Option<f64>,
    /// コピーワーカーからの結果受信用。タスク実行中のみ Some
    pub copy_receiver: Option<mpsc::Receiver<CopyMessage>>,
}

impl MyApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let config = load_or_create_config().unwrap_or_default();

        // 保存済みテーマ（なければライト）を起動時に反映する
        apply_theme(&cc.egui_ctx, config.theme);

        MyApp {
            config,
            area_input: String::new(),
            selected_category: None,
            result: ResultView::default(),
            result_shown_at: None,
            copied_until: None,
            copy_receiver: None,
        }
    }
}
