//! クリップボードコピー用のワーカー。
//!
//! - OS のクリップボード操作はブロックすることがある（特に X11）ため、
//!   UI スレッドでは行わず単発のワーカースレッドに切り出します。
//! - 結果は `CopyMessage` として送信し、UI 側は `update` 内の `try_recv` で
//!   受け取ります。失敗してもパニックはせず、メッセージで報告するだけです。

use std::sync::mpsc;
use std::time::Duration;

/// コピー処理の結果として UI へ送られるメッセージ。
///
/// - `Copied`     : コピー成功。UI 側はボタンを 2 秒間「確認表示」に切り替えます。
/// - `Failed`     : コピー失敗。理由の文字列を添えて warn ログに残し、UI は元の表示のままにします。
#[derive(Debug, Clone)]
pub enum CopyMessage {
    Copied,
    Failed(String),
}

/// X11 ではクリップボードの内容を設定したプロセスが所有し続けるため、
/// set_text 直後にスレッドを終了すると貼り付け前に内容が失われることがある。
const CLIPBOARD_KEEP_ALIVE: Duration = Duration::from_millis(500);

/// テキストをクリップボードへコピーする単発タスクを開始する。
///
/// - 成否にかかわらず必ず 1 件の `CopyMessage` を送信して終了します
///   （受信側が先に破棄されていた場合の send エラーは無視）。
pub fn start_copy_task(text: String, sender: mpsc::Sender<CopyMessage>) {
    std::thread::spawn(move || {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(c) => c,
            Err(e) => {
                sender.send(CopyMessage::Failed(e.to_string())).ok();
                return;
            }
        };

        match clipboard.set_text(text) {
            Ok(()) => {
                sender.send(CopyMessage::Copied).ok();
                std::thread::sleep(CLIPBOARD_KEEP_ALIVE);
            }
            Err(e) => {
                sender.send(CopyMessage::Failed(e.to_string())).ok();
            }
        }
    });
}
