//! 見積り結果のテキスト表現。
//!
//! - 結果パネルに表示する 5 行の内訳と、クリップボードへコピーする
//!   プレーンテキストをここで組み立てます。
//! - 数値整形は en-US ロケールの表記（3 桁区切り・通貨 2 桁）に合わせます。
//!   表示とコピーが同じ関数を通るため、両者の文字列は常に一致します。

use crate::pricing::{Quote, RATE_PER_SQFT};

/// 結果パネルの見出し。
pub const RESULTS_HEADING: &str = "Calculation Results";

/// 結果内訳の 1 行（ラベルと整形済みの値）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub label: &'static str,
    pub value: String,
}

/// 数値を 3 桁区切りで整形する。
///
/// - 小数部は最大 3 桁まで残し、末尾の 0 は落とします
///   （`Intl.NumberFormat('en-US')` の既定動作と同じ）。
/// - 整数はそのまま区切りのみ。
///
/// 例:
/// - `1000.0` → `"1,000"`
/// - `2500.4` → `"2,500.4"`
/// - `2800.0` → `"2,800"`
pub fn format_number(value: f64) -> String {
    let rounded = format!("{value:.3}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    group_digits(trimmed)
}

/// 金額を USD 表記で整形する。
///
/// - 小数 2 桁固定・3 桁区切り・`$` 前置。
/// - セント単位に丸めてから整形する（0.5 セントは切り上げ側に丸める、
///   いわゆる通常の通貨丸め）。
///
/// 例:
/// - `0.5` → `"$0.50"`
/// - `515.0` → `"$515.00"`
/// - `1400.224` → `"$1,400.22"`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let fixed = format!("{:.2}", cents / 100.0);
    format!("${}", group_digits(&fixed))
}

/// 整形済み数値文字列（ASCII 数字のみ）の整数部へ 3 桁区切りを入れる。
fn group_digits(num: &str) -> String {
    let (sign, body) = match num.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", num),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };

    let len = int_part.len();
    let mut out = String::with_capacity(num.len() + len / 3 + 1);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// 見積りから結果パネルの 5 行を組み立てる。
///
/// 行の並びとラベルは表示契約の一部です。実面積だけは最も近い整数へ
/// 丸めて表示しますが、価格はフル精度の値から通貨丸めされます
/// （この非対称も表示契約に含まれるので、そろえてはいけません）。
pub fn quote_lines(quote: &Quote) -> [QuoteLine; 5] {
    [
        QuoteLine {
            label: "Horizontal Area:",
            value: format!("{} sq ft", format_number(quote.horizontal_area)),
        },
        QuoteLine {
            label: "Slope Category:",
            value: format!("{} ({:.2}x)", quote.category.code(), quote.category.factor()),
        },
        QuoteLine {
            label: "Actual Surface Area:",
            value: format!("{} sq ft", format_number(quote.actual_area.round())),
        },
        QuoteLine {
            label: "Rate per sq ft:",
            value: format_currency(RATE_PER_SQFT),
        },
        QuoteLine {
            label: "Minimum Price:",
            value: format_currency(quote.price),
        },
    ]
}

/// 表示中の結果行をコピー用のプレーンテキストにする。
///
/// 各行は「ラベル 値」を空白 1 個区切りに正規化し、行同士は改行で結合します。
/// 見出しとボタンは含めません。
pub fn clipboard_text(lines: &[QuoteLine]) -> String {
    lines
        .iter()
        .map(|line| {
            let joined = format!("{} {}", line.label, line.value);
            joined.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
