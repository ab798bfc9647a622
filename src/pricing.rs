//! 見積り計算の純粋コア。
//!
//! - 水平面積と勾配カテゴリから実面積と最低価格を求める計算だけを持ちます。
//! - 表示用の丸め（実面積の整数丸め・通貨の 2 桁丸め）は `quote_text` 側の
//!   責務であり、このモジュールは常にフル精度の値を返します。

use std::fmt;

/// 実面積 1 平方フィートあたりの料金（USD）。
pub const RATE_PER_SQFT: f64 = 0.50;

/// 勾配カテゴリ（A〜D の 4 区分）。
///
/// 各カテゴリは固定の面積倍率を持ち、この 4 つ以外の値は存在しません。
/// UI のセレクタもこの列挙型の値だけを提供するため、
/// 「不正なカテゴリ」は型の上で表現できないようになっています。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeCategory {
    /// 緩勾配（3/12 以下）
    A,
    /// 標準勾配（4/12〜6/12）
    B,
    /// 急勾配（7/12〜9/12）
    C,
    /// 超急勾配（10/12 以上）
    D,
}

impl SlopeCategory {
    /// セレクタ表示順のカテゴリ一覧。
    pub const ALL: [SlopeCategory; 4] = [
        SlopeCategory::A,
        SlopeCategory::B,
        SlopeCategory::C,
        SlopeCategory::D,
    ];

    /// 面積倍率（水平面積 × 倍率 = 実面積）。
    pub fn factor(self) -> f64 {
        match self {
            SlopeCategory::A => 1.03,
            SlopeCategory::B => 1.12,
            SlopeCategory::C => 1.25,
            SlopeCategory::D => 1.41,
        }
    }

    /// カテゴリコード（"A" など、結果表示とクリップボード出力で使用）。
    pub fn code(self) -> &'static str {
        match self {
            SlopeCategory::A => "A",
            SlopeCategory::B => "B",
            SlopeCategory::C => "C",
            SlopeCategory::D => "D",
        }
    }

    /// セレクタ下のツールチップ行に出す説明文。
    pub fn description(self) -> &'static str {
        match self {
            SlopeCategory::A => "Low slope (≤ 3/12)",
            SlopeCategory::B => "Standard (4/12 - 6/12)",
            SlopeCategory::C => "Steep (7/12 - 9/12)",
            SlopeCategory::D => "Very steep (≥ 10/12)",
        }
    }
}

/// 1 回の送信で生成される見積り結果。
///
/// - 送信のたびに新しく作り直され、直前の結果を丸ごと置き換えます。
/// - `actual_area` と `price` はフル精度のまま保持します（表示丸めは別層）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub horizontal_area: f64,
    pub category: SlopeCategory,
    pub actual_area: f64,
    pub price: f64,
}

/// 入力検証エラー。
///
/// - いずれの場合も送信ハンドラの内側で捕捉され、結果パネルの
///   エラーメッセージ（`Display` の文字列）に変換されます。
/// - バリアントは失敗理由の区別のために値を保持しますが、
///   ユーザー向け文言は面積系 2 種で共通です。
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// 数値として解釈できない（NaN・無限大を含む）。
    NotANumber(String),
    /// 有限の数値だが 0 以下。
    NotPositive(f64),
    /// カテゴリ未選択のまま送信された。
    NoCategory,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotANumber(_) | InvalidInput::NotPositive(_) => write!(
                f,
                "Please enter a valid positive number for the horizontal area."
            ),
            InvalidInput::NoCategory => write!(f, "Please select a slope category."),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// 水平面積の入力テキストを検証し、正の有限値だけを通す。
///
/// - 前後の空白は無視します。
/// - 上限チェックは行いません。
pub fn validate_area(raw: &str) -> Result<f64, InvalidInput> {
    let value: f64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => return Err(InvalidInput::NotANumber(raw.to_string())),
    };

    // "inf" や "NaN" は f64 としては parse に成功するが、面積としては不正
    if !value.is_finite() {
        return Err(InvalidInput::NotANumber(raw.to_string()));
    }
    if value <= 0.0 {
        return Err(InvalidInput::NotPositive(value));
    }
    Ok(value)
}

/// 水平面積と勾配カテゴリから見積りを計算する（純粋関数）。
///
/// - `horizontal_area` は有限かつ正であること（`validate_area` 通過後の値）。
/// - 同じ入力に対しては常に同じ `Quote` を返し、副作用を持ちません。
pub fn compute_price(horizontal_area: f64, category: SlopeCategory) -> Quote {
    let actual_area = horizontal_area * category.factor();
    let price = actual_area * RATE_PER_SQFT;
    Quote {
        horizontal_area,
        category,
        actual_area,
        price,
    }
}

/// フォーム送信 1 回分の純粋ハンドラ。
///
/// 面積テキストの検証 → カテゴリ確認 → 価格計算の順で処理し、
/// 失敗はすべて `InvalidInput` として返します。副作用はありません。
pub fn evaluate_submission(
    area_text: &str,
    category: Option<SlopeCategory>,
) -> Result<Quote, InvalidInput> {
    let area = validate_area(area_text)?;
    let category = category.ok_or(InvalidInput::NoCategory)?;
    Ok(compute_price(area, category))
}
