use yane_mitsumori::pricing::{compute_price, SlopeCategory};
use yane_mitsumori::quote_text::{
    clipboard_text, format_currency, format_number, quote_lines, QuoteLine, RESULTS_HEADING,
};

/// 数値の 3 桁区切り表示を確認する（小数部は残すが末尾の 0 は付けない）。
#[test]
fn format_number_groups_digits() {
    let cases: &[(f64, &str)] = &[
        (0.5, "0.5"),
        (999.0, "999"),
        (1000.0, "1,000"),
        (1030.0, "1,030"),
        (2500.4, "2,500.4"),
        (2800.0, "2,800"),
        (2800.448, "2,800.448"),
        (1234567.0, "1,234,567"),
        (-1234.5, "-1,234.5"),
    ];

    for &(value, expected) in cases {
        assert_eq!(
            format_number(value),
            expected,
            "format_number({value}) should be {expected:?}"
        );
    }
}

/// 通貨表示（$ 前置・2 桁固定・3 桁区切り・セント丸め）を確認する。
#[test]
fn format_currency_fixed_two_digits() {
    let cases: &[(f64, &str)] = &[
        (0.5, "$0.50"),
        (0.125, "$0.13"),
        (352.5, "$352.50"),
        (515.0, "$515.00"),
        (999.999, "$1,000.00"),
        (1400.224, "$1,400.22"),
        (1234567.891, "$1,234,567.89"),
    ];

    for &(amount, expected) in cases {
        assert_eq!(
            format_currency(amount),
            expected,
            "format_currency({amount}) should be {expected:?}"
        );
    }
}

/// 内訳 5 行のラベルと値が表示契約どおりであることを確認する。
#[test]
fn quote_lines_match_display_contract() {
    let quote = compute_price(2500.4, SlopeCategory::B);
    let lines = quote_lines(&quote);

    let expected: &[(&str, &str)] = &[
        ("Horizontal Area:", "2,500.4 sq ft"),
        ("Slope Category:", "B (1.12x)"),
        ("Actual Surface Area:", "2,800 sq ft"),
        ("Rate per sq ft:", "$0.50"),
        ("Minimum Price:", "$1,400.22"),
    ];

    assert_eq!(lines.len(), expected.len(), "there should be exactly 5 lines");
    for (line, &(label, value)) in lines.iter().zip(expected) {
        assert_eq!(line.label, label);
        assert_eq!(line.value, value, "value of {label:?}");
    }

    assert_eq!(RESULTS_HEADING, "Calculation Results");
}

/// 実面積は整数へ丸めて表示し、価格はフル精度から通貨丸めされることを確認する。
#[test]
fn quote_lines_round_area_but_not_price() {
    let quote = compute_price(1000.0, SlopeCategory::A);
    let lines = quote_lines(&quote);

    assert_eq!(lines[2].value, "1,030 sq ft");
    assert_eq!(lines[4].value, "$515.00");
}

/// コピー用テキストが「ラベル 値」を改行で結合した形になることを確認する。
#[test]
fn clipboard_text_joins_lines() {
    let quote = compute_price(1000.0, SlopeCategory::A);
    let text = clipboard_text(&quote_lines(&quote));

    let expected = "Horizontal Area: 1,000 sq ft\n\
                    Slope Category: A (1.03x)\n\
                    Actual Surface Area: 1,030 sq ft\n\
                    Rate per sq ft: $0.50\n\
                    Minimum Price: $515.00";
    assert_eq!(text, expected);
}

/// 連続する空白が 1 個に正規化されることを確認する。
#[test]
fn clipboard_text_normalizes_whitespace() {
    let lines = vec![QuoteLine {
        label: "Horizontal Area:",
        value: "  1,000   sq  ft ".to_string(),
    }];

    assert_eq!(clipboard_text(&lines), "Horizontal Area: 1,000 sq ft");
}
