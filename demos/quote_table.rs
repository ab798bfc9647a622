/// 見積り計算の動作確認用デモ（CLI専用）

use yane_mitsumori::pricing::{compute_price, validate_area, SlopeCategory};
use yane_mitsumori::quote_text::{clipboard_text, format_currency, format_number, quote_lines};

fn main() {
    println!("========================================");
    println!("屋根見積り価格表 ($0.50 / sq ft)");
    println!("========================================");

    let areas = [500.0, 1000.0, 1500.5, 2500.4];

    // 面積 × カテゴリの価格マトリクス
    print!("{:>12}", "sq ft");
    for category in SlopeCategory::ALL {
        print!(
            "{:>14}",
            format!("{} ({:.2}x)", category.code(), category.factor())
        );
    }
    println!();

    for &area in &areas {
        print!("{:>12}", format_number(area));
        for category in SlopeCategory::ALL {
            let quote = compute_price(area, category);
            print!("{:>14}", format_currency(quote.price));
        }
        println!();
    }

    println!();
    println!("========================================");
    println!("コピー用テキストの例 (1000 sq ft, カテゴリ A)");
    println!("========================================");
    let quote = compute_price(1000.0, SlopeCategory::A);
    println!("{}", clipboard_text(&quote_lines(&quote)));

    println!();
    println!("========================================");
    println!("入力検証の例");
    println!("========================================");
    for input in ["1500.5", "abc", "0", "-5"] {
        match validate_area(input) {
            Ok(v) => println!("{input:>10?} -> OK ({v})"),
            Err(e) => println!("{input:>10?} -> {e}"),
        }
    }
}
