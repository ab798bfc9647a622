use yane_mitsumori::pricing::SlopeCategory;
use yane_mitsumori::ui_panel_pitch::{
    is_emphasized, line_category, pitch_lines, MAX_RISE, MIN_RISE,
};

/// 勾配とカテゴリの対応がカテゴリ説明と同じ区切りであることを確認する。
#[test]
fn line_category_matches_descriptions() {
    let cases: &[(u32, SlopeCategory)] = &[
        (1, SlopeCategory::A),
        (2, SlopeCategory::A),
        (3, SlopeCategory::A),
        (4, SlopeCategory::B),
        (5, SlopeCategory::B),
        (6, SlopeCategory::B),
        (7, SlopeCategory::C),
        (8, SlopeCategory::C),
        (9, SlopeCategory::C),
        (10, SlopeCategory::D),
        (11, SlopeCategory::D),
        (12, SlopeCategory::D),
    ];

    for &(rise, expected) in cases {
        assert_eq!(
            line_category(rise),
            expected,
            "category of {rise}/12 should be {expected:?}"
        );
    }
}

/// 勾配線が 1/12 から 12/12 まで昇順で 12 本あることを確認する。
#[test]
fn pitch_lines_cover_all_rises() {
    let lines = pitch_lines();

    assert_eq!(lines.len(), (MAX_RISE - MIN_RISE + 1) as usize);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.rise, MIN_RISE + i as u32, "rises should be ascending");
        assert_eq!(
            line.category,
            line_category(line.rise),
            "category of line {}/12",
            line.rise
        );
    }

    // 各カテゴリに 3 本ずつ
    for category in SlopeCategory::ALL {
        let count = lines.iter().filter(|l| l.category == category).count();
        assert_eq!(count, 3, "category {category:?} should own 3 lines");
    }
}

/// カテゴリ未選択のときは 1 本も強調されないことを確認する。
#[test]
fn no_selection_dims_every_line() {
    for line in pitch_lines() {
        assert!(
            !is_emphasized(&line, None),
            "line {}/12 should be dimmed without a selection",
            line.rise
        );
    }
}

/// 選択したカテゴリに属する線だけが強調されることを確認する。
#[test]
fn selection_emphasizes_only_matching_lines() {
    let selected = Some(SlopeCategory::B);

    for line in pitch_lines() {
        let expected = line.category == SlopeCategory::B;
        assert_eq!(
            is_emphasized(&line, selected),
            expected,
            "emphasis of line {}/12 with category B selected",
            line.rise
        );
    }
}
