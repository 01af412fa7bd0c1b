//! 検索フィルタ
//!
//! 薬局名または地区名に対する大文字小文字を区別しない部分一致。
//! 状態を持たないため、キー入力ごとに呼んでよい。

use crate::types::PharmacyRecord;

/// クエリで絞り込む
///
/// クエリは入力されたまま使う（前後の空白も一致対象）。空文字列なら入力をそのまま返す
pub fn filter(records: &[PharmacyRecord], query: &str) -> Vec<PharmacyRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = fold_case(query);
    records
        .iter()
        .filter(|r| matches_folded(r, &needle))
        .cloned()
        .collect()
}

fn matches_folded(record: &PharmacyRecord, needle: &str) -> bool {
    fold_case(&record.name).contains(needle) || fold_case(&record.district).contains(needle)
}

/// トルコ語の大文字小文字の対応で小文字化
///
/// 'İ'↔'i' と 'I'↔'ı' が対になる。`str::to_lowercase` は 'İ' を "i\u{307}" に、
/// 'I' を 'i' にしてしまうので先に置き換える。'i' と 'ı' は別の文字のまま。
pub fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'İ' => 'i',
            'I' => 'ı',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}
