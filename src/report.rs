//! 端末への出力

use eczane_common::{
    call_uri, directions_uri, format_duty_date, map_uri, Bounds, PharmacyRecord,
};

/// リスト1行分のラベル
pub fn list_label(record: &PharmacyRecord) -> String {
    let district = if record.district.trim().is_empty() {
        "-"
    } else {
        record.district.trim()
    };
    format!("{} [{}] {}", record.name, district, record.phone)
}

pub fn print_list(records: &[PharmacyRecord]) {
    if records.is_empty() {
        println!("Eczane bulunamadı");
        return;
    }
    for record in records {
        println!("• {}", list_label(record));
        if !record.address.trim().is_empty() {
            println!("    {}", record.address.trim());
        }
    }
    println!("\n{} eczane", records.len());
}

/// 詳細表示の行
pub fn detail_lines(record: &PharmacyRecord, area: &Bounds) -> Vec<String> {
    let mut lines = vec![
        record.name.clone(),
        format!("  Adres:  {}", record.address),
        format!("  Bölge:  {}", record.district),
    ];
    if let Some(note) = record.district_note() {
        lines.push(format!("  Not:    {}", note));
    }
    lines.push(format!("  Nöbet:  {}", format_duty_date(&record.duty_date)));
    lines.push(format!("  Ara:    {}", call_uri(record)));
    lines.push(format!("  Harita: {}", map_uri(record)));
    lines.push(format!("  Yol:    {}", directions_uri(record)));
    if record.plottable_in(area).is_none() {
        lines.push("  (konum bilgisi geçersiz, haritada gösterilemez)".to_string());
    }
    lines
}

pub fn print_detail(record: &PharmacyRecord, area: &Bounds) {
    for line in detail_lines(record, area) {
        println!("{}", line);
    }
}
