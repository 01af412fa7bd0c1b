//! 対話式ブラウズ
//!
//! 検索→選択→詳細 を Web版と同じ `AppState` の Intent で回す。

use dialoguer::{Input, Select};
use eczane_common::Intent;

use crate::error::{EczaneError, Result};
use crate::report::{list_label, print_detail};
use crate::session::Session;

/// メニューの固定項目
enum MenuAction {
    Pharmacy(usize),
    Search,
    Reload,
    Quit,
}

fn menu_action(index: usize, visible_count: usize) -> MenuAction {
    match index.checked_sub(visible_count) {
        None => MenuAction::Pharmacy(index),
        Some(0) => MenuAction::Search,
        Some(1) => MenuAction::Reload,
        Some(_) => MenuAction::Quit,
    }
}

pub async fn run_browse(session: &mut Session) -> Result<()> {
    loop {
        let visible = session.state().visible();
        let query = session.state().query().to_string();

        let mut items: Vec<String> = visible.iter().map(list_label).collect();
        items.push(if query.is_empty() {
            "🔍 Ara".to_string()
        } else {
            format!("🔍 Ara (şu an: \"{}\")", query)
        });
        items.push("↻ Yenile".to_string());
        items.push("✕ Çıkış".to_string());

        let selection = Select::new()
            .with_prompt(format!("{} eczane", visible.len()))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|e| EczaneError::Prompt(e.to_string()))?;

        let Some(index) = selection else {
            break;
        };

        match menu_action(index, visible.len()) {
            MenuAction::Pharmacy(i) => {
                session.send(Intent::Select(visible[i].clone())).await;
                if let Some(record) = session.state().selected() {
                    println!();
                    print_detail(record, &session.state().settings().service_area);
                    println!();
                }
                Input::<String>::new()
                    .with_prompt("Geri dönmek için Enter")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| EczaneError::Prompt(e.to_string()))?;
                session.send(Intent::DismissDetail).await;
            }
            MenuAction::Search => {
                let query: String = Input::new()
                    .with_prompt("İlçe veya eczane")
                    .with_initial_text(query)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| EczaneError::Prompt(e.to_string()))?;
                session.send(Intent::SearchChanged(query)).await;
            }
            MenuAction::Reload => {
                session.send(Intent::Reload).await;
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_action() {
        assert!(matches!(menu_action(0, 3), MenuAction::Pharmacy(0)));
        assert!(matches!(menu_action(2, 3), MenuAction::Pharmacy(2)));
        assert!(matches!(menu_action(3, 3), MenuAction::Search));
        assert!(matches!(menu_action(4, 3), MenuAction::Reload));
        assert!(matches!(menu_action(5, 3), MenuAction::Quit));
        assert!(matches!(menu_action(0, 0), MenuAction::Search));
    }
}
