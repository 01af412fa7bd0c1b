//! ターミナル版のEffect実行
//!
//! Web版の Dispatcher と同じく `AppState` に Intent を流し、返ってきた Effect を処理する。
//! 端末には位置情報もトーストも無いので、それらは記録するだけ。

use std::collections::VecDeque;
use std::time::Duration;

use eczane_common::filter::{filter, fold_case};
use eczane_common::{AppState, Effect, Intent, NotificationKind, PharmacyRecord};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::directory::DirectoryClient;
use crate::error::{EczaneError, Result};

pub struct Session {
    client: DirectoryClient,
    state: AppState,
    show_progress: bool,
}

impl Session {
    pub fn new(client: DirectoryClient, state: AppState) -> Self {
        Self {
            client,
            state,
            show_progress: true,
        }
    }

    /// スピナーを出さない（テスト・JSON出力用）
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// 名前で1件探す（完全一致→最初の部分一致）
    pub fn find(&self, name: &str) -> Result<PharmacyRecord> {
        find_pharmacy(self.state.records(), name)
            .cloned()
            .ok_or_else(|| EczaneError::PharmacyNotFound(name.trim().to_string()))
    }

    /// 初期化（初回取得まで）
    pub async fn start(&mut self) {
        let effects = self.state.start();
        self.run(effects).await;
    }

    pub async fn send(&mut self, intent: Intent) {
        let effects = self.state.apply(intent);
        self.run(effects).await;
    }

    async fn run(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::FetchDirectory(endpoint) => {
                    let spinner = self.spinner();
                    let result = self.client.load(endpoint).await;
                    spinner.finish_and_clear();

                    let intent = match result {
                        Ok(records) => Intent::DirectoryLoaded(records),
                        Err(e) => {
                            warn!(error = %e, "failed to load pharmacy directory");
                            Intent::DirectoryFailed(e.to_string())
                        }
                    };
                    queue.extend(self.state.apply(intent));
                }
                Effect::CheckPermission | Effect::RequestPosition => {
                    debug!(?effect, "no geolocation in terminal, skipping");
                }
                Effect::ScheduleDismiss { id, .. } => {
                    self.report_notification();
                    self.state.apply(Intent::DismissNotification(id));
                }
            }
        }
    }

    /// 失敗通知だけ標準エラーに出す
    fn report_notification(&self) {
        if let Some(n) = self.state.notification() {
            if n.kind == NotificationKind::Error {
                eprintln!("⚠ {}", n.message);
            }
        }
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Eczaneler yükleniyor...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

pub fn find_pharmacy<'a>(records: &'a [PharmacyRecord], name: &str) -> Option<&'a PharmacyRecord> {
    let wanted = fold_case(name.trim());
    if wanted.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| fold_case(r.name.trim()) == wanted)
        .or_else(|| {
            let first = filter(records, name.trim()).into_iter().next()?;
            records.iter().find(|r| **r == first)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, district: &str) -> PharmacyRecord {
        PharmacyRecord {
            name: name.into(),
            district: district.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_exact_name_first() {
        let records = vec![
            record("Yeni Ege Eczanesi", "Bornova"),
            record("Ege Eczanesi", "Konak"),
        ];
        let found = find_pharmacy(&records, "ege eczanesi").unwrap();
        assert_eq!(found.district, "Konak");
    }

    #[test]
    fn test_find_falls_back_to_partial_match() {
        let records = vec![record("Işık Eczanesi", "Buca"), record("Deniz Eczanesi", "Konak")];
        let found = find_pharmacy(&records, "IŞIK").unwrap();
        assert_eq!(found.name, "Işık Eczanesi");
        assert_eq!(find_pharmacy(&records, "Konak").unwrap().name, "Deniz Eczanesi");
    }

    #[test]
    fn test_find_nothing() {
        let records = vec![record("Deniz Eczanesi", "Konak")];
        assert!(find_pharmacy(&records, "Bornova").is_none());
        assert!(find_pharmacy(&records, "   ").is_none());
    }
}
