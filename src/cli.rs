use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "izmir-eczane")]
#[command(about = "İzmir nöbetçi eczane listesi・検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 当番薬局を一覧表示
    List {
        /// 当番に限らず全薬局を取得
        #[arg(short, long)]
        all: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 薬局名・地区で絞り込み
    Search {
        /// 検索語（トルコ語の大文字小文字を区別しない。前後の空白も含めて一致）
        #[arg(required = true)]
        query: String,

        #[arg(short, long)]
        all: bool,

        #[arg(long)]
        json: bool,
    },

    /// 1件の詳細（電話・地図・経路リンク）
    Show {
        /// 薬局名（完全一致がなければ最初の部分一致）
        #[arg(required = true)]
        name: String,

        #[arg(short, long)]
        all: bool,
    },

    /// 対話式で検索・選択
    Browse {
        #[arg(short, long)]
        all: bool,
    },

    /// 設定を表示・変更
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_global_flags() {
        let cli = Cli::parse_from(["izmir-eczane", "search", "Karşıyaka", "--all", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Search { query, all, json } => {
                assert_eq!(query, "Karşıyaka");
                assert!(all);
                assert!(!json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_base_url_override() {
        let cli = Cli::parse_from(["izmir-eczane", "--base-url", "http://localhost:8080", "list"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(matches!(cli.command, Commands::List { all: false, json: false }));
    }
}
