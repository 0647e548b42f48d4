use clap::{Parser, Subcommand};
use dg_review_common::DgFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dg-review")]
#[command(about = "DG document review dashboard and mock API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// モックAPIとダッシュボードを起動
    Serve {
        /// 待ち受けアドレス
        #[arg(long)]
        host: Option<String>,

        /// 待ち受けポート（環境変数PORTより優先）
        #[arg(short, long)]
        port: Option<u16>,

        /// ダッシュボードの静的ファイル
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// アップロード保存先
        #[arg(long)]
        upload_dir: Option<PathBuf>,

        /// 初期データJSON（省略時は組み込みのモックデータ）
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// ドキュメント一覧をフィルタして表示
    Documents {
        /// ドキュメント配列JSON（GET /api/documents の保存結果など）
        #[arg(short, long, conflicts_with = "seed")]
        file: Option<PathBuf>,

        /// 初期データJSON
        #[arg(long)]
        seed: Option<PathBuf>,

        /// ファイル名の部分一致（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// 種類の完全一致
        #[arg(short = 't', long = "type")]
        doc_type: Option<String>,

        /// DGフィルタ (all/dg/non-dg)
        #[arg(long, default_value = "all")]
        dg: DgFilter,

        /// 最低信頼度（%）
        #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=100))]
        min_confidence: u8,
    },

    /// 設定を表示/編集
    Config {
        /// ポートを保存
        #[arg(long)]
        set_port: Option<u16>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// サーバ設定が必須か。`documents`は設定なしでも動く
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Documents { .. })
    }
}
