use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ledgers-portfolio")]
#[command(about = "ポートフォリオサイトのカタログ検証・UI状態シミュレーター", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 案件カタログJSON（未指定なら設定値、それも無ければ組み込み）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログと画像ファイルを検証
    Check {
        /// 公開ディレクトリ（画像の実在確認）
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },

    /// カテゴリで絞り込んだ案件一覧
    Projects {
        /// カテゴリ名（All / Accounting Efficiency / Financial Reporting / Bookkeeping）
        #[arg(short, long, default_value = "All")]
        filter: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ナビゲーション一覧
    Nav,

    /// メタタグとJSON-LDを出力
    Seo {
        /// サイトURL（デフォルト: 設定値）
        #[arg(long)]
        site_url: Option<String>,
    },

    /// セッションスクリプトを再生してUI状態を出力
    Simulate {
        /// スクリプトJSONファイル
        #[arg(required = true)]
        script: PathBuf,

        /// 画像の自動送り間隔（ミリ秒、0で無効）
        #[arg(short, long)]
        interval_ms: Option<u32>,

        /// 出力ファイル（デフォルト: 標準出力にJSON Lines）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定管理
    Config {
        /// 自動送り間隔を設定（ミリ秒）
        #[arg(long)]
        set_interval_ms: Option<u32>,

        /// ベースパスを設定
        #[arg(long)]
        set_base_path: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
