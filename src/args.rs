// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use code_stats_domain::{DEFAULT_WORKERS, analytics::DEFAULT_TOP};

use crate::presentation::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "code_stats", version, about = "ソースツリーのコード行/コメント行/空行の集計ツール")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 解析するディレクトリ
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub path: PathBuf,

    /// 除外するディレクトリ名（カンマ区切り, 既定リストを置き換え）
    #[arg(long, value_delimiter = ',', help_heading = "走査")]
    pub exclude_dirs: Option<Vec<String>>,

    /// 除外する拡張子（カンマ区切り, 例: go,.md）
    #[arg(long, value_delimiter = ',', help_heading = "走査")]
    pub exclude_exts: Option<Vec<String>>,

    /// ワーカー数（0 は既定値）
    #[arg(long, default_value_t = DEFAULT_WORKERS, help_heading = "走査")]
    pub max_workers: usize,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow_links: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 上位N件のファイルを表示（0 は既定値）
    #[arg(long, default_value_t = DEFAULT_TOP, help_heading = "出力")]
    pub top: usize,

    /// 結果をファイルへ書き出す
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// Git 履歴の統計を含める
    #[arg(long, help_heading = "出力")]
    pub git: bool,

    /// 進捗を stderr に表示
    #[arg(long, help_heading = "動作")]
    pub progress: bool,

    /// 詳細ログ (debug)
    #[arg(short, long, help_heading = "動作")]
    pub verbose: bool,
}
