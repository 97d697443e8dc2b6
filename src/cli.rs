use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agrisense")]
#[command(about = "作物の葉の写真から病害を判定するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// トップ画面を表示
    Home,

    /// 葉の写真を解析して結果を保存
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// APIベースURL（設定ファイル・環境変数より優先）
        #[arg(long)]
        api_url: Option<String>,
    },

    /// 保存済みの解析結果から対処法を表示
    Recommend {
        /// 保存済みJSONをそのまま出力（レポートのコピー用）
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["agrisense", "analyze", "leaf.jpg", "--api-url", "http://x:1"]);
        match cli.command {
            Commands::Analyze { image, api_url } => {
                assert_eq!(image, PathBuf::from("leaf.jpg"));
                assert_eq!(api_url.as_deref(), Some("http://x:1"));
            }
            _ => panic!("Analyzeのはず"),
        }
    }

    #[test]
    fn test_parse_recommend_json_with_global_verbose() {
        let cli = Cli::parse_from(["agrisense", "recommend", "--json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Recommend { json: true }));
    }

    #[test]
    fn test_analyze_requires_image() {
        assert!(Cli::try_parse_from(["agrisense", "analyze"]).is_err());
    }
}
