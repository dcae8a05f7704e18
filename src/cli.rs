use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "accident-detect")]
#[command(about = "事故検出サービスに画像を送信して結果を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を送信して検出結果を表示（複数指定時は1枚ずつ順に送信）
    Detect {
        /// 画像ファイル
        images: Vec<PathBuf>,

        /// 検出サービスのベースアドレス（設定ファイル・環境変数より優先）
        #[arg(short, long)]
        url: Option<String>,
    },

    /// 設定を表示・変更
    Config {
        /// 検出サービスのベースアドレスを保存
        #[arg(long)]
        set_base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from(["accident-detect", "detect", "a.png", "b.jpg", "--url", "http://h:1"])
            .expect("parse失敗");
        match cli.command {
            Commands::Detect { images, url } => {
                assert_eq!(images, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
                assert_eq!(url.as_deref(), Some("http://h:1"));
            }
            _ => panic!("detectのはず"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_detect_without_images() {
        let cli = Cli::try_parse_from(["accident-detect", "-v", "detect"]).expect("parse失敗");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Detect { ref images, .. } if images.is_empty()));
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from([
            "accident-detect", "config", "--set-base-url", "http://10.0.0.2:5000", "--show",
        ])
        .expect("parse失敗");
        match cli.command {
            Commands::Config { set_base_url, show } => {
                assert_eq!(set_base_url.as_deref(), Some("http://10.0.0.2:5000"));
                assert!(show);
            }
            _ => panic!("configのはず"),
        }
    }
}
