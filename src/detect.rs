//! detectコマンド: 画像を1枚ずつ送信し、結果または通知を表示する

use crate::client::DetectionClient;
use crate::error::Result;
use crate::image_file::{self, ImageFile};
use accident_detect_common::{Detection, Endpoint, UploadClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// 1枚分の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectOutcome {
    Detected { file_name: String, detection: Detection },
    /// ユーザーに表示した通知文
    Failed { file_name: Option<String>, notice: String },
}

#[derive(Debug, Default)]
pub struct DetectSummary {
    pub outcomes: Vec<DetectOutcome>,
}

impl DetectSummary {
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DetectOutcome::Failed { .. }))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// 指定画像を順に送信する
///
/// 前の送信が完了するまで次は送らない。画像未指定なら通信せずに通知のみ。
pub async fn run_detect(images: &[PathBuf], endpoint: Endpoint) -> Result<DetectSummary> {
    let client = DetectionClient::new(endpoint.clone())?;
    let mut state: UploadClient<ImageFile> = UploadClient::new(endpoint);
    let mut summary = DetectSummary::default();

    if images.is_empty() {
        if let Err(e) = state.begin_submit() {
            eprintln!("✖ {}", e.notice());
            summary.outcomes.push(DetectOutcome::Failed { file_name: None, notice: e.notice() });
        }
        return Ok(summary);
    }

    for path in images {
        let image = match image_file::open_image(path) {
            Ok(image) => image,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "image rejected");
                eprintln!("✖ {}", e);
                summary.outcomes.push(DetectOutcome::Failed {
                    file_name: Some(path.display().to_string()),
                    notice: e.to_string(),
                });
                continue;
            }
        };

        let preview = image.preview_url();
        state.select(image, preview);

        let file = match state.begin_submit() {
            Ok(file) => file,
            Err(e) => {
                eprintln!("✖ {}", e.notice());
                summary.outcomes.push(DetectOutcome::Failed { file_name: None, notice: e.notice() });
                continue;
            }
        };

        info!(file = %file.file_name, url = %client.endpoint().upload_url(), "submitting image");
        let spinner = processing_spinner(&file.file_name);
        let outcome = client.upload(&file).await;
        spinner.finish_and_clear();

        match state.complete(outcome) {
            Ok(completion) => {
                println!("✔ {}", file.file_name);
                println!("  Detection Result: {}", state.result_text());
                if let Some(url) = state.displayed_image_url() {
                    println!("  Image: {}", url);
                }
                summary.outcomes.push(DetectOutcome::Detected {
                    file_name: file.file_name,
                    detection: completion.detection,
                });
            }
            Err(e) => {
                warn!(file = %file.file_name, error = %e, "error uploading file");
                let notice = e.notice();
                eprintln!("✖ {}: {}", file.file_name, notice);
                summary.outcomes.push(DetectOutcome::Failed {
                    file_name: Some(file.file_name),
                    notice,
                });
            }
        }
    }

    Ok(summary)
}

/// 送信中だけ表示するスピナー（端末でなければ描画されない）
fn processing_spinner(file_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("Processing... {}", file_name));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
