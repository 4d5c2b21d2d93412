use std::path::PathBuf;

use crate::app::{AppContext, Result};
use crate::domain::{Submission, SummaryFormat};
use crate::export;

/// One-shot summarization: validate, call the backend, print the result in
/// the requested format, optionally write the export document.
pub async fn summarize(
    ctx: &AppContext,
    url: &str,
    format: SummaryFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let submission = Submission::parse(url, format)?;

    println!("Summarizing: {}", submission.url);
    let result = ctx
        .client
        .generate_summary(&submission.url, submission.format)
        .await?;

    if result.is_backend_error() {
        eprintln!("{}", result.summary);
        eprintln!("Try another video with available captions.");
        return Ok(());
    }

    println!("Title: {}", result.video_title);
    println!();

    match format {
        SummaryFormat::Bullets => {
            for point in result.bullet_points() {
                println!("  • {}", point);
            }
        }
        SummaryFormat::Paragraph => {
            println!("{}", result.summary);
        }
    }

    if let Some(dir) = output {
        let path = export::write_summary(&result, &dir)?;
        println!();
        println!("Saved to {}", path.display());
    }

    Ok(())
}

/// Show or toggle the persisted theme preference.
pub fn theme(ctx: &AppContext, toggle: bool) -> Result<()> {
    let dark = if toggle {
        ctx.theme.toggle()?
    } else {
        ctx.theme.is_dark()
    };

    println!("Theme: {}", if dark { "dark" } else { "light" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::client::{ClientError, SummaryClient};
    use crate::config::Config;
    use crate::domain::SummaryResult;
    use crate::theme::ThemeStore;

    /// Client double that records calls and replays a canned outcome.
    struct FakeClient {
        calls: Mutex<Vec<(String, SummaryFormat)>>,
        outcome: fn() -> std::result::Result<SummaryResult, ClientError>,
    }

    #[async_trait]
    impl SummaryClient for FakeClient {
        async fn generate_summary(
            &self,
            url: &str,
            format: SummaryFormat,
        ) -> std::result::Result<SummaryResult, ClientError> {
            self.calls.lock().unwrap().push((url.to_string(), format));
            (self.outcome)()
        }
    }

    fn ctx_with(
        dir: &TempDir,
        outcome: fn() -> std::result::Result<SummaryResult, ClientError>,
    ) -> (AppContext, Arc<FakeClient>) {
        let client = Arc::new(FakeClient {
            calls: Mutex::new(Vec::new()),
            outcome,
        });
        let ctx = AppContext::with_parts(
            Config::default(),
            client.clone(),
            ThemeStore::with_path(dir.path().join("dark_mode")),
        );
        (ctx, client)
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_client() {
        let dir = TempDir::new().unwrap();
        let (ctx, client) = ctx_with(&dir, || {
            panic!("client must not be invoked for invalid input")
        });

        let err = summarize(&ctx, "https://vimeo.com/1", SummaryFormat::Bullets, None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please enter a valid YouTube URL");
        assert!(client.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_valid_url_is_submitted_trimmed() {
        let dir = TempDir::new().unwrap();
        let (ctx, client) = ctx_with(&dir, || {
            Ok(SummaryResult {
                summary: "point".into(),
                video_title: "Title".into(),
                video_url: "https://youtu.be/abc".into(),
            })
        });

        summarize(
            &ctx,
            "  https://youtu.be/abc ",
            SummaryFormat::Paragraph,
            None,
        )
        .await
        .unwrap();

        let calls = client.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("https://youtu.be/abc".to_string(), SummaryFormat::Paragraph)]
        );
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_message() {
        let dir = TempDir::new().unwrap();
        let (ctx, _) = ctx_with(&dir, || Err(ClientError::Backend("no captions".into())));

        let err = summarize(
            &ctx,
            "https://youtu.be/abc",
            SummaryFormat::Bullets,
            None,
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "no captions");
    }

    #[tokio::test]
    async fn test_output_writes_export_document() {
        let dir = TempDir::new().unwrap();
        let (ctx, _) = ctx_with(&dir, || {
            Ok(SummaryResult {
                summary: "point".into(),
                video_title: "Title".into(),
                video_url: "https://youtu.be/abc".into(),
            })
        });

        summarize(
            &ctx,
            "https://youtu.be/abc",
            SummaryFormat::Bullets,
            Some(dir.path().to_path_buf()),
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("title_summary.txt")).unwrap();
        assert_eq!(written, "Summary of: Title\n\npoint");
    }
}
