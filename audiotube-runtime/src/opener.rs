use async_trait::async_trait;
use audiotube_engine::traits::LinkOpener;

/// Opens links with the platform's default handler.
#[derive(Debug, Default)]
pub struct SystemOpener;

#[async_trait]
impl LinkOpener for SystemOpener {
    async fn open(&self, link: &str) -> anyhow::Result<()> {
        #[cfg(target_os = "windows")]
        let mut cmd = {
            let mut c = tokio::process::Command::new("cmd");
            c.args(["/C", "start", "", link]);
            c
        };

        #[cfg(target_os = "macos")]
        let mut cmd = {
            let mut c = tokio::process::Command::new("open");
            c.arg(link);
            c
        };

        #[cfg(all(unix, not(target_os = "macos")))]
        let mut cmd = {
            let mut c = tokio::process::Command::new("xdg-open");
            c.arg(link);
            c
        };

        let output = cmd.output().await?;
        if !output.status.success() {
            anyhow::bail!(
                "opening link failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        log::info!("opened link in browser: {link}");
        Ok(())
    }
}
