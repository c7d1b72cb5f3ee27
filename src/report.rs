//! Reports printed after the push
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::remote::web_url;

/// Where the project is deployed after the push
#[derive(
    clap::ValueEnum, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    /// Streamlit Community Cloud
    #[default]
    Streamlit,
    /// Railway
    Railway,
}

impl std::fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployTarget::Streamlit => write!(f, "Streamlit Cloud"),
            DeployTarget::Railway => write!(f, "Railway"),
        }
    }
}

/// Values interpolated in the reports
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// GitHub username
    pub username: &'a str,
    /// Repository name
    pub repo_name: &'a str,
    /// Pushed branch
    pub branch: &'a str,
    /// Remote URL
    pub remote_url: &'a str,
    /// Entry point of the app
    pub app_file: &'a str,
    /// Deployment target
    pub target: DeployTarget,
}

impl ReportContext<'_> {
    /// Next steps to deploy the pushed repository
    pub fn next_steps(&self) -> [String; 5] {
        let full_name = format!("{}/{}", self.username, self.repo_name);
        match self.target {
            DeployTarget::Streamlit => [
                "Go to https://share.streamlit.io".to_string(),
                "Sign in with your GitHub account".to_string(),
                format!("Click 'New app' and select {full_name}"),
                format!(
                    "Set the branch to '{}' and the main file path to '{}'",
                    self.branch, self.app_file
                ),
                "Click 'Deploy!'".to_string(),
            ],
            DeployTarget::Railway => [
                "Go to https://railway.app".to_string(),
                "Sign in with your GitHub account".to_string(),
                format!("Click 'New Project' > 'Deploy from GitHub repo' and select {full_name}"),
                format!(
                    "Set the start command to 'streamlit run {} --server.port $PORT --server.address 0.0.0.0'",
                    self.app_file
                ),
                "Open Settings > Networking and generate a public domain".to_string(),
            ],
        }
    }

    /// Things to check when the push failed
    pub fn checklist(&self) -> [String; 3] {
        [
            format!(
                "The repository exists on GitHub: {}",
                web_url(self.username, self.repo_name)
            ),
            "You are authenticated (SSH key added to GitHub, or 'gh auth login')".to_string(),
            format!("The remote URL is correct: {}", self.remote_url),
        ]
    }
}

/// Write the success banner and the next steps
/// # Errors
/// Error if the writer fails
pub fn write_success<W: Write>(out: &mut W, ctx: &ReportContext<'_>) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✅ Successfully pushed to GitHub!")?;
    writeln!(
        out,
        "Repository: {}",
        web_url(ctx.username, ctx.repo_name)
    )?;
    writeln!(out)?;
    writeln!(out, "Next steps to deploy on {}:", ctx.target)?;
    for (idx, step) in ctx.next_steps().iter().enumerate() {
        writeln!(out, "{}. {step}", idx + 1)?;
    }
    Ok(())
}

/// Write the failure banner and the checklist
/// # Errors
/// Error if the writer fails
pub fn write_failure<W: Write>(out: &mut W, ctx: &ReportContext<'_>) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "❌ Failed to push to GitHub.")?;
    writeln!(out, "Please check:")?;
    for item in ctx.checklist() {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn ctx(target: DeployTarget) -> ReportContext<'static> {
        ReportContext {
            username: "alice",
            repo_name: "dashboard",
            branch: "main",
            remote_url: "https://github.com/alice/dashboard.git",
            app_file: "app.py",
            target,
        }
    }

    fn render_success(target: DeployTarget) -> String {
        let mut out = Vec::new();
        write_success(&mut out, &ctx(target)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn success_streamlit() {
        let text = render_success(DeployTarget::Streamlit);
        assert!(text.contains("✅ Successfully pushed to GitHub!"));
        assert!(text.contains("Repository: https://github.com/alice/dashboard"));
        assert!(text.contains("Next steps to deploy on Streamlit Cloud:"));
        assert!(text.contains("3. Click 'New app' and select alice/dashboard"));
        assert!(text.contains("5. Click 'Deploy!'"));
        assert!(!text.contains("6."));
        assert!(!text.contains("❌"));
    }

    #[test]
    fn success_railway() {
        let text = render_success(DeployTarget::Railway);
        assert!(text.contains("Next steps to deploy on Railway:"));
        assert!(text.contains("streamlit run app.py --server.port $PORT"));
        assert!(text.contains("5. Open Settings > Networking"));
    }

    #[test]
    fn failure_checklist() {
        let mut out = Vec::new();
        write_failure(&mut out, &ctx(DeployTarget::Streamlit)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("❌ Failed to push to GitHub."));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 3);
        assert!(text.contains("The remote URL is correct: https://github.com/alice/dashboard.git"));
        assert!(!text.contains("Next steps"));
    }
}
