//! Render a post into a standalone HTML page

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::PostView;
use crate::templates::PageRenderer;
use crate::MdPost;

/// Render a post page. A failed post still produces the placeholder page,
/// after which the failure is returned.
pub async fn run(app: &MdPost, path: &str, output: Option<&Path>) -> Result<()> {
    let result = app.parse(path).await;
    let view = PostView::from(&result);

    let page = PageRenderer::new(app.config.highlight.clone()).render(&view);

    match output {
        Some(out) => {
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(out, &page)?;
            tracing::info!("Wrote {:?}", out);
        }
        None => print!("{}", page),
    }

    result?;
    Ok(())
}
