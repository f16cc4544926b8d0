//! Print a parsed post

use anyhow::Result;

use crate::MdPost;

/// Fetch and parse a post, printing its title and content
pub async fn run(app: &MdPost, path: &str, json: bool) -> Result<()> {
    let post = app.parse(path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{}", post.title);
        println!();
        println!("{}", post.content.trim_end());
    }

    Ok(())
}
