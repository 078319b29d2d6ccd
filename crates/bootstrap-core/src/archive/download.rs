//! Streaming archive download
//!
//! The response body is written chunk-by-chunk to the destination file, so
//! archives of any size are supported without buffering them in memory and a
//! slow disk naturally throttles the read side. No retry, no resumption: a
//! failed download may leave a partial file behind, which the pipeline
//! treats as fatal.

use crate::error::{DownloadError, Error, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Stream `url` into the file at `dest`. A non-success HTTP status is a
/// download failure like any network fault.
pub async fn download(client: &reqwest::Client, url: &Url, dest: &Path) -> Result<()> {
    stream_to_file(client, url, dest)
        .await
        .map_err(|source| Error::Download {
            url: url.clone(),
            source,
        })
}

async fn stream_to_file(
    client: &reqwest::Client,
    url: &Url,
    dest: &Path,
) -> Result<(), DownloadError> {
    let mut response = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?;

    let mut file = File::create(dest).await.map_err(DownloadError::Write)?;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(DownloadError::Write)?;
    }
    file.flush().await.map_err(DownloadError::Write)?;

    Ok(())
}
