use crate::error::{AppError, AppResult};
use crate::models::Transcript;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};

/// 从文本文件加载待评分文本
pub async fn load_transcript_file(path: &Path) -> AppResult<Transcript> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file(path, e))?;

    tracing::info!(
        "已读取文本文件: {} ({} 字节)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        content.len()
    );

    Ok(Transcript::new(content))
}

/// 读取整个输入流（通常是 stdin）作为待评分文本
pub async fn read_transcript<R>(mut reader: R) -> AppResult<Transcript>
where
    R: AsyncRead + Unpin,
{
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .await
        .map_err(|e| AppError::file("<stdin>", e))?;
    Ok(Transcript::new(content))
}
