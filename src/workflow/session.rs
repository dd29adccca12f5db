//! 会话状态
//!
//! 保存最近一次成功提交的原文和评分结果，供导出使用

use crate::models::{ScoreResult, Transcript};

/// 一次成功的评分：原文和结果总是成对保存
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTranscript {
    pub transcript: Transcript,
    pub result: ScoreResult,
}

/// 评分会话
#[derive(Debug, Default)]
pub struct ScoreSession {
    last: Option<ScoredTranscript>,
}

impl ScoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新的提交开始时清空，保证导出的永远是最近一次提交的结果
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// 覆盖保存（后写入者为准）
    pub fn store(&mut self, transcript: Transcript, result: ScoreResult) {
        self.last = Some(ScoredTranscript { transcript, result });
    }

    pub fn last(&self) -> Option<&ScoredTranscript> {
        self.last.as_ref()
    }

    /// 是否可以导出报告
    pub fn can_export(&self) -> bool {
        self.last.is_some()
    }
}
