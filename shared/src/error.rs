use std::fmt;

// =========================================================
// 错误类别枚举
// =========================================================

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistErrorKind {
    /// 存储读写失败（配额超限、写入被拒绝等）
    Storage,
    /// 存储不可用（无 window / localStorage 被禁用）
    Unavailable,
    /// JSON 解析或序列化错误
    Serialization,
    /// DOM 操作失败
    Dom,
}

impl WishlistErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            WishlistErrorKind::Storage => "STORAGE_ERROR",
            WishlistErrorKind::Unavailable => "STORAGE_UNAVAILABLE",
            WishlistErrorKind::Serialization => "JSON_PARSE_ERROR",
            WishlistErrorKind::Dom => "DOM_ERROR",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 错误发生时的操作片段，如 `store.save(wishlist)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    pub operation: String,
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 心愿单错误
///
/// - kind: 错误类别
/// - message: 错误消息
/// - source: 原始错误（可选）
/// - spans: 调用追踪栈
#[derive(Debug)]
pub struct WishlistError {
    pub kind: WishlistErrorKind,
    pub message: String,
    source: Option<Box<dyn std::error::Error + 'static>>,
    spans: Vec<ErrorSpan>,
}

impl WishlistError {
    pub fn new(kind: WishlistErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(WishlistErrorKind::Storage, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(WishlistErrorKind::Unavailable, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(WishlistErrorKind::Serialization, message)
    }

    // --- Context builders ---

    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    pub fn with_source<E: std::error::Error + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }
}

impl fmt::Display for WishlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for WishlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref()
    }
}

impl From<serde_json::Error> for WishlistError {
    fn from(e: serde_json::Error) -> Self {
        let message = e.to_string();
        WishlistError::serialization(message).with_source(e)
    }
}

pub type WishlistResult<T> = std::result::Result<T, WishlistError>;
