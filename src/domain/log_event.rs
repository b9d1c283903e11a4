//! Structured log event vocabulary.
//!
//! Log events carry a fixed `stack` / `level` / `package` classification.
//! Stacks and levels are open to any combination, but packages are scoped:
//! some are backend-only, some frontend-only, and a small set is shared.
//! [`LogEvent::new`] rejects out-of-scope combinations so malformed events
//! never reach the sink.

/// Originating stack of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stack {
    Backend,
    Frontend,
}

impl Stack {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
        }
    }
}

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

/// Logical component a log event originates from.
///
/// Backend-only: `Cache`, `Controller`, `CronJob`, `Db`, `Domain`, `Handler`,
/// `Repository`, `Route`, `Service`. Frontend-only: `Api`, `Component`,
/// `Hook`, `Page`, `State`, `Style`. Shared: `Auth`, `Config`, `Middleware`,
/// `Utils`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Package {
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
    Auth,
    Config,
    Middleware,
    Utils,
}

impl Package {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Controller => "controller",
            Self::CronJob => "cron_job",
            Self::Db => "db",
            Self::Domain => "domain",
            Self::Handler => "handler",
            Self::Repository => "repository",
            Self::Route => "route",
            Self::Service => "service",
            Self::Api => "api",
            Self::Component => "component",
            Self::Hook => "hook",
            Self::Page => "page",
            Self::State => "state",
            Self::Style => "style",
            Self::Auth => "auth",
            Self::Config => "config",
            Self::Middleware => "middleware",
            Self::Utils => "utils",
        }
    }

    fn is_backend_only(self) -> bool {
        matches!(
            self,
            Self::Cache
                | Self::Controller
                | Self::CronJob
                | Self::Db
                | Self::Domain
                | Self::Handler
                | Self::Repository
                | Self::Route
                | Self::Service
        )
    }

    fn is_frontend_only(self) -> bool {
        matches!(
            self,
            Self::Api | Self::Component | Self::Hook | Self::Page | Self::State | Self::Style
        )
    }

    /// Returns true if this package may appear in events from `stack`.
    pub fn allowed_for(self, stack: Stack) -> bool {
        match stack {
            Stack::Backend => !self.is_frontend_only(),
            Stack::Frontend => !self.is_backend_only(),
        }
    }
}

/// Errors raised when a log event fails vocabulary validation.
#[derive(Debug, thiserror::Error)]
pub enum LogEventError {
    #[error("Package '{package}' cannot be used with the {stack} stack")]
    PackageNotAllowed {
        package: &'static str,
        stack: &'static str,
    },

    #[error("Message must be a non-empty string")]
    EmptyMessage,
}

/// A validated structured log event.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEvent {
    /// Builds a log event, rejecting out-of-scope package/stack combinations
    /// and empty messages. The message is stored trimmed.
    pub fn new(
        stack: Stack,
        level: Level,
        package: Package,
        message: impl Into<String>,
    ) -> Result<Self, LogEventError> {
        if !package.allowed_for(stack) {
            return Err(LogEventError::PackageNotAllowed {
                package: package.as_str(),
                stack: stack.as_str(),
            });
        }

        let message = message.into();
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(LogEventError::EmptyMessage);
        }

        Ok(Self {
            stack,
            level,
            package,
            message: trimmed.to_string(),
        })
    }
}
