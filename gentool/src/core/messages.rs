//! Message codes shared by every tool.
//!
//! Each code has a stable identifier (logged alongside the text so failures
//! can be grepped) and a template with positional `{0}`, `{1}`, ...
//! placeholders.

use std::fmt;

/// Named message kinds emitted by tools and services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgType {
    /// `process()` reported `false`.
    ProcessFailed,
    /// `process()` completed successfully.
    ProcessSucceeded,
    /// `process()` raised a message-coded error.
    ProcessAborted,
    /// `process()` raised a validation error.
    ProcessRejected,
    /// `process()` raised an unclassified error.
    ProcessUnexpected,
    /// `execute()` was called before a successful `initialize()`.
    NotInitialized,
    /// `execute()` was called on a tool that already finished.
    AlreadyExecuted,
    /// The service declined initialization.
    InitializeFailed,
    /// The service raised an error during initialization.
    InitializeAborted,

    /// Input-only service declined the input file.
    InputInitializeFailed,
    /// Input-only processing completed.
    InputProcessSucceeded,

    /// Mapping input did not contain a target path and mapping lines.
    MappingInputInvalid,
    /// Mapping substitution completed.
    MapTransformSucceeded,
    /// Tag-setter input could not be loaded.
    TargetLoadFailed,
    /// Tag-setter input loaded but produced no content.
    TargetContentMissing,
    /// Tag setting completed.
    TagSetSucceeded,

    InputFileNotFound,
    TemplateFileNotFound,
    TargetNotFound,
    FileReadFailed,
    FileWriteFailed,
    ServiceNotInitialized,
    PatternBuildFailed,

    EmptyMappingKey,
    EmptyTemplate,
}

impl MsgType {
    /// Stable identifier for this message.
    pub fn code(self) -> &'static str {
        match self {
            MsgType::ProcessFailed => "GEN09000",
            MsgType::ProcessSucceeded => "GEN09001",
            MsgType::ProcessAborted => "GEN09002",
            MsgType::ProcessRejected => "GEN09003",
            MsgType::ProcessUnexpected => "GEN09004",
            MsgType::NotInitialized => "GEN09005",
            MsgType::AlreadyExecuted => "GEN09006",
            MsgType::InitializeFailed => "LOG15000",
            MsgType::InitializeAborted => "LOG15001",
            MsgType::InputInitializeFailed => "GEN12003",
            MsgType::InputProcessSucceeded => "GEN12004",
            MsgType::MappingInputInvalid => "GEN19000",
            MsgType::MapTransformSucceeded => "GEN19001",
            MsgType::TargetLoadFailed => "GEN13004",
            MsgType::TargetContentMissing => "GEN13009",
            MsgType::TagSetSucceeded => "GEN13005",
            MsgType::InputFileNotFound => "GEN07000",
            MsgType::TemplateFileNotFound => "GEN07001",
            MsgType::TargetNotFound => "GEN07002",
            MsgType::FileReadFailed => "GEN07003",
            MsgType::FileWriteFailed => "GEN07004",
            MsgType::ServiceNotInitialized => "GEN07005",
            MsgType::PatternBuildFailed => "GEN07006",
            MsgType::EmptyMappingKey => "VAL01000",
            MsgType::EmptyTemplate => "VAL01001",
        }
    }

    /// Message template with positional placeholders.
    pub fn template(self) -> &'static str {
        match self {
            MsgType::ProcessFailed => "process failed",
            MsgType::ProcessSucceeded => "process completed successfully",
            MsgType::ProcessAborted => "process aborted: {0}",
            MsgType::ProcessRejected => "validation failed with {0} item(s)",
            MsgType::ProcessUnexpected => "unexpected error during processing: {0}",
            MsgType::NotInitialized => "tool is not initialized; skipping process",
            MsgType::AlreadyExecuted => "tool has already been executed",
            MsgType::InitializeFailed => "initialization failed",
            MsgType::InitializeAborted => "initialization aborted: {0}",
            MsgType::InputInitializeFailed => "failed to initialize from the input file",
            MsgType::InputProcessSucceeded => "input processing completed successfully",
            MsgType::MappingInputInvalid => {
                "mapping input needs a target path line followed by mapping lines"
            }
            MsgType::MapTransformSucceeded => "mapping transform completed successfully",
            MsgType::TargetLoadFailed => "failed to load the target path from the input file",
            MsgType::TargetContentMissing => "input file produced no content",
            MsgType::TagSetSucceeded => "tag setting completed successfully",
            MsgType::InputFileNotFound => "input file does not exist: {0}",
            MsgType::TemplateFileNotFound => "template file does not exist: {0}",
            MsgType::TargetNotFound => "target path does not exist: {0}",
            MsgType::FileReadFailed => "failed to read {0}",
            MsgType::FileWriteFailed => "failed to write {0}",
            MsgType::ServiceNotInitialized => "{0} used before initialization",
            MsgType::PatternBuildFailed => "failed to build replacement pattern",
            MsgType::EmptyMappingKey => "mapping key is empty (value '{0}')",
            MsgType::EmptyTemplate => "template file is empty: {0}",
        }
    }

    /// Render the template, substituting `{i}` with `args[i]`.
    ///
    /// Placeholders without a matching argument are left as-is.
    pub fn render(self, args: &[&str]) -> String {
        let mut out = self.template().to_string();
        for (idx, arg) in args.iter().enumerate() {
            out = out.replace(&format!("{{{idx}}}"), arg);
        }
        out
    }

    /// Rendered text prefixed with the code, as written to the log.
    pub fn line(self, args: &[&str]) -> String {
        format!("[{}] {}", self.code(), self.render(args))
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_positional_args() {
        let msg = MsgType::InputFileNotFound.render(&["work/io/input.txt"]);
        assert_eq!(msg, "input file does not exist: work/io/input.txt");
    }

    #[test]
    fn render_leaves_missing_placeholders() {
        let msg = MsgType::ProcessAborted.render(&[]);
        assert_eq!(msg, "process aborted: {0}");
    }

    #[test]
    fn line_prefixes_code() {
        assert_eq!(
            MsgType::ProcessFailed.line(&[]),
            "[GEN09000] process failed"
        );
    }

    #[test]
    fn display_is_code() {
        assert_eq!(MsgType::ProcessFailed.to_string(), "GEN09000");
    }
}
