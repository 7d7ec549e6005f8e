/// 为每个对象生成的 shell 命令（只生成文本，不执行）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Remove,
    Sync,
}

impl ScriptCommand {
    pub const ALL: [ScriptCommand; 2] = [ScriptCommand::Remove, ScriptCommand::Sync];

    /// 命令追加到的脚本文件名
    pub fn script_name(&self) -> &'static str {
        match self {
            Self::Remove => "rm.sh",
            Self::Sync => "sync.sh",
        }
    }

    pub fn render(&self, filename: &str, bucket: &str, sync_dest: &str) -> String {
        match self {
            Self::Remove => format!(
                "aws s3 rm {}",
                shell_quote(&format!("s3://{}/{}", bucket, filename))
            ),
            Self::Sync => format!(
                "aws s3 sync {} {} --exclude='*' --include={}",
                shell_quote(&format!("s3://{}", bucket)),
                sync_dest,
                shell_quote(filename)
            ),
        }
    }
}

/// 单引号包裹；内部的 `'` 转成 `'"'"'`
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain.mp4"), "'plain.mp4'");
        assert_eq!(shell_quote("it's.mp4"), r#"'it'"'"'s.mp4'"#);
    }

    #[test]
    fn test_render_remove() {
        let cmd = ScriptCommand::Remove.render("my video.mp4", "bucket", "/tmp/video");
        assert_eq!(cmd, "aws s3 rm 's3://bucket/my video.mp4'");
    }

    #[test]
    fn test_render_sync() {
        let cmd = ScriptCommand::Sync.render("it's.mp4", "bucket", "/tmp/video");
        assert_eq!(
            cmd,
            r#"aws s3 sync 's3://bucket' /tmp/video --exclude='*' --include='it'"'"'s.mp4'"#
        );
    }

    #[test]
    fn test_script_names() {
        assert_eq!(ScriptCommand::Remove.script_name(), "rm.sh");
        assert_eq!(ScriptCommand::Sync.script_name(), "sync.sh");
    }
}
