//! rm.sh / sync.sh 生成：每条记录写一行注释加一条命令，文件以追加方式逐条打开、写入、关闭。

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use s3_listing_common::{ListingError, ScriptMode};
use s3_listing_domain::{ObjectRecord, ScriptCommand};

pub struct ScriptWriter {
    dir: PathBuf,
    bucket: String,
    sync_dest: String,
}

impl ScriptWriter {
    pub fn new(dir: impl Into<PathBuf>, bucket: impl Into<String>, sync_dest: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            bucket: bucket.into(),
            sync_dest: sync_dest.into(),
        }
    }

    pub fn script_path(&self, command: ScriptCommand) -> PathBuf {
        self.dir.join(command.script_name())
    }

    /// Fresh 模式下删除已有脚本；Append 保留
    pub fn prepare(&self, mode: ScriptMode) -> Result<(), ListingError> {
        if mode != ScriptMode::Fresh {
            return Ok(());
        }
        for command in ScriptCommand::ALL {
            let path = self.script_path(command);
            match fs::remove_file(&path) {
                Ok(()) => log::info!("Deleted file: {}", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::info!("File does not exist: {}", path.display())
                }
                Err(source) => return Err(ListingError::Artifact { path, source }),
            }
        }
        Ok(())
    }

    /// 把 `# <报告行>` 与对应命令追加到两个脚本
    pub fn append(&self, record: &ObjectRecord, report_line: &str) -> Result<(), ListingError> {
        for command in ScriptCommand::ALL {
            let content = format!(
                "# {}\n{}\n",
                report_line,
                command.render(&record.filename, &self.bucket, &self.sync_dest)
            );
            append_to_file(&self.script_path(command), &content)?;
        }
        Ok(())
    }
}

fn append_to_file(path: &Path, content: &str) -> Result<(), ListingError> {
    let artifact_err = |source| ListingError::Artifact {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(artifact_err)?;
    file.write_all(content.as_bytes()).map_err(artifact_err)
}
