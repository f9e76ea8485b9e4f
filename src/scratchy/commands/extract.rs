//! The extraction pipeline: scan → parse → store → write.
//!
//! Everything lives in a [`RunContext`] built for one call and dropped when it
//! returns, so separate runs share no state. Files are handled one at a time in
//! scan order; the writer only starts once every file has been parsed.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::ExtractConfig;
use crate::error::{Result, ScratchyError};
use crate::parser::BlockParser;
use crate::scanner::scan;
use crate::store::FragmentStore;
use crate::writer::Writer;
use std::fs;
use std::path::Path;

struct RunContext<'a> {
    config: &'a ExtractConfig,
    store: FragmentStore,
    result: CmdResult,
}

impl<'a> RunContext<'a> {
    fn new(config: &'a ExtractConfig) -> Self {
        Self {
            config,
            store: FragmentStore::new(),
            result: CmdResult::default(),
        }
    }

    fn parse_file(&mut self, file: &Path) -> Result<()> {
        let bytes = fs::read(file).map_err(|e| ScratchyError::file(file, e))?;
        let source = String::from_utf8_lossy(&bytes);
        BlockParser::new(&self.config.markers).parse_into(&source, &mut self.store);

        self.result.processed.push(file.to_path_buf());
        self.result
            .add_message(CmdMessage::info(format!("Processed: {}", file.display())));
        Ok(())
    }

    fn write(mut self) -> Result<CmdResult> {
        let writer = Writer::new(&self.config.output, &self.config.extension);
        let report = writer.write(&self.store)?;

        for target in &report.skipped {
            self.result.add_message(CmdMessage::warning(format!(
                "{} already exists, not overwriting",
                target.display()
            )));
        }
        for target in &report.written {
            self.result
                .add_message(CmdMessage::success(format!("Wrote: {}", target.display())));
        }
        self.result.add_message(CmdMessage::info(format!(
            "Wrote {} file(s), skipped {}.",
            report.written.len(),
            report.skipped.len()
        )));

        Ok(self
            .result
            .with_written(report.written)
            .with_skipped(report.skipped))
    }
}

pub fn run(config: &ExtractConfig) -> Result<CmdResult> {
    let mut ctx = RunContext::new(config);

    let found = scan(&config.pattern)?;
    ctx.result.matched = found.matched;
    ctx.result.add_message(CmdMessage::info(format!(
        "{} paths matched. Processing.",
        found.matched
    )));

    for file in &found.files {
        ctx.parse_file(file)?;
    }

    ctx.write()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, ExtractConfig) {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        for (name, content) in files {
            fs::write(src.join(name), content).unwrap();
        }
        let config = ExtractConfig::new(
            vec![format!("{}/*.js", src.display())],
            temp.path().join("docs"),
        );
        (temp, config)
    }

    #[test]
    fn test_end_to_end_example() {
        let (temp, config) = setup(&[(
            "a.js",
            "/** @scratch /a/b/1\n * hello\n * world\n */\nvar x = 1;\n",
        )]);

        let result = run(&config).unwrap();

        let target = temp.path().join("docs").join("a").join("b.txt");
        assert_eq!(fs::read_to_string(target).unwrap(), "hello\nworld\n");
        assert_eq!(result.matched, 1);
        assert_eq!(result.processed.len(), 1);
        assert_eq!(result.written.len(), 1);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_same_key_across_files_keeps_scan_order() {
        let (temp, config) = setup(&[
            ("1.js", "/** @scratch /guide/3\n * from one\n */"),
            ("2.js", "/** @scratch /guide/3\n * from two\n */"),
        ]);

        run(&config).unwrap();

        let out = fs::read_to_string(temp.path().join("docs").join("guide.txt")).unwrap();
        assert_eq!(out, "from one\nfrom two\n");
    }

    #[test]
    fn test_order_keys_beat_scan_order() {
        let (temp, config) = setup(&[
            ("1.js", "/** @scratch /a/welcome/2\n * second\n */"),
            ("2.js", "/** @scratch /a/welcome/1\n * first\n */"),
        ]);

        run(&config).unwrap();

        let out = fs::read_to_string(temp.path().join("docs").join("a").join("welcome.txt"))
            .unwrap();
        assert_eq!(out, "first\nsecond\n");
    }

    #[test]
    fn test_order_tokens_keep_trailing_text_and_sort_as_strings() {
        let (temp, config) = setup(&[(
            "a.js",
            "/** @scratch /doc/1 \n * first\n */\n\
/** @scratch /doc/2\n * second\n */\n\
/** @scratch /doc/10\n * tenth\n */\n",
        )]);

        run(&config).unwrap();

        let out = fs::read_to_string(temp.path().join("docs").join("doc.txt")).unwrap();
        assert_eq!(out, "first\ntenth\nsecond\n");
    }

    #[test]
    fn test_rerun_skips_existing_and_keeps_bytes() {
        let (temp, config) = setup(&[("a.js", "/** @scratch /a/b/1\n * hello\n */")]);
        run(&config).unwrap();

        let target = temp.path().join("docs").join("a").join("b.txt");
        fs::write(&target, "edited by hand\n").unwrap();

        let result = run(&config).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "edited by hand\n");
        assert!(result.written.is_empty());
        assert_eq!(result.skipped.len(), 1);
        assert!(result.messages.iter().any(|m| m.level == MessageLevel::Warning
            && m.content.ends_with("already exists, not overwriting")));
    }

    #[test]
    fn test_messages_report_progress() {
        let (_temp, config) = setup(&[("a.js", "/** @scratch /x/0\n * x\n */")]);

        let result = run(&config).unwrap();

        let contents: Vec<&str> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents[0], "1 paths matched. Processing.");
        assert!(contents[1].starts_with("Processed: "));
        assert!(contents[2].starts_with("Wrote: "));
        assert_eq!(contents[3], "Wrote 1 file(s), skipped 0.");
    }

    #[test]
    fn test_no_tagged_blocks_writes_nothing() {
        let (temp, config) = setup(&[("a.js", "/** plain\n * comment\n */")]);

        let result = run(&config).unwrap();

        assert!(result.written.is_empty());
        assert!(!temp.path().join("docs").exists());
    }

    #[test]
    fn test_non_utf8_source_is_read_lossily() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("bin.js");
        let mut bytes = b"/** @scratch /x/0\n * caf".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"\n */\n");
        fs::write(&src, bytes).unwrap();

        let config = ExtractConfig::new(vec![src.display().to_string()], temp.path().join("out"));
        run(&config).unwrap();

        let out = fs::read_to_string(temp.path().join("out").join("x.txt")).unwrap();
        assert_eq!(out, "caf\u{FFFD}\n");
    }
}
