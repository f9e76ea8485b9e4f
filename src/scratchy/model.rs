/// Destination document named by a tag, e.g. `/intro/getting_started`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputPath(String);

impl OutputPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits at the last `/` into (directory, leaf).
    ///
    /// A path without any `/` has an empty directory part.
    pub fn split(&self) -> (&str, &str) {
        match self.0.rfind('/') {
            Some(idx) => (&self.0[..idx], &self.0[idx + 1..]),
            None => ("", &self.0),
        }
    }
}

/// Priority token captured verbatim from a tag.
///
/// Keys compare as plain strings, so `10` sorts before `2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey(String);

impl OrderKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

/// Lines captured from one contiguous tagged block, each ending in `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    pub lines: Vec<String>,
}

impl Chunk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, text: &str) {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The chunk exactly as it will be written.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// One tagged block found by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub path: OutputPath,
    pub order: OrderKey,
    pub chunk: Chunk,
}

impl Fragment {
    pub fn new(path: OutputPath, order: OrderKey) -> Self {
        Self {
            path,
            order,
            chunk: Chunk::new(),
        }
    }
}
