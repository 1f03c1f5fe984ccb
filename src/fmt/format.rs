//! Line templates for the text formatter: `"{timestamp} [{level}] {msg}{fields}"`
//! is parsed once into segments and rendered per entry.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Level,
    Msg,
    Fields,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::Msg => "msg",
            Self::Fields => "fields",
        }
    }

    pub const ALL: &'static [Self] = &[Self::Timestamp, Self::Level, Self::Msg, Self::Fields];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed template. Parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    pub const DEFAULT: &'static str = "{timestamp} [{level}] {msg}{fields}";

    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            if let Some(ph) = Self::match_placeholder(name) {
                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }
                segments.push(FormatSegment::Placeholder(ph));
            } else {
                current.push_str(&rest[open..=close]);
            }
            rest = &rest[close + 1..];
        }
        current.push_str(rest);

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => result.push_str(match ph {
                    Placeholder::Timestamp => &values.timestamp,
                    Placeholder::Level => &values.level,
                    Placeholder::Msg => &values.msg,
                    Placeholder::Fields => &values.fields,
                }),
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}

/// One field per placeholder, so a template can never reference a value that doesn't exist.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub timestamp: String,
    pub level: String,
    pub msg: String,
    /// Pre-rendered ` key=value` pairs, each with a leading space; empty when the entry has none.
    pub fields: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    #[must_use]
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = fields.into();
        self
    }
}
