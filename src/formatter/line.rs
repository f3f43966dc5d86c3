/// Separator line recognized by the host
pub const SEPARATOR: &str = "---";

/// One line of host output with its display attributes.
///
/// Renders as the bare text when there are no attributes, otherwise as
/// `text | key=value key=value` with attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub params: Vec<(&'static str, String)>,
}

impl DisplayLine {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    pub fn separator() -> Self {
        Self::new(SEPARATOR)
    }

    pub fn param<V: ToString>(mut self, key: &'static str, value: V) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn size(self, size: u32) -> Self {
        self.param("size", size)
    }

    pub fn color(self, color: &str) -> Self {
        self.param("color", color)
    }

    pub fn href(self, href: &str) -> Self {
        self.param("href", href)
    }

    pub fn is_separator(&self) -> bool {
        self.text == SEPARATOR && self.params.is_empty()
    }
}

impl std::fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.text);
        }

        let params = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} | {}", self.text, params)
    }
}

/// Joins lines into the text block written to stdout, one line per row
pub fn render_lines(lines: &[DisplayLine]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(&line.to_string());
        output.push('\n');
    }
    output
}
