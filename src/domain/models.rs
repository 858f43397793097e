use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One printed line: a label and its rendered value.
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub label: String,
    pub value: String,
}

/// A titled group of lines, corresponding to one demonstration routine.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a `label: value` line, rendering the value with `Display`.
    pub fn with(mut self, label: impl Into<String>, value: impl ToString) -> Self {
        self.lines.push(Line {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }
}

/// The full fixed output of one program, in print order.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub program: String,
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn new(program: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            program: program.into(),
            sections,
        }
    }
}
