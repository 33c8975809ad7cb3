//! Rebuild reading-order lines from positioned text runs.
//!
//! PDF content streams place text with positioning operators rather than
//! newlines and spaces, so a page's lines have to be recovered from where each
//! run of text starts on the page.

/// A piece of text drawn from one starting position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub text: String,
}

impl TextRun {
    pub fn new(x: f32, y: f32, font_size: f32) -> Self {
        TextRun {
            x,
            y,
            font_size,
            text: String::new(),
        }
    }

    /// Runs whose baselines are this close belong to the same line.
    fn line_tolerance(&self) -> f32 {
        (self.font_size.abs() * 0.5).max(1.0)
    }
}

/// Group runs into lines top to bottom, each line left to right.
///
/// Separate runs on one line are joined with a single space.
pub fn assemble_lines(runs: Vec<TextRun>) -> Vec<String> {
    let mut runs: Vec<TextRun> = runs
        .into_iter()
        .filter(|r| !r.text.trim().is_empty())
        .collect();
    // PDF user space grows upwards.
    runs.sort_by(|a, b| b.y.total_cmp(&a.y));

    let mut lines: Vec<Vec<TextRun>> = Vec::new();
    for run in runs {
        match lines.last_mut() {
            Some(line) if (line[0].y - run.y).abs() <= line[0].line_tolerance() => line.push(run),
            _ => lines.push(vec![run]),
        }
    }

    lines
        .into_iter()
        .map(|mut line| {
            line.sort_by(|a, b| a.x.total_cmp(&b.x));
            join_runs(&line)
        })
        .collect()
}

fn join_runs(line: &[TextRun]) -> String {
    let mut text = String::new();
    for run in line {
        let needs_space = !text.is_empty()
            && !text.ends_with(char::is_whitespace)
            && !run.text.starts_with(char::is_whitespace);
        if needs_space {
            text.push(' ');
        }
        text.push_str(&run.text);
    }
    text
}
