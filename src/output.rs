use crate::domain::models::{JsonOut, Transcript};

/// Renders the plain-text form: a `[title]` header per section, one
/// `label: value` line per entry, blank line between sections.
pub fn render_text(transcript: &Transcript) -> String {
    let mut out = String::new();
    for (i, section) in transcript.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(&section.title);
        out.push_str("]\n");
        for line in &section.lines {
            out.push_str(&line.label);
            out.push_str(": ");
            out.push_str(&line.value);
            out.push('\n');
        }
    }
    out
}

pub fn print_transcript(json: bool, transcript: &Transcript) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: transcript
            })?
        );
    } else {
        print!("{}", render_text(transcript));
    }
    Ok(())
}
