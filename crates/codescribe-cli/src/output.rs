//! Text and JSON rendering of snippets

use codescribe_core::model::Snippet;

/// One-line summary: `#<id> <title> [<language>]`
pub fn summary_line(snippet: &Snippet) -> String {
    match &snippet.fields.language {
        Some(language) => format!("#{} {} [{}]", snippet.id, snippet.fields.title, language),
        None => format!("#{} {}", snippet.id, snippet.fields.title),
    }
}

/// Full listing of a snippet including its code
pub fn detail(snippet: &Snippet) -> String {
    let mut out = summary_line(snippet);
    if let Some(description) = &snippet.fields.description {
        out.push_str(&format!("\n{}", description));
    }
    if let Some(tags) = &snippet.fields.tags {
        out.push_str(&format!("\ntags: {}", tags));
    }
    out.push_str("\n---\n");
    out.push_str(&snippet.fields.code);
    out
}

pub fn print_list(snippets: &[Snippet], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(snippets)?);
    } else {
        for snippet in snippets {
            println!("{}", summary_line(snippet));
        }
    }
    Ok(())
}
