use anyhow::{Context, Result};
use regex::Regex;

/// Strips markup out of a player name before it is stored, so the name is
/// safe to render later regardless of output channel. Script elements lose
/// their content as well; ordinary tags keep their inner text.
pub fn strip_markup(name: &str) -> Result<String> {
    let scripts = compile_script_regex()?;
    let tags = compile_tag_regex()?;

    let without_scripts = scripts.replace_all(name, "");
    let without_tags = tags.replace_all(&without_scripts, "");
    Ok(without_tags.trim().to_string())
}

fn compile_script_regex() -> Result<Regex> {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>")
        .context("Failed to compile script-element regex")
}

fn compile_tag_regex() -> Result<Regex> {
    Regex::new(r"(?s)<[^>]*>").context("Failed to compile markup-tag regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(strip_markup("Ada Lovelace").unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_tags_are_stripped_keeping_text() {
        assert_eq!(strip_markup("<b>Grace</b> Hopper").unwrap(), "Grace Hopper");
    }

    #[test]
    fn test_script_content_is_removed_entirely() {
        let name = "Alan<script>alert('xss')</script> Turing";
        assert_eq!(strip_markup(name).unwrap(), "Alan Turing");
    }

    #[test]
    fn test_markup_only_name_sanitizes_to_empty() {
        assert_eq!(strip_markup("<script>alert(1)</script>").unwrap(), "");
        assert_eq!(strip_markup("<div></div>").unwrap(), "");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(strip_markup("  Edsger Dijkstra  ").unwrap(), "Edsger Dijkstra");
    }
}
