use nafham_core::language::LanguagePack;
use nafham_types::ResultsView;

/// Plain-text rendering of one search state
pub fn render_view(view: &ResultsView, pack: &impl LanguagePack) -> String {
    let prompt = if view.query.trim().is_empty() {
        pack.placeholder(view.direction)
    } else {
        view.query.as_str()
    };

    let mut out = format!("[{}] › {}\n", pack.direction_label(view.direction), prompt);

    if view.results.is_empty() {
        out.push_str(&format!("  {}\n", pack.empty_state()));
        return out;
    }

    for (i, result) in view.results.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>3}. {}\n", i + 1, result.primary));
        out.push_str(&format!("     {}\n", result.secondary));
        out.push_str(&format!("     {}\n", result.transliteration));
        out.push_str(&format!("     {}\n", result.note));
    }

    out
}
