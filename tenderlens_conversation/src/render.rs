use tenderlens_core::SummaryResult;

use crate::session::Turn;

/// Terminal rendering of a summary.
#[must_use]
pub fn render_summary(summary: &SummaryResult) -> String {
    let mut lines = vec!["📄 Summary".to_string(), summary.short_summary.clone()];

    section(&mut lines, "🎯 Relevance to Officials", &summary.relevance_to_officials);
    section(&mut lines, "✅ Action Items", &summary.action_items);

    lines.push(String::new());
    lines.push(format!("📊 Confidence: {}", summary.confidence_estimate));
    lines.join("\n")
}

fn section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(items.iter().map(|item| format!("• {item}")));
}

/// Terminal rendering of an assistant turn.
#[must_use]
pub fn render_turn(turn: &Turn) -> String {
    match &turn.summary {
        Some(summary) => format!("{}\n\n{}", turn.content, render_summary(summary)),
        None => turn.content.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenderlens_core::Confidence;

    fn sample() -> SummaryResult {
        SummaryResult {
            short_summary: "Tender No: X".to_string(),
            relevance_to_officials: vec!["Deadlines found: 28/02/2024".to_string()],
            action_items: vec!["Note submission deadlines".to_string()],
            confidence_estimate: Confidence::Medium,
        }
    }

    #[test]
    fn summary_lists_every_section() {
        let rendered = render_summary(&sample());
        assert!(rendered.starts_with("📄 Summary\nTender No: X\n"));
        assert!(rendered.contains("🎯 Relevance to Officials\n• Deadlines found: 28/02/2024\n"));
        assert!(rendered.contains("✅ Action Items\n• Note submission deadlines\n"));
        assert!(rendered.ends_with("📊 Confidence: medium"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let summary = SummaryResult {
            short_summary: "Document processed successfully".to_string(),
            ..SummaryResult::default()
        };
        let rendered = render_summary(&summary);
        assert!(!rendered.contains("Relevance"));
        assert!(!rendered.contains("Action Items"));
        assert!(rendered.ends_with("📊 Confidence: low"));
    }

    #[test]
    fn text_turn_renders_content_only() {
        let turn = Turn::assistant("📅 **Deadlines Found:**\n• 28/02/2024");
        assert_eq!(render_turn(&turn), "📅 **Deadlines Found:**\n• 28/02/2024");
    }

    #[test]
    fn summary_turn_renders_intro_then_summary() {
        let turn = Turn::summary("Intro:", sample());
        let rendered = render_turn(&turn);
        assert!(rendered.starts_with("Intro:\n\n📄 Summary\n"));
    }
}
